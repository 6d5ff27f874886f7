/// Environment variable holding the Twilio Account SID.
pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable holding the Twilio Auth Token.
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
/// Environment variable holding the sender phone number.
pub const PHONE_NUMBER_VAR: &str = "TWILIO_PHONE_NUMBER";

/// Source of credential variables when no explicit config is given.
///
/// Any `Fn(&str) -> Option<String>` is a source, which keeps callers and tests
/// away from the real process environment.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Reads the process environment. Unset and non-UTF-8 variables are absent.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}
