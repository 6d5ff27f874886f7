//! Sender layer: resolves credentials, submits one message, and normalizes the
//! outcome. Nothing fails out of [`SmsSender::send`]; every error becomes
//! [`SendOutcome::Failure`].

mod env;
mod provider;

use tracing::{debug, instrument, warn};

use crate::domain::{Credentials, CredentialsConfig, SendMessage, SendOutcome, ValidationError};

pub use env::{ACCOUNT_SID_VAR, AUTH_TOKEN_VAR, EnvSource, PHONE_NUMBER_VAR, ProcessEnv};
pub use provider::{MessageProvider, ProviderError, TwilioProvider};

/// Failure text for an incomplete credential set.
pub const MISSING_CREDENTIALS: &str = "Missing Twilio credentials";

const UNSPECIFIED_PROVIDER_ERROR: &str = "SMS provider returned an unspecified error";

/// Sends one SMS per call through a [`MessageProvider`].
///
/// ```rust,no_run
/// use twilio_sms::{CredentialsConfig, SmsSender};
///
/// #[tokio::main]
/// async fn main() {
///     let config = CredentialsConfig::new("AC...", "auth-token", "+15557654321");
///     let outcome = SmsSender::new()
///         .send("+15551234567", "hello", Some(&config))
///         .await;
///     println!("{outcome:?}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SmsSender<P = TwilioProvider, E = ProcessEnv> {
    provider: P,
    env: E,
}

impl SmsSender {
    /// Twilio provider with default settings, credentials from the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P, E> SmsSender<P, E>
where
    P: MessageProvider,
    E: EnvSource,
{
    pub fn with_parts(provider: P, env: E) -> Self {
        Self { provider, env }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Explicit config wins; the environment is read only when `config` is `None`.
    pub fn resolve_credentials(
        &self,
        config: Option<&CredentialsConfig>,
    ) -> Result<Credentials, ValidationError> {
        match config {
            Some(config) => Credentials::from_config(config),
            None => Credentials::new(
                self.env.var(ACCOUNT_SID_VAR).unwrap_or_default(),
                self.env.var(AUTH_TOKEN_VAR).unwrap_or_default(),
                self.env.var(PHONE_NUMBER_VAR).unwrap_or_default(),
            ),
        }
    }

    /// Send `body` to `to`.
    ///
    /// Returns [`SendOutcome::Failure`] with [`MISSING_CREDENTIALS`] before any I/O when a
    /// credential is absent or empty, and with the provider's error text when submission fails.
    #[instrument(skip(self, body, config), fields(explicit_config = config.is_some()))]
    pub async fn send(
        &self,
        to: &str,
        body: &str,
        config: Option<&CredentialsConfig>,
    ) -> SendOutcome {
        let credentials = match self.resolve_credentials(config) {
            Ok(credentials) => credentials,
            Err(ValidationError::Empty { field }) => {
                warn!(field, "credentials incomplete; nothing sent");
                return SendOutcome::failure(MISSING_CREDENTIALS);
            }
        };

        let message = SendMessage::new(to, credentials.phone_number().clone(), body);
        debug!(account_sid = %credentials.account_sid().as_str(), "submitting message");

        match self.provider.submit(&credentials, message).await {
            Ok(sid) => {
                debug!(%sid, "message accepted");
                SendOutcome::success(sid.into_string())
            }
            Err(err) => {
                warn!(error = %err, "message submission failed");
                if err.message().trim().is_empty() {
                    SendOutcome::failure(UNSPECIFIED_PROVIDER_ERROR)
                } else {
                    SendOutcome::failure(err.message())
                }
            }
        }
    }
}

/// [`SmsSender::send`] with the default Twilio provider and the process environment.
pub async fn send_sms(to: &str, body: &str, config: Option<&CredentialsConfig>) -> SendOutcome {
    SmsSender::new().send(to, body, config).await
}
