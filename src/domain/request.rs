use crate::domain::validation::ValidationError;
use crate::domain::value::{AccountSid, AuthToken, SenderNumber};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Credentials as supplied by a caller, before validation.
///
/// Any field may be absent; [`Credentials::from_config`] decides whether the set is usable.
pub struct CredentialsConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub phone_number: Option<String>,
}

impl CredentialsConfig {
    /// Config with all three fields present.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: Some(account_sid.into()),
            auth_token: Some(auth_token.into()),
            phone_number: Some(phone_number.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A complete, validated Twilio credential set.
pub struct Credentials {
    account_sid: AccountSid,
    auth_token: AuthToken,
    phone_number: SenderNumber,
}

impl Credentials {
    /// Validate all three values. Absent values should be passed as empty strings.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth_token: AuthToken::new(auth_token)?,
            phone_number: SenderNumber::new(phone_number)?,
        })
    }

    pub fn from_config(config: &CredentialsConfig) -> Result<Self, ValidationError> {
        Self::new(
            config.account_sid.clone().unwrap_or_default(),
            config.auth_token.clone().unwrap_or_default(),
            config.phone_number.clone().unwrap_or_default(),
        )
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    pub fn phone_number(&self) -> &SenderNumber {
        &self.phone_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound message for the Messages resource.
///
/// `to` and `body` are passed through as given; Twilio validates them.
pub struct SendMessage {
    to: String,
    from: SenderNumber,
    body: String,
}

impl SendMessage {
    pub fn new(to: impl Into<String>, from: SenderNumber, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from,
            body: body.into(),
        }
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &SenderNumber {
        &self.from
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
