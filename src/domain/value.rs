use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio Account SID (`AC...`), used as the Basic auth user name and as part of
/// the Messages resource URL.
///
/// Invariant: non-empty. The value is kept exactly as given.
pub struct AccountSid(String);

impl AccountSid {
    /// Configuration key for the account SID (`accountSid`).
    pub const FIELD: &'static str = "accountSid";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Twilio Auth Token, used as the Basic auth password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// `Debug` output never contains the token.
pub struct AuthToken(String);

impl AuthToken {
    /// Configuration key for the auth token (`authToken`).
    pub const FIELD: &'static str = "authToken";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio phone number messages are sent from (`From`).
///
/// Invariant: non-empty. The number is kept exactly as given; Twilio rejects
/// numbers that are not enabled on the account.
pub struct SenderNumber(String);

impl SenderNumber {
    /// Configuration key for the sender number (`phoneNumber`).
    pub const FIELD: &'static str = "phoneNumber";

    /// Create a validated [`SenderNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message SID (`SM...`) assigned by Twilio when a message is accepted.
///
/// Invariant: non-empty after trimming.
pub struct MessageSid(String);

impl MessageSid {
    /// Field name in Twilio's JSON response (`sid`).
    pub const FIELD: &'static str = "sid";

    /// Create a validated [`MessageSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
