use crate::domain::value::MessageSid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub sid: MessageSid,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Normalized result of a single send.
///
/// Local configuration failures and provider failures share the `Failure` shape;
/// they differ only in the error text.
pub enum SendOutcome {
    Success { sid: String },
    Failure { error: String },
}

impl SendOutcome {
    pub fn success(sid: impl Into<String>) -> Self {
        Self::Success { sid: sid.into() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn sid(&self) -> Option<&str> {
        match self {
            Self::Success { sid } => Some(sid),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}
