use std::time::Duration;

use crate::client::{Auth, BoxFuture, TwilioClient, TwilioError};
use crate::domain::{Credentials, MessageSid, SendMessage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
/// Provider failure reduced to its human-readable text.
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TwilioError> for ProviderError {
    fn from(err: TwilioError) -> Self {
        Self::new(err.to_string())
    }
}

/// Builds a client for the resolved credentials and submits one message.
pub trait MessageProvider: Send + Sync {
    fn submit<'a>(
        &'a self,
        credentials: &'a Credentials,
        message: SendMessage,
    ) -> BoxFuture<'a, Result<MessageSid, ProviderError>>;
}

#[derive(Debug, Clone, Default)]
/// [`MessageProvider`] backed by [`TwilioClient`].
///
/// A fresh client is built for every submission, scoped to that call's credentials.
pub struct TwilioProvider {
    api_base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwilioProvider {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// No timeout is applied unless set here.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn client_for(&self, credentials: &Credentials) -> Result<TwilioClient, TwilioError> {
        let mut builder = TwilioClient::builder(Auth::from(credentials));
        if let Some(url) = self.api_base_url.as_ref() {
            builder = builder.api_base_url(url.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent.as_ref() {
            builder = builder.user_agent(user_agent.clone());
        }
        builder.build()
    }
}

impl MessageProvider for TwilioProvider {
    fn submit<'a>(
        &'a self,
        credentials: &'a Credentials,
        message: SendMessage,
    ) -> BoxFuture<'a, Result<MessageSid, ProviderError>> {
        Box::pin(async move {
            let client = self.client_for(credentials)?;
            let response = client.send_message(message).await?;
            Ok(response.sid)
        })
    }
}
