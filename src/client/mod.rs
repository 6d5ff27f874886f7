//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    AccountSid, AuthToken, Credentials, MessageResponse, SendMessage, ValidationError,
};
use crate::transport::TransportError;

const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";
const API_VERSION: &str = "2010-04-01";

/// Boxed `Send` future used at the crate's trait seams.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(auth.account_sid.as_str(), Some(auth.auth_token.as_str()))
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// HTTP Basic credentials for the Twilio REST API (Account SID + Auth Token).
pub struct Auth {
    account_sid: AccountSid,
    auth_token: AuthToken,
}

impl Auth {
    /// Create [`Auth`] and validate that both parts are non-empty.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth_token: AuthToken::new(auth_token)?,
        })
    }

    /// Build from already validated parts.
    pub fn from_parts(account_sid: AccountSid, auth_token: AuthToken) -> Self {
        Self {
            account_sid,
            auth_token,
        }
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }
}

impl From<&Credentials> for Auth {
    fn from(value: &Credentials) -> Self {
        Self::from_parts(value.account_sid().clone(), value.auth_token().clone())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwilioClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (Twilio error documents and `error_code` fields),
/// - base-URL and parse failures.
pub enum TwilioError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without a Twilio error document.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Twilio rejected the request.
    #[error("HTTP {status} error: Unable to create record: {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured API base URL cannot be used to address the Messages resource.
    #[error("invalid API base URL: {url}")]
    InvalidBaseUrl { url: String },
}

#[derive(Debug, Clone)]
/// Builder for [`TwilioClient`].
///
/// Use this when you need to customize the API base URL, timeout, or user-agent.
pub struct TwilioClientBuilder {
    auth: Auth,
    api_base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwilioClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (`https://api.twilio.com`), e.g. to target a mock server.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TwilioClient`].
    pub fn build(self) -> Result<TwilioClient, TwilioError> {
        messages_url(&self.api_base_url, &self.auth.account_sid)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TwilioError::Transport(Box::new(err)))?;

        Ok(TwilioClient {
            auth: self.auth,
            api_base_url: self.api_base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Twilio REST client scoped to one account.
///
/// Only the Messages resource is supported: `POST
/// /2010-04-01/Accounts/{AccountSid}/Messages.json` with a form-encoded body and
/// HTTP Basic auth.
pub struct TwilioClient {
    auth: Auth,
    api_base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl TwilioClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TwilioClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> TwilioClientBuilder {
        TwilioClientBuilder::new(auth)
    }

    /// Submit one outbound message.
    ///
    /// Errors:
    /// - [`TwilioError::Transport`] when the request could not be sent,
    /// - [`TwilioError::Api`] when Twilio rejects the message,
    /// - [`TwilioError::HttpStatus`] for other non-2xx responses,
    /// - [`TwilioError::Parse`] when an accepted response cannot be read.
    pub async fn send_message(
        &self,
        message: SendMessage,
    ) -> Result<MessageResponse, TwilioError> {
        let url = messages_url(&self.api_base_url, &self.auth.account_sid)?;
        let params = crate::transport::encode_send_message_form(&message);

        debug!(to = %message.to(), from = %message.from().as_str(), "submitting message to Twilio");

        let response = self
            .http
            .post_form(&url, &self.auth, params)
            .await
            .map_err(TwilioError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, "Twilio returned a non-success status");
            if let Some(api) = crate::transport::decode_error_json_response(&response.body) {
                return Err(TwilioError::Api {
                    status: response.status,
                    code: api.code,
                    message: api.message,
                });
            }
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(TwilioError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_message_json_response(&response.body)
            .map_err(|err| match err {
                TransportError::ErrorCode { code, message } => TwilioError::Api {
                    status: response.status,
                    code: Some(code),
                    message,
                },
                other => TwilioError::Parse(Box::new(other)),
            })?;

        debug!(sid = %parsed.sid, status = ?parsed.status, "Twilio accepted message");

        Ok(parsed)
    }
}

fn messages_url(api_base_url: &str, account_sid: &AccountSid) -> Result<String, TwilioError> {
    let invalid = || TwilioError::InvalidBaseUrl {
        url: api_base_url.to_owned(),
    };

    let mut url = Url::parse(api_base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .extend([
            API_VERSION,
            "Accounts",
            account_sid.as_str(),
            "Messages.json",
        ]);
    Ok(url.into())
}
