//! Send one SMS through the Twilio REST API and get back a normalized outcome.
//!
//! The crate is layered the usual way: a domain layer of strong types, a
//! transport layer for wire formats, a small client for the Twilio Messages
//! resource, and a sender that resolves credentials and never fails outright.
//!
//! ```rust,no_run
//! use twilio_sms::{CredentialsConfig, SendOutcome, send_sms};
//!
//! #[tokio::main]
//! async fn main() {
//!     // `None` reads TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER.
//!     match send_sms("+15551234567", "hello", None).await {
//!         SendOutcome::Success { sid } => println!("sent {sid}"),
//!         SendOutcome::Failure { error } => eprintln!("not sent: {error}"),
//!     }
//!
//!     let config = CredentialsConfig::new("AC...", "auth-token", "+15557654321");
//!     let _outcome = send_sms("+15551234567", "hello", Some(&config)).await;
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod sender;
mod transport;

pub use client::{Auth, BoxFuture, TwilioClient, TwilioClientBuilder, TwilioError};
pub use domain::{
    AccountSid, AuthToken, Credentials, CredentialsConfig, MessageResponse, MessageSid,
    SendMessage, SendOutcome, SenderNumber, ValidationError,
};
pub use sender::{
    ACCOUNT_SID_VAR, AUTH_TOKEN_VAR, EnvSource, MISSING_CREDENTIALS, MessageProvider,
    PHONE_NUMBER_VAR, ProcessEnv, ProviderError, SmsSender, TwilioProvider, send_sms,
};
pub use transport::ConfigError;
