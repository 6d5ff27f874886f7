//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Credentials, CredentialsConfig, SendMessage};
pub use response::{MessageResponse, SendOutcome};
pub use validation::ValidationError;
pub use value::{AccountSid, AuthToken, MessageSid, SenderNumber};
