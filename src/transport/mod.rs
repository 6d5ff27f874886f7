//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod config;
mod outcome;
mod send_message;

pub use config::ConfigError;
pub use send_message::{
    TransportError, decode_error_json_response, decode_send_message_json_response,
    encode_send_message_form,
};
