use serde::Deserialize;

use crate::domain::{MessageResponse, MessageSid, SendMessage};

const FORM_TO: &str = "To";
const FORM_FROM: &str = "From";
const FORM_BODY: &str = "Body";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response does not contain a message sid")]
    MissingSid,

    #[error("message rejected with error code {code}: {message}")]
    ErrorCode { code: i64, message: String },
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonResponse {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

/// Error body Twilio returns with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: String,
}

pub fn encode_send_message_form(message: &SendMessage) -> Vec<(String, String)> {
    vec![
        (FORM_TO.to_owned(), message.to().to_owned()),
        (FORM_FROM.to_owned(), message.from().as_str().to_owned()),
        (FORM_BODY.to_owned(), message.body().to_owned()),
    ]
}

pub fn decode_send_message_json_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;

    if let Some(code) = parsed.error_code {
        let message = parsed
            .error_message
            .filter(|it| !it.trim().is_empty())
            .unwrap_or_else(|| format!("error code {code}"));
        return Err(TransportError::ErrorCode { code, message });
    }

    let sid = parsed
        .sid
        .and_then(|sid| MessageSid::new(sid).ok())
        .ok_or(TransportError::MissingSid)?;

    Ok(MessageResponse {
        sid,
        status: parsed.status,
    })
}

/// Returns `None` when the body is not a Twilio error document.
pub fn decode_error_json_response(json: &str) -> Option<ApiErrorBody> {
    let parsed: ErrorJsonResponse = serde_json::from_str(json).ok()?;
    if parsed.message.trim().is_empty() {
        return None;
    }
    Some(ApiErrorBody {
        code: parsed.code,
        message: parsed.message,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::SenderNumber;

    use super::*;

    #[test]
    fn encode_form_params_in_twilio_field_names() {
        let from = SenderNumber::new("+15557654321").unwrap();
        let message = SendMessage::new("+15551234567", from, "hello");

        assert_eq!(
            encode_send_message_form(&message),
            vec![
                ("To".to_owned(), "+15551234567".to_owned()),
                ("From".to_owned(), "+15557654321".to_owned()),
                ("Body".to_owned(), "hello".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_accepted_message() {
        let json = r#"
        {
          "sid": "SM123",
          "status": "queued",
          "to": "+15551234567",
          "from": "+15557654321",
          "body": "hello",
          "error_code": null,
          "error_message": null
        }
        "#;

        let resp = decode_send_message_json_response(json).unwrap();
        assert_eq!(
            resp,
            MessageResponse {
                sid: MessageSid::new("SM123").unwrap(),
                status: Some("queued".to_owned()),
            }
        );
    }

    #[test]
    fn decode_error_code_in_success_body() {
        let json = r#"{"sid":null,"status":null,"error_code":20003,"error_message":"Authentication Error"}"#;

        let err = decode_send_message_json_response(json).unwrap_err();
        match err {
            TransportError::ErrorCode { code, message } => {
                assert_eq!(code, 20003);
                assert_eq!(message, "Authentication Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_error_code_without_message_falls_back_to_code() {
        let json = r#"{"sid":"SM1","error_code":30007,"error_message":""}"#;

        let err = decode_send_message_json_response(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "message rejected with error code 30007: error code 30007"
        );
    }

    #[test]
    fn decode_missing_sid() {
        let err = decode_send_message_json_response(r#"{"status":"queued"}"#).unwrap_err();
        assert!(matches!(err, TransportError::MissingSid));

        let err = decode_send_message_json_response(r#"{"sid":"  "}"#).unwrap_err();
        assert!(matches!(err, TransportError::MissingSid));
    }

    #[test]
    fn decode_invalid_json() {
        let err = decode_send_message_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_twilio_error_document() {
        let json = r#"
        {
          "code": 21211,
          "message": "The 'To' number 123 is not a valid phone number.",
          "more_info": "https://www.twilio.com/docs/errors/21211",
          "status": 400
        }
        "#;

        assert_eq!(
            decode_error_json_response(json),
            Some(ApiErrorBody {
                code: Some(21211),
                message: "The 'To' number 123 is not a valid phone number.".to_owned(),
            })
        );
    }

    #[test]
    fn non_error_documents_are_ignored() {
        assert_eq!(decode_error_json_response("<html>bad gateway</html>"), None);
        assert_eq!(decode_error_json_response(r#"{"code":1}"#), None);
        assert_eq!(decode_error_json_response(r#"{"message":" "}"#), None);
    }
}
