use serde::{Serialize, Serializer};

use crate::domain::SendOutcome;

#[derive(Serialize)]
struct OutcomeJson<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Serializes as `{"success": true, "sid": ...}` or `{"success": false, "error": ...}`.
impl Serialize for SendOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeJson {
            success: self.is_success(),
            sid: self.sid(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shape() {
        let json = serde_json::to_string(&SendOutcome::success("SM123")).unwrap();
        assert_eq!(json, r#"{"success":true,"sid":"SM123"}"#);
    }

    #[test]
    fn failure_shape() {
        let json =
            serde_json::to_string(&SendOutcome::failure("Missing Twilio credentials")).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"error":"Missing Twilio credentials"}"#
        );
    }
}
