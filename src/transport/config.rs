use serde::Deserialize;

use crate::domain::CredentialsConfig;

#[derive(Debug, thiserror::Error)]
/// A credentials document that could not be read.
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsConfigJson {
    #[serde(default)]
    account_sid: Option<String>,
    #[serde(default)]
    auth_token: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
}

impl CredentialsConfig {
    /// Parse `{"accountSid": ..., "authToken": ..., "phoneNumber": ...}`.
    ///
    /// Missing keys and `null` values become `None`; unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let parsed: CredentialsConfigJson = serde_json::from_value(value)?;
        Ok(Self {
            account_sid: parsed.account_sid,
            auth_token: parsed.auth_token,
            phone_number: parsed.phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let config = CredentialsConfig::from_json(
            r#"{"accountSid":"AC1","authToken":"tok","phoneNumber":"+15557654321"}"#,
        )
        .unwrap();
        assert_eq!(config, CredentialsConfig::new("AC1", "tok", "+15557654321"));
    }

    #[test]
    fn missing_and_null_fields_are_absent() {
        let config =
            CredentialsConfig::from_json(r#"{"accountSid":"AC1","authToken":null,"extra":1}"#)
                .unwrap();
        assert_eq!(config.account_sid.as_deref(), Some("AC1"));
        assert_eq!(config.auth_token, None);
        assert_eq!(config.phone_number, None);

        assert_eq!(
            CredentialsConfig::from_json("{}").unwrap(),
            CredentialsConfig::default()
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CredentialsConfig::from_json("{accountSid: AC1").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_non_objects() {
        for json in [r#"["AC1","tok","+1"]"#, "null", "42", r#""AC1""#] {
            let err = CredentialsConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ConfigError::NotAnObject), "{json}");
        }
    }

    #[test]
    fn rejects_non_string_fields() {
        let err = CredentialsConfig::from_json(r#"{"accountSid":123}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
