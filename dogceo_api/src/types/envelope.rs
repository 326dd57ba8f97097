use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Value of `status` on a successful response. Any other value is a failure.
pub const SUCCESS_STATUS: &str = "success";

/// Top-level object returned by every dog.ceo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    /// The payload on success; usually a human-readable description otherwise.
    #[serde(default)]
    pub message: Option<Value>,
}

impl Envelope {
    /// Parses a response body. The body must be a JSON object; serde would
    /// otherwise accept a positional array for this struct.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::Parse("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Interprets the envelope as a list of sub-breed names.
    ///
    /// Only a `success` envelope whose `message` is an array of strings is
    /// accepted. The order of the array is preserved. On any other status the
    /// `message` field is not looked at.
    pub fn into_sub_breeds(self) -> Result<Vec<String>, Error> {
        if !self.is_success() {
            return Err(Error::Unsuccessful {
                status: self.status,
            });
        }
        let message = self
            .message
            .ok_or_else(|| Error::Parse("missing field `message`".to_string()))?;
        serde_json::from_value::<Vec<String>>(message).map_err(|e| Error::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_preserves_order() {
        let env = envelope(json!({
            "status": "success",
            "message": ["whippet", "afghan", "basset"]
        }));
        assert_eq!(
            env.into_sub_breeds().unwrap(),
            vec!["whippet", "afghan", "basset"]
        );
    }

    #[test]
    fn success_keeps_duplicates() {
        let env = envelope(json!({"status": "success", "message": ["toy", "toy"]}));
        assert_eq!(env.into_sub_breeds().unwrap(), vec!["toy", "toy"]);
    }

    #[test]
    fn success_with_empty_array() {
        let env = envelope(json!({"status": "success", "message": []}));
        assert!(env.into_sub_breeds().unwrap().is_empty());
    }

    #[test]
    fn error_status_ignores_message() {
        let env = envelope(json!({"status": "error", "message": ["afghan"]}));
        match env.into_sub_breeds() {
            Err(Error::Unsuccessful { status }) => assert_eq!(status, "error"),
            other => panic!("expected Unsuccessful, got {:?}", other),
        }
    }

    #[test]
    fn status_is_case_sensitive() {
        let env = envelope(json!({"status": "Success", "message": []}));
        assert!(matches!(
            env.into_sub_breeds(),
            Err(Error::Unsuccessful { .. })
        ));
    }

    #[test]
    fn missing_message_on_success_is_parse_error() {
        let env = envelope(json!({"status": "success"}));
        assert!(matches!(env.into_sub_breeds(), Err(Error::Parse(_))));
    }

    #[test]
    fn null_message_on_success_is_parse_error() {
        let env = envelope(json!({"status": "success", "message": null}));
        assert!(matches!(env.into_sub_breeds(), Err(Error::Parse(_))));
    }

    #[test]
    fn string_message_on_success_is_parse_error() {
        let env = envelope(json!({"status": "success", "message": "afghan"}));
        assert!(matches!(env.into_sub_breeds(), Err(Error::Parse(_))));
    }

    #[test]
    fn non_string_element_is_parse_error() {
        let env = envelope(json!({"status": "success", "message": ["afghan", 3]}));
        assert!(matches!(env.into_sub_breeds(), Err(Error::Parse(_))));
    }

    #[test]
    fn positional_array_is_not_an_envelope() {
        let result = Envelope::from_json(r#"["success", ["afghan"]]"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(Envelope::from_json("not json"), Err(Error::Parse(_))));
        assert!(matches!(Envelope::from_json(""), Err(Error::Parse(_))));
    }

    #[test]
    fn missing_status_does_not_deserialize() {
        let result = serde_json::from_value::<Envelope>(json!({"message": []}));
        assert!(result.is_err());
    }

    #[test]
    fn non_string_status_does_not_deserialize() {
        let result = serde_json::from_value::<Envelope>(json!({"status": 200, "message": []}));
        assert!(result.is_err());
    }
}
