// ABOUTME: Response envelope returned by the panel backend.
// ABOUTME: Wraps `{code, data, msg}` and decodes `data` into typed models.

use super::DispatchError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parsed `{"code": .., "data": .., "msg": ..}` envelope.
///
/// `code == 0` means success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reply {
    pub code: i64,
    #[serde(default)]
    pub data: Value,
    #[serde(default, rename = "msg")]
    pub message: String,
}

impl Reply {
    /// Successful reply carrying `data`.
    pub fn ok(data: Value) -> Self {
        Self {
            code: 0,
            data,
            message: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Decode the `data` field into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DispatchError> {
        T::deserialize(&self.data).map_err(|e| DispatchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_backend_envelope() {
        let reply: Reply =
            serde_json::from_str(r#"{"code":0,"data":{"Id":"abc"},"msg":"Container started"}"#)
                .unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.message, "Container started");
        assert_eq!(reply.data, json!({"Id": "abc"}));
    }

    #[test]
    fn missing_data_and_message_default() {
        let reply: Reply = serde_json::from_str(r#"{"code":-1}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.data, Value::Null);
        assert!(reply.message.is_empty());
    }

    #[test]
    fn decode_failure_is_reported() {
        let reply = Reply::ok(json!("not a number"));
        let err = reply.decode::<u64>().unwrap_err();
        assert!(matches!(err, DispatchError::Decode(_)));
    }
}
