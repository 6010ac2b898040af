//! Text encoding for the free-form `misc_data` column.

use serde_json::Value;

/// Serialize a value to the compact text stored in `misc_data`.
pub fn encode(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Parse stored `misc_data` text back into a value.
pub fn decode(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_values_survive() {
        let value = json!({
            "notes": "urgent",
            "tags": ["a", 1, 2.5, true, null],
            "nested": { "empty": {}, "list": [] }
        });
        let text = encode(&value).unwrap();
        assert_eq!(decode(&text).unwrap(), value);
    }

    #[test]
    fn null_encodes_as_json_null() {
        assert_eq!(encode(&Value::Null).unwrap(), "null");
        assert_eq!(decode("null").unwrap(), Value::Null);
    }

    #[test]
    fn object_key_order_is_kept() {
        let text = r#"{"z":1,"a":2,"m":3}"#;
        assert_eq!(encode(&decode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn invalid_text_is_rejected() {
        assert!(decode("").is_err());
        assert!(decode("{not json").is_err());
    }
}
