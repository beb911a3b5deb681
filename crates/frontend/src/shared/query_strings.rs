//! Query string encoding for backend GET requests.

use serde::Serialize;
use serde_json::Value;

/// Encode the fields of a serializable struct as `?key=value&...`
///
/// Keys are emitted in sorted order, null fields are dropped and arrays repeat
/// their key once per element. Returns an empty string when nothing remains.
pub fn encode_object<T: Serialize>(object: &T) -> Result<String, serde_json::Error> {
    let Value::Object(map) = serde_json::to_value(object)? else {
        return Ok(String::new());
    };

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut pairs = Vec::new();
    for key in keys {
        match &map[key] {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(value) = scalar(item) {
                        pairs.push(pair(key, &value));
                    }
                }
            }
            other => {
                if let Some(value) = scalar(other) {
                    pairs.push(pair(key, &value));
                }
            }
        }
    }

    if pairs.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{}", pairs.join("&")))
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

fn pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}
