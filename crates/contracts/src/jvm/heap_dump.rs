use serde::{Deserialize, Serialize};

/// Response of `GET jvm/heap-dump-defaults`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapDumpDefaults {
    pub directory: String,
}

/// Body of `POST jvm/check-disk-space` and `POST jvm/dump-heap`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRequest {
    pub directory: String,
}

/// Successful `check-disk-space` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSpace {
    /// Free bytes in the requested directory
    pub available_disk_space: u64,
}

/// Successful `dump-heap` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapDumpFile {
    pub filename: String,
    /// File size in bytes
    pub size: u64,
}

/// Domain failure reported inside a 200 response, e.g. `{"error":"Directory doesn't exist"}`
///
/// Every action response is read through this first; `null`, `false`, `0`
/// and `""` in `error` mean the action succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionFailure {
    #[serde(default)]
    pub error: serde_json::Value,
}

impl ActionFailure {
    /// Operator message when the response reports a failure
    pub fn message(&self) -> Option<String> {
        match &self.error {
            serde_json::Value::Null | serde_json::Value::Bool(false) => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_request_shape() {
        let body = DirectoryRequest {
            directory: "/tmp".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"directory":"/tmp"}"#
        );
    }

    #[test]
    fn test_heap_dump_file_parses_camel_case() {
        let file: HeapDumpFile =
            serde_json::from_str(r#"{"filename":"/tmp/heap-dump-1.hprof","size":1024}"#).unwrap();
        assert_eq!(file.filename, "/tmp/heap-dump-1.hprof");
        assert_eq!(file.size, 1024);

        let space: DiskSpace = serde_json::from_str(r#"{"availableDiskSpace":2048}"#).unwrap();
        assert_eq!(space.available_disk_space, 2048);
    }

    #[test]
    fn test_action_failure_message() {
        let failure: ActionFailure = serde_json::from_str(r#"{"error":"bad path"}"#).unwrap();
        assert_eq!(failure.message(), Some("bad path".to_string()));

        for body in [
            r#"{"availableDiskSpace":10}"#,
            r#"{"error":null}"#,
            r#"{"error":""}"#,
            r#"{"error":false}"#,
            r#"{"error":0}"#,
        ] {
            let failure: ActionFailure = serde_json::from_str(body).unwrap();
            assert_eq!(failure.message(), None, "{}", body);
        }

        let failure: ActionFailure = serde_json::from_str(r#"{"error":true}"#).unwrap();
        assert_eq!(failure.message(), Some("true".to_string()));
    }
}
