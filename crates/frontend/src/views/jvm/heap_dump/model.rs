use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, post_action, ActionError, HttpError, HttpTransport};
use contracts::jvm::heap_dump::{DirectoryRequest, DiskSpace, HeapDumpDefaults, HeapDumpFile};

const DEFAULTS_PATH: &str = "jvm/heap-dump-defaults";
const CHECK_DISK_SPACE_PATH: &str = "jvm/check-disk-space";
const DUMP_HEAP_PATH: &str = "jvm/dump-heap";

/// Suggested target directory for heap dumps
pub async fn fetch_defaults<H>(transport: &H, base_path: &str) -> Result<HeapDumpDefaults, HttpError>
where
    H: HttpTransport + ?Sized,
{
    get_json(transport, &api_url(base_path, DEFAULTS_PATH)).await
}

/// Free space in `directory` as seen by the monitored JVM
pub async fn check_disk_space<H>(
    transport: &H,
    base_path: &str,
    directory: &str,
) -> Result<DiskSpace, ActionError>
where
    H: HttpTransport + ?Sized,
{
    let request = DirectoryRequest {
        directory: directory.to_string(),
    };
    post_action(transport, &api_url(base_path, CHECK_DISK_SPACE_PATH), &request).await
}

/// Write a heap dump of the monitored JVM into `directory`
pub async fn dump_heap<H>(
    transport: &H,
    base_path: &str,
    directory: &str,
) -> Result<HeapDumpFile, ActionError>
where
    H: HttpTransport + ?Sized,
{
    let request = DirectoryRequest {
        directory: directory.to_string(),
    };
    post_action(transport, &api_url(base_path, DUMP_HEAP_PATH), &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::errors::{GENERIC_ERROR_MESSAGE, NO_RESPONSE_MESSAGE};
    use crate::shared::http::mock::MockTransport;

    #[tokio::test]
    async fn test_fetch_defaults() {
        let transport = MockTransport::new().respond_get(
            "backend/jvm/heap-dump-defaults",
            200,
            r#"{"directory":"/var/dumps"}"#,
        );
        let defaults = fetch_defaults(&transport, "backend").await.unwrap();
        assert_eq!(defaults.directory, "/var/dumps");
    }

    #[tokio::test]
    async fn test_check_disk_space_success() {
        let transport = MockTransport::new().respond_post(
            "backend/jvm/check-disk-space",
            200,
            r#"{"availableDiskSpace":1048576}"#,
        );
        let space = check_disk_space(&transport, "backend", "/tmp").await.unwrap();
        assert_eq!(space.available_disk_space, 1048576);
        assert_eq!(
            transport.posted_bodies(),
            vec![serde_json::json!({"directory": "/tmp"})]
        );
    }

    #[tokio::test]
    async fn test_check_disk_space_domain_error_rejects() {
        let transport = MockTransport::new().respond_post(
            "backend/jvm/check-disk-space",
            200,
            r#"{"error":"bad path"}"#,
        );
        let error = check_disk_space(&transport, "backend", "/tmp")
            .await
            .unwrap_err();
        assert_eq!(error, ActionError::Domain("bad path".to_string()));
        assert_eq!(error.to_string(), "bad path");
    }

    #[tokio::test]
    async fn test_dump_heap_without_server() {
        let transport = MockTransport::new();
        let error = dump_heap(&transport, "backend", "/tmp").await.unwrap_err();
        assert_eq!(error.to_string(), NO_RESPONSE_MESSAGE);
        assert_eq!(transport.requested(), vec!["POST backend/jvm/dump-heap"]);
    }

    #[tokio::test]
    async fn test_dump_heap_server_error_is_generic() {
        let transport = MockTransport::new().respond_post(
            "backend/jvm/dump-heap",
            500,
            r#"{"message":"java.io.IOException"}"#,
        );
        let error = dump_heap(&transport, "backend", "/tmp").await.unwrap_err();
        assert_eq!(error.to_string(), GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_dump_heap_success() {
        let transport = MockTransport::new().respond_post(
            "backend/jvm/dump-heap",
            200,
            r#"{"filename":"/tmp/heap-dump-20240101.hprof","size":52428800}"#,
        );
        let file = dump_heap(&transport, "backend", "/tmp").await.unwrap();
        assert_eq!(file.filename, "/tmp/heap-dump-20240101.hprof");
        assert_eq!(file.size, 52428800);
    }
}
