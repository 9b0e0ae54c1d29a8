//! Configuration loading tests

#[cfg(test)]
mod tests {
    use order_ingest::IngestError;
    use order_ingest::config::{Config, LogFormat, ServiceConfig};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let file = write_config("ingest:\n  max_workers: 12\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.server().port, 8080);
        assert_eq!(config.ingest().max_batch_size, 1000);
        assert_eq!(config.ingest().max_workers, Some(12));
        assert_eq!(config.logging().format, LogFormat::Text);
    }

    #[tokio::test]
    async fn test_unknown_log_format_rejected() {
        let file = write_config("logging:\n  format: xml\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, IngestError::Config(_)));
    }

    #[tokio::test]
    async fn test_invalid_database_url_rejected() {
        let file = write_config("storage:\n  database:\n    url: \"mysql://db/orders\"\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, IngestError::Config(ref m) if m.contains("Storage config error")));
    }

    #[tokio::test]
    async fn test_env_overrides_file_values() {
        let file = write_config("ingest:\n  max_batch_size: 10\n  timeout_ms: 100\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let service: ServiceConfig = config
            .service
            .apply_env_with(|name| match name {
                "INGEST_MAX_BATCH_SIZE" => Some("20".to_string()),
                "INGEST_TIMEOUT_MS" => Some("250".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(service.ingest.max_batch_size, 20);
        assert_eq!(service.ingest.timeout(), Some(Duration::from_millis(250)));
    }

    #[tokio::test]
    async fn test_yaml_round_trip() {
        let file = write_config("server:\n  port: 9000\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let reparsed = write_config(&config.to_yaml().unwrap());
        let again = Config::from_file(reparsed.path()).await.unwrap();
        assert_eq!(again.server().port, 9000);
        assert_eq!(again.ingest(), config.ingest());
    }
}
