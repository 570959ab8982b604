//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use batch_gateway::config::Config;
    use batch_gateway::server::load_config;
    use batch_gateway::utils::error::GatewayError;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
server:
  port: 9123
  max_body_size: 1024
batch:
  concurrency: 2
"#,
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 9123);
        assert_eq!(config.server().max_body_size, 1024);
        assert_eq!(config.batch().concurrency, 2);
        assert!(config.auth().token.is_none());
    }

    #[tokio::test]
    async fn test_load_config_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gateway.yaml");

        let config = crate::assert_ok!(load_config(&path).await);
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.batch().concurrency, 1);
    }

    #[tokio::test]
    async fn test_load_config_rejects_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  port: 0\n").unwrap();

        let err = crate::assert_err!(load_config(file.path()).await);
        assert!(matches!(err, GatewayError::Config(msg) if msg.contains("Port cannot be 0")));
    }

    #[tokio::test]
    async fn test_load_config_rejects_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server: {port: [").unwrap();

        let err = crate::assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_from_file_outside_async_context() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"auth:\n  token: \"abc\"\n").unwrap();

        let config = tokio_test::block_on(Config::from_file(file.path())).unwrap();
        assert_eq!(config.auth().token.as_deref(), Some("abc"));
        assert!(config.auth().is_enabled());
    }
}
