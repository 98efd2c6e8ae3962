//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use shop_backend::ShopError;
    use shop_backend::config::{Config, MailTransport};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_shipped_example_config_is_valid() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/shop.yaml.example");
        let config = Config::from_file(&path).await.unwrap();

        assert_eq!(config.server().port, 8080);
        assert_eq!(config.server().cors.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.recovery().token_minutes, 30);
        assert!(!config.recovery().single_use_tokens);
        assert_eq!(config.mail().transport, MailTransport::Log);
    }

    #[tokio::test]
    async fn test_sections_fall_back_to_defaults() {
        let file = write_config("server:\n  port: 9000\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.server().port, 9000);
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.auth().jwt_issuer, "shop-backend");
        assert_eq!(config.auth().jwt_secret.len(), 64);
        assert!(config.database().migrate_on_start);
    }

    #[tokio::test]
    async fn test_http_mail_requires_relay_url() {
        let file = write_config("mail:\n  transport: http\n");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ShopError::Config(_))));
    }

    #[tokio::test]
    async fn test_credentials_with_wildcard_origin_rejected() {
        let file = write_config("server:\n  cors:\n    allowed_origins: [\"*\"]\n    allow_credentials: true\n");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ShopError::Config(_))));
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let file = write_config("server: [unterminated\n");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ShopError::Config(_))));
    }
}
