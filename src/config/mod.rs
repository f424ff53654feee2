// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use config::builder::{ConfigBuilder, DefaultState};
use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Prefix for environment overrides, e.g. `COATING_SERVER__PORT=9000`
const ENV_PREFIX: &str = "COATING";

impl Config {
    /// Load configuration from specified file path (extension optional)
    ///
    /// Sources, lowest priority first: built-in defaults, the file (if it
    /// exists), then `COATING_*` environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Built-in defaults only, ignoring files and environment
    pub fn load_defaults() -> Result<Self, config::ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("http.server_name", "coating-line-server")?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("performance.keep_alive", false)?
            .set_default("performance.connection_timeout", 30)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that read `COATING_*` variables must not overlap with tests that set them
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "coating-line-server-{name}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::load_defaults().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");
        assert!(cfg.logging.access_log_file.is_none());
        assert_eq!(cfg.http.max_body_size, 10_485_760);
        assert!(!cfg.performance.keep_alive);
        assert_eq!(cfg.performance.connection_timeout, 30);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_defaults().unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host() {
        let mut cfg = Config::load_defaults().unwrap();
        cfg.server.host = "not an address".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let path = temp_config(
            "file",
            "[server]\nport = 9123\n\n[http]\nmax_body_size = 1024\n",
        );

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.server.port, 9123);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.http.max_body_size, 1024);
        assert_eq!(cfg.http.server_name, "coating-line-server");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = Config::load_from("definitely-not-a-config-file").unwrap();
        assert_eq!(cfg.http.server_name, "coating-line-server");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        std::env::set_var("COATING_SERVER__PORT", "9555");
        std::env::set_var("COATING_HTTP__SERVER_NAME", "line-7");

        let cfg = Config::load_from("definitely-not-a-config-file");
        std::env::remove_var("COATING_SERVER__PORT");
        std::env::remove_var("COATING_HTTP__SERVER_NAME");

        let cfg = cfg.unwrap();
        assert_eq!(cfg.server.port, 9555);
        assert_eq!(cfg.http.server_name, "line-7");
        assert_eq!(cfg.server.host, "0.0.0.0");
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let path = temp_config("env", "[server]\nport = 9123\n\n[http]\nmax_body_size = 1024\n");
        std::env::set_var("COATING_SERVER__PORT", "9555");

        let cfg = Config::load_from(path.to_str().unwrap());
        std::env::remove_var("COATING_SERVER__PORT");
        std::fs::remove_file(&path).unwrap();

        let cfg = cfg.unwrap();
        assert_eq!(cfg.server.port, 9555);
        assert_eq!(cfg.http.max_body_size, 1024);
    }
}
