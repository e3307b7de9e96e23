use config::{Config, Environment, File};
use inkpost_core::errors::{ExError, ExErrorKind};
use inkpost_core::logging_facility::Profile;
use inkpost_core_types::Sensitive;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "inkpost.toml";

/// Prefix of the environment variables that override file values,
/// e.g. `INKPOST__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "INKPOST";

#[derive(Debug, Clone, Deserialize)]
/// The top-level configuration, holding all the values required
/// to configure the entire application.
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
/// Where the HTTP server listens.
pub struct ServerSettings {
    /// The network interface that the server must be bound to.
    pub host: IpAddr,
    /// The port that the server must listen on.
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite database file, created on first start
    pub path: PathBuf,
    /// Upper bound on pooled connections
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Key used to sign flash-message cookies.
    pub secret_key: Sensitive<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub profile: Profile,
}

impl Settings {
    /// Load settings from defaults, an optional TOML file and the environment
    ///
    /// With `config_file` set the file must exist; otherwise
    /// [`DEFAULT_CONFIG_FILE`] is read if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ExError> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        Self::load_from(config_file, env)
    }

    fn load_from(config_file: Option<&Path>, env: Environment) -> Result<Self, ExError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        Config::builder()
            .set_default("server.host", "127.0.0.1")
            .and_then(|b| b.set_default("server.port", 5000))
            .and_then(|b| b.set_default("database.path", "inkpost.db"))
            .and_then(|b| b.set_default("database.pool_size", 4))
            .and_then(|b| b.set_default("session.secret_key", "your-secret-key"))
            .and_then(|b| b.set_default("logging.profile", "development"))
            .map_err(config_error)?
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }
}

fn config_error(err: config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op("load_settings")
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        // An explicit but missing file is an error, so go through the optional default path
        assert!(Settings::load_from(Some(&missing), env(&[])).is_err());

        let settings = Settings::load_from(None, env(&[])).unwrap();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.addr().to_string(), "127.0.0.1:5000");
        assert_eq!(settings.database.pool_size, 4);
        assert_eq!(settings.logging.profile, Profile::Development);
    }

    #[test]
    fn test_file_then_env_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inkpost.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8080

[database]
path = "/var/lib/inkpost/blog.db"

[session]
secret_key = "from-file"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(
            Some(&path),
            env(&[
                ("INKPOST__SERVER__PORT", "9090"),
                ("INKPOST__LOGGING__PROFILE", "production"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(
            settings.database.path,
            PathBuf::from("/var/lib/inkpost/blog.db")
        );
        assert_eq!(settings.session.secret_key.expose(), "from-file");
        assert_eq!(settings.logging.profile, Profile::Production);
    }

    #[test]
    fn test_secret_key_is_redacted_in_debug() {
        let settings = Settings::load_from(None, env(&[])).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("your-secret-key"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_invalid_port_is_configuration_error() {
        let err = Settings::load_from(None, env(&[("INKPOST__SERVER__PORT", "not-a-port")]))
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Configuration);
    }
}
