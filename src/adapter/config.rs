use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

pub const PRODUCTION: &str = "production";

const DEFAULT_ENV: &str = "dev";
const DEFAULT_ADDRESS: &str = "localhost:8080";

const ENV_VAR: &str = "ENV";
const HTTP_VAR: &str = "HTTP";
const DB_URL_VAR: &str = "DB_URL";
const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

#[derive(Debug, Parser)]
#[command(version, about = "User intake HTTP service")]
pub struct Cli {
    /// path to configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config path is not set")]
    MissingPath,

    #[error("config path is set but not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read config: {0}")]
    ParseFailure(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(value: config::ConfigError) -> Self {
        ConfigError::ParseFailure(value.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    address: String,
}

/// Process settings, resolved once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    env: String,
    http: HttpConfig,
    #[serde(default)]
    db: Option<String>,
}

/// Everything the loader reads from the outside world.
///
/// Kept separate from the real process so loading can be exercised with
/// hand-built inputs.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    vars: HashMap<String, String>,
    config_flag: Option<PathBuf>,
}

impl ConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process: `.env` (if any), environment variables and the `--config` flag.
    pub fn from_process(config_flag: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();

        Self {
            vars: std::env::vars().collect(),
            config_flag,
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_config_flag(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_flag = Some(path.into());
        self
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    // Unset and empty are the same thing for these lookups.
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.raw(key).filter(|value| !value.is_empty())
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.non_empty(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(|| {
                self.config_flag
                    .clone()
                    .filter(|path| !path.as_os_str().is_empty())
            })
    }
}

impl AppConfig {
    /// Loads configuration for the running process.
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Self::load_from(&ConfigSource::from_process(cli.config))
    }

    /// Outside production the settings come from a file (format picked from its
    /// extension); in production they come from the environment alone. In both
    /// cases `ENV`, `HTTP` and `DB_URL` override what the file says.
    pub fn load_from(source: &ConfigSource) -> Result<Self, ConfigError> {
        let mode = source.non_empty(ENV_VAR).unwrap_or(DEFAULT_ENV);

        let mut builder = config::Config::builder()
            .set_default("env", DEFAULT_ENV)?
            .set_default("http.address", DEFAULT_ADDRESS)?;

        if mode != PRODUCTION {
            let path = source.config_path().ok_or(ConfigError::MissingPath)?;
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let config: AppConfig = builder
            .set_override_option("env", source.non_empty(ENV_VAR))?
            .set_override_option("http.address", source.raw(HTTP_VAR))?
            .set_override_option("db", source.non_empty(DB_URL_VAR))?
            .build()?
            .try_deserialize()?;

        if config.http.address.trim().is_empty() {
            return Err(ConfigError::ParseFailure(
                "http.address must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn address(&self) -> &str {
        &self.http.address
    }

    pub fn db_url(&self) -> Option<&str> {
        self.db.as_deref()
    }

    pub fn is_production(&self) -> bool {
        self.env == PRODUCTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const YAML: &str = "env: local\nhttp:\n  address: 127.0.0.1:9000\ndb: postgres://localhost/app\n";

    #[rstest]
    #[case(&["user_intake", "--config", "x.yaml"], Some("x.yaml"))]
    #[case(&["user_intake", "--config=conf/local.toml"], Some("conf/local.toml"))]
    #[case(&["user_intake"], None)]
    fn parses_config_flag(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, expected.map(PathBuf::from));
    }

    #[test]
    fn config_flag_requires_a_value() {
        assert!(Cli::try_parse_from(["user_intake", "--config"]).is_err());
    }

    #[test]
    fn parsed_flag_feeds_the_loader() {
        let file = config_file(".yaml", YAML);
        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["user_intake", "--config", path.as_str()]).unwrap();

        let mut source = ConfigSource::new();
        if let Some(flag) = cli.config {
            source = source.with_config_flag(flag);
        }

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn missing_path_outside_production() {
        let err = AppConfig::load_from(&ConfigSource::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPath));
    }

    #[test]
    fn empty_config_path_falls_through_to_missing() {
        let source = ConfigSource::new().with_var(CONFIG_PATH_VAR, "");
        let err = AppConfig::load_from(&source).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPath));
    }

    #[test]
    fn path_that_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let source = ConfigSource::new().with_var(CONFIG_PATH_VAR, missing.to_string_lossy());

        let err = AppConfig::load_from(&source).unwrap_err();
        match err {
            ConfigError::NotFound(path) => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_yaml_file_from_config_path() {
        let file = config_file(".yaml", YAML);
        let source = ConfigSource::new().with_var(CONFIG_PATH_VAR, file.path().to_string_lossy());

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.env(), "local");
        assert_eq!(config.address(), "127.0.0.1:9000");
        assert_eq!(config.db_url(), Some("postgres://localhost/app"));
        assert!(!config.is_production());
    }

    #[test]
    fn reads_file_from_flag() {
        let file = config_file(".yaml", YAML);
        let source = ConfigSource::new().with_config_flag(file.path());

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn config_path_wins_over_flag() {
        let from_env = config_file(".yaml", YAML);
        let from_flag = config_file(".yaml", "http:\n  address: 0.0.0.0:1\n");
        let source = ConfigSource::new()
            .with_var(CONFIG_PATH_VAR, from_env.path().to_string_lossy())
            .with_config_flag(from_flag.path());

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn file_defaults_fill_missing_keys() {
        let file = config_file(".toml", "db = \"postgres://localhost/app\"\n");
        let source = ConfigSource::new().with_config_flag(file.path());

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.env(), "dev");
        assert_eq!(config.address(), "localhost:8080");
    }

    #[test]
    fn environment_overrides_file() {
        let file = config_file(".yaml", YAML);
        let source = ConfigSource::new()
            .with_config_flag(file.path())
            .with_var(HTTP_VAR, "127.0.0.1:7000")
            .with_var(ENV_VAR, "staging");

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.env(), "staging");
        assert_eq!(config.address(), "127.0.0.1:7000");
    }

    #[test]
    fn malformed_file_is_a_parse_failure() {
        let file = config_file(".yaml", "http: [unclosed\n");
        let source = ConfigSource::new().with_config_flag(file.path());

        let err = AppConfig::load_from(&source).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailure(_)));
    }

    #[test]
    fn production_reads_environment_only() {
        let source = ConfigSource::new()
            .with_var(ENV_VAR, PRODUCTION)
            .with_var(HTTP_VAR, "0.0.0.0:80")
            .with_var(DB_URL_VAR, "postgres://db/app");

        let config = AppConfig::load_from(&source).unwrap();
        assert!(config.is_production());
        assert_eq!(config.address(), "0.0.0.0:80");
        assert_eq!(config.db_url(), Some("postgres://db/app"));
    }

    #[test]
    fn production_applies_defaults_and_ignores_config_path() {
        let source = ConfigSource::new()
            .with_var(ENV_VAR, PRODUCTION)
            .with_var(CONFIG_PATH_VAR, "/does/not/exist.yaml");

        let config = AppConfig::load_from(&source).unwrap();
        assert_eq!(config.address(), "localhost:8080");
        assert_eq!(config.db_url(), None);
    }

    #[test]
    fn production_rejects_empty_address() {
        let source = ConfigSource::new()
            .with_var(ENV_VAR, PRODUCTION)
            .with_var(HTTP_VAR, "");

        let err = AppConfig::load_from(&source).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailure(_)));
    }
}
