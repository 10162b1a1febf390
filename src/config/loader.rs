//! Configuration file loader.

use super::error::{ConfigError, ConfigResult};
use super::types::HarnessConfig;
use std::path::Path;

/// Loads harness configuration from TOML files or strings.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new configuration loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// holds malformed TOML.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<HarnessConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn load_str(&self, content: &str) -> ConfigResult<HarnessConfig> {
        let config: HarnessConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration or fall back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default<P: AsRef<Path>>(&self, path: P) -> ConfigResult<HarnessConfig> {
        let path = path.as_ref();
        if path.exists() {
            self.load(path)
        } else {
            Ok(HarnessConfig::default())
        }
    }
}

/// Reject workload values the corpus generator and runner cannot honor.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for zero iterations or zero routes.
pub fn validate(config: &HarnessConfig) -> ConfigResult<()> {
    if config.workload.iterations == 0 {
        return Err(ConfigError::InvalidValue {
            field: "workload.iterations".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if config.workload.routes == 0 {
        return Err(ConfigError::InvalidValue {
            field: "workload.routes".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_str_overrides_defaults() {
        let config = ConfigLoader::new()
            .load_str(
                r#"
[workload]
iterations = 50
routes = 20
args = 3
seed = 7

[report]
format = "json"
"#,
            )
            .unwrap();
        assert_eq!(config.workload.iterations, 50);
        assert_eq!(config.workload.routes, 20);
        assert_eq!(config.workload.args, 3);
        assert_eq!(config.workload.seed, Some(7));
    }

    #[test]
    fn test_load_str_rejects_malformed_toml() {
        let err = ConfigLoader::new().load_str("[workload\niterations = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::new().load("/nonexistent/harness.toml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[workload]\nroutes = 5").unwrap();

        let config = ConfigLoader::new().load(&path).unwrap();
        assert_eq!(config.workload.routes, 5);
        assert_eq!(config.workload.iterations, 1000);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = ConfigLoader::new()
            .load_or_default("/nonexistent/harness.toml")
            .unwrap();
        assert_eq!(config.workload.routes, 1000);
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let mut config = HarnessConfig::default();
        config.workload.iterations = 0;
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "workload.iterations"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_routes() {
        let mut config = HarnessConfig::default();
        config.workload.routes = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_zero_args() {
        let mut config = HarnessConfig::default();
        config.workload.args = 0;
        assert!(validate(&config).is_ok());
    }
}
