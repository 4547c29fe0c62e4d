// src/config/loader.rs
//! Layered configuration loader: defaults, then files, then environment

use crate::config::{constants::paths, GaitConfig};
use crate::error::{GaitError, GaitResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
///
/// Sources are applied in order, later ones overriding earlier ones:
/// built-in defaults, each configuration file, then `GAIT_`-prefixed
/// environment variables using `__` for nesting
/// (`GAIT_SEGMENTATION__MOVEMENT_THRESHOLD=0.05`).
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    paths_required: bool,
    use_environment: bool,
    current_config: GaitConfig,
}

impl ConfigLoader {
    /// Create loader over the standard, optional config locations
    pub fn new() -> Self {
        Self {
            config_paths: Self::discover_config_paths(),
            paths_required: false,
            use_environment: true,
            current_config: GaitConfig::default(),
        }
    }

    /// Create loader with explicit paths; each must exist
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            paths_required: true,
            use_environment: true,
            current_config: GaitConfig::default(),
        }
    }

    /// Ignore environment overrides
    pub fn without_environment(mut self) -> Self {
        self.use_environment = false;
        self
    }

    /// Load and validate the layered configuration
    pub fn load(&mut self) -> GaitResult<GaitConfig> {
        let config = self.load_and_merge_configs()?;
        self.current_config = config.clone();
        Ok(config)
    }

    /// Most recently loaded configuration (defaults before the first load)
    pub fn current_config(&self) -> &GaitConfig {
        &self.current_config
    }

    /// Paths consulted, in precedence order
    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Validate a single configuration file without loading it
    pub fn validate_config_file<P: AsRef<Path>>(&self, path: P) -> GaitResult<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GaitError::io(path, e))?;
        let config: GaitConfig = toml::from_str(&content).map_err(|e| GaitError::Parse {
            what: path.display().to_string(),
            line: None,
            reason: e.to_string(),
        })?;

        config.segmentation.validate()
    }

    /// Export current configuration to file
    pub fn export_config<P: AsRef<Path>>(&self, path: P) -> GaitResult<()> {
        let path = path.as_ref();
        let toml_content = toml::to_string_pretty(&self.current_config).map_err(|e| {
            GaitError::Config {
                reason: e.to_string(),
            }
        })?;

        std::fs::write(path, toml_content).map_err(|e| GaitError::io(path, e))
    }

    fn load_and_merge_configs(&self) -> GaitResult<GaitConfig> {
        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&GaitConfig::default())?);

        for config_path in &self.config_paths {
            debug!(path = %config_path.display(), required = self.paths_required, "adding config source");
            builder = builder.add_source(
                ::config::File::from(config_path.as_path()).required(self.paths_required),
            );
        }

        if self.use_environment {
            builder = builder.add_source(
                ::config::Environment::with_prefix(paths::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(paths::ENV_SEPARATOR)
                    .try_parsing(true),
            );
        }

        let config: GaitConfig = builder.build()?.try_deserialize()?;
        config.segmentation.validate()?;

        Ok(config)
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(paths::SYSTEM_CONFIG_PATH)];

        if let Some(home_dir) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            paths.push(PathBuf::from(home_dir).join(paths::USER_CONFIG_DIR).join("config.toml"));
        }

        paths.push(PathBuf::from(paths::DEFAULT_CONFIG_FILE));
        paths.push(PathBuf::from(paths::LOCAL_CONFIG_FILE));

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_config_loader_creation() {
        let loader = ConfigLoader::new();
        assert!(!loader.config_paths().is_empty());
        assert_eq!(loader.current_config(), &GaitConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_file_overrides_defaults() {
        let file = toml_file(
            r#"
[segmentation]
sample_rate = 100
variance_threshold = 1.5

[session]
max_points = 500
"#,
        );

        let mut loader = ConfigLoader::with_paths(vec![file.path().to_path_buf()]).without_environment();
        let config = loader.load().unwrap();

        assert_eq!(config.segmentation.sample_rate, 100);
        assert_eq!(config.segmentation.variance_threshold, 1.5);
        assert_eq!(config.segmentation.movement_threshold, 0.02);
        assert_eq!(config.session.max_points, 500);
        assert_eq!(loader.current_config(), &config);
    }

    #[test]
    #[serial]
    fn test_missing_required_file_fails() {
        let mut loader =
            ConfigLoader::with_paths(vec![PathBuf::from("/nonexistent/gait.toml")]).without_environment();
        assert!(loader.load().is_err());
    }

    #[test]
    #[serial]
    fn test_zero_sample_rate_in_file_fails() {
        let file = toml_file("[segmentation]\nsample_rate = 0\n");
        let mut loader = ConfigLoader::with_paths(vec![file.path().to_path_buf()]).without_environment();
        assert!(loader.load().is_err());
    }

    #[test]
    fn test_config_file_validation() {
        let loader = ConfigLoader::new();

        let valid = toml_file("[segmentation]\nsample_rate = 194\n");
        assert!(loader.validate_config_file(valid.path()).is_ok());

        let invalid = toml_file("[segmentation]\nsample_rate = 0\n");
        assert!(loader.validate_config_file(invalid.path()).is_err());

        let garbled = toml_file("[segmentation\nsample_rate = ");
        assert!(matches!(
            loader.validate_config_file(garbled.path()),
            Err(GaitError::Parse { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        std::env::set_var("GAIT_SEGMENTATION__MOVEMENT_THRESHOLD", "0.05");
        std::env::set_var("GAIT_SEGMENTATION__SAMPLE_RATE", "200");

        let file = toml_file("[segmentation]\nmovement_threshold = 0.03\n");
        let mut loader = ConfigLoader::with_paths(vec![file.path().to_path_buf()]);
        let result = loader.load();

        std::env::remove_var("GAIT_SEGMENTATION__MOVEMENT_THRESHOLD");
        std::env::remove_var("GAIT_SEGMENTATION__SAMPLE_RATE");

        let config = result.unwrap();
        assert_eq!(config.segmentation.movement_threshold, 0.05);
        assert_eq!(config.segmentation.sample_rate, 200);
    }

    #[test]
    #[serial]
    fn test_config_export() {
        let file = toml_file("[segmentation]\nfrequency_threshold = 0.5\n");
        let mut loader = ConfigLoader::with_paths(vec![file.path().to_path_buf()]).without_environment();
        loader.load().unwrap();

        let out = NamedTempFile::new().unwrap();
        assert!(loader.export_config(out.path()).is_ok());

        let content = std::fs::read_to_string(out.path()).unwrap();
        assert!(content.contains("[segmentation]"));
        assert!(content.contains("frequency_threshold = 0.5"));
    }
}
