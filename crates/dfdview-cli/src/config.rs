//! Locating and reading the dfdview configuration file.
//!
//! The first file found wins:
//!
//! 1. the `--config` path, which must exist;
//! 2. `dfdview/config.toml` under the working directory;
//! 3. `config.toml` in the platform config directory, for example
//!    `~/.config/dfdview/` on Linux.
//!
//! Without a file the built-in style and export settings apply. A file is
//! checked when it is read, so a bad background color or pixel ratio is
//! reported against the file it came from.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use dfdview::{DfdViewError, config::AppConfig};

const LOCAL_CONFIG: &str = "dfdview/config.toml";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Ways a configuration file can be unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read config file {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl From<ConfigError> for DfdViewError {
    fn from(err: ConfigError) -> Self {
        DfdViewError::Config(err.to_string())
    }
}

/// Where the configuration of a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Platform(PathBuf),
    Builtin,
}

impl ConfigSource {
    fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::Platform(path) => Some(path),
            Self::Builtin => None,
        }
    }
}

/// Loads the configuration for a run.
///
/// # Errors
///
/// Returns [`DfdViewError::Config`] when the `--config` file is missing, or
/// when the file in use cannot be read, is not valid TOML, or holds values
/// dfdview cannot use.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DfdViewError> {
    let source = locate(explicit_path.as_ref().map(AsRef::as_ref))?;

    let Some(path) = source.path() else {
        debug!("No configuration file found, using built-in settings");
        return Ok(AppConfig::default());
    };

    let config = read_config(path)?;
    info!(source:?; "Configuration loaded");
    Ok(config)
}

fn locate(explicit: Option<&Path>) -> Result<ConfigSource, ConfigError> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(ConfigSource::Explicit(path.to_path_buf()))
        } else {
            Err(ConfigError::NotFound(path.to_path_buf()))
        };
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Ok(ConfigSource::Local(local));
    }

    match ProjectDirs::from("com", "dfdview", "dfdview") {
        Some(dirs) => {
            let platform = dirs.config_dir().join(CONFIG_FILE_NAME);
            if platform.is_file() {
                return Ok(ConfigSource::Platform(platform));
            }
            debug!(path = platform.display().to_string(); "No platform configuration file");
        }
        None => debug!("No platform config directory on this system"),
    }

    Ok(ConfigSource::Builtin)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|err| invalid(err.to_string().trim_end().to_string()))?;

    config.export().validate().map_err(invalid)?;
    config.style().background_color().map_err(invalid)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("dfdview.toml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing.toml");

        let err = load_config(Some(&missing)).unwrap_err();
        let DfdViewError::Config(msg) = &err else {
            panic!("Expected a config error, got {err:?}");
        };
        assert!(msg.contains("missing.toml"));
        assert!(msg.contains("does not exist"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let (_temp, path) = write_config("[export]\npixel_ratio = 1.5\n");

        assert_eq!(
            locate(Some(path.as_path())).unwrap(),
            ConfigSource::Explicit(path.clone())
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.export().pixel_ratio(), 1.5);
    }

    #[test]
    fn test_malformed_toml_names_the_file() {
        let (_temp, path) = write_config("[export\npixel_ratio = ");

        let err = load_config(Some(&path)).unwrap_err().to_string();
        assert!(err.contains("invalid config file"));
        assert!(err.contains("dfdview.toml"));
    }

    #[test]
    fn test_out_of_range_values_are_rejected_on_load() {
        let (_temp, path) = write_config("[export]\npixel_ratio = 0.0\n");

        let err = load_config(Some(&path)).unwrap_err().to_string();
        assert!(err.contains("pixel_ratio"));
        assert!(err.contains("dfdview.toml"));
    }

    #[test]
    fn test_bad_background_is_rejected_on_load() {
        let (_temp, path) = write_config("[style]\nbackground_color = \"not-a-color\"\n");

        let err = load_config(Some(&path)).unwrap_err().to_string();
        assert!(err.contains("background color"));
    }
}
