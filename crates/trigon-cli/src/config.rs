//! Layout configuration loaded from TOML.
//!
//! Search order: explicit `--config` path, `./trigon.toml`, the platform
//! config directory, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;
use trigon_core::LayoutConfig;

pub const LOCAL_CONFIG: &str = "trigon.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML configuration {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("missing configuration file: {0:?}")]
    MissingFile(PathBuf),
}

pub fn load_config(explicit_path: Option<&Path>) -> Result<LayoutConfig, ConfigError> {
    if let Some(path) = explicit_path {
        info!("loading configuration from {}", path.display());
        return load_config_file(path);
    }

    let local = Path::new(LOCAL_CONFIG);
    if local.is_file() {
        info!("loading configuration from {}", local.display());
        return load_config_file(local);
    }

    if let Some(dirs) = ProjectDirs::from("", "", "trigon") {
        let system = dirs.config_dir().join("config.toml");
        if system.is_file() {
            info!("loading configuration from {}", system.display());
            return load_config_file(&system);
        }
        debug!("no configuration at {}", system.display());
    }

    debug!("no configuration file found, using defaults");
    Ok(LayoutConfig::default())
}

pub fn load_config_file(path: &Path) -> Result<LayoutConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<LayoutConfig, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = parse_config(
            r#"
arc_radius = 15.0

[viewport]
usable = 600.0
"#,
        )
        .unwrap();
        assert_eq!(15.0, cfg.arc_radius);
        assert_eq!(20.0, cfg.label_offset);
        assert_eq!(800.0, cfg.viewport.size);
        assert_eq!(600.0, cfg.viewport.usable);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(LayoutConfig::default(), parse_config("").unwrap());
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(parse_config("arc_radius = \"big\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here/trigon.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }
}
