//! Configuration file loader with position-aware error reporting.
//!
//! Loads TOML configuration from an explicit path or the default XDG
//! location. A missing default file means `Config::default()`.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Stateless configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads from `path` when given, otherwise from the default location.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or
    /// `ConfigError::ReadError` for other I/O failures.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let config = Self::parse_toml(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            widgets = config.widgets.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from the default XDG location.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Parses a TOML string, reporting errors with one-based line and column.
    pub(crate) fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map(|span| line_column(content, span.start))
                .unwrap_or((0, 0));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// One-based line and column of byte `offset` in `content`.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
    (line, before.len() - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use crate::layout::OverlapPolicy;
    use serial_test::serial;
    use std::path::PathBuf;

    /// Runs `f` with `XDG_CONFIG_HOME` temporarily set, then restores it.
    fn with_xdg_config<F: FnOnce()>(value: &Path, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", value);
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    fn parse_valid_full_config() {
        let toml_str = r#"
[grid]
overlap_policy = "reject"
row_height = 24
margin = [8, 8]
container_padding = [4, 4]

[[grid.breakpoints]]
id = "lg"
threshold = 1024
columns = 12

[[grid.breakpoints]]
id = "xxs"
threshold = 0
columns = 4
scale = 0.5
sizes = { summary = { w = 4, h = 2 } }

[[widgets]]
id = "summary_calories"
title = "Calories"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "calories"
allow_metric_change = true

[log]
level = "debug"
file = "/var/log/gridboard.log"
"#;
        let path = PathBuf::from("test.toml");
        let config = ConfigLoader::parse_toml(toml_str, &path).expect("valid TOML should parse");
        assert_eq!(config.grid.overlap_policy, OverlapPolicy::Reject);
        assert_eq!(config.grid.breakpoints.len(), 2);
        assert_eq!(config.widgets.len(), 1);
        assert_eq!(config.log.level, LogLevel::Debug);
        config.layout_store().expect("config describes a valid store");
    }

    #[test]
    fn parse_empty_string_returns_defaults() {
        let path = PathBuf::from("empty.toml");
        let config = ConfigLoader::parse_toml("", &path).expect("empty string parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_invalid_toml_returns_parse_error_with_position() {
        let toml_str = "[grid]\nrow_height = \ninvalid";
        let path = PathBuf::from("bad.toml");
        let err = ConfigLoader::parse_toml(toml_str, &path).expect_err("should fail");
        match err {
            ConfigError::ParseError {
                path: p,
                line,
                column,
                message,
            } => {
                assert_eq!(p, path);
                assert!(line >= 2, "error is past the section header");
                assert!(column > 0);
                assert!(!message.is_empty());
            }
            other => panic!("expected ParseError, got: {other:?}"),
        }
    }

    #[test]
    fn parse_error_for_unknown_breakpoint_id() {
        let toml_str = "[[grid.breakpoints]]\nid = \"xl\"\nthreshold = 0\ncolumns = 4\n";
        let err = ConfigLoader::parse_toml(toml_str, Path::new("bp.toml")).expect_err("xl");
        assert!(matches!(err, ConfigError::ParseError { line: 2, .. }));
    }

    #[test]
    fn line_column_counts_from_one() {
        assert_eq!(line_column("abc", 0), (1, 1));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
        assert_eq!(line_column("ab", 10), (1, 3));
    }

    #[test]
    fn load_from_path_valid_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("config.toml");
        fs::write(&file, "[log]\nlevel = \"trace\"\n").expect("failed to write temp file");
        let config = ConfigLoader::load_from_path(&file).expect("should load");
        assert_eq!(config.log.level, LogLevel::Trace);
    }

    #[test]
    fn load_from_path_missing_file_returns_not_found() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load_from_path(&path).expect_err("should fail");
        match err {
            ConfigError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn load_from_path_directory_returns_read_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = ConfigLoader::load_from_path(dir.path()).expect_err("should fail");
        match err {
            ConfigError::ReadError { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected ReadError, got: {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn load_default_with_no_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(dir.path(), || {
            let config = ConfigLoader::load(None).expect("should return defaults");
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn load_default_with_existing_file_parses_it() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config_dir = dir.path().join("gridboard");
        fs::create_dir_all(&config_dir).expect("failed to create config dir");
        fs::write(config_dir.join("config.toml"), "[log]\nlevel = \"warn\"\n")
            .expect("failed to write config");
        with_xdg_config(dir.path(), || {
            let config = ConfigLoader::load_default().expect("should load");
            assert_eq!(config.log.level, LogLevel::Warn);
        });
    }
}
