use clap::ValueEnum;
use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::application::data::ColorChoice;
use crate::ext::BestEffortPathExt;

const CONFIG_FILE_NAME: &str = "dirsim.yaml";

/// Settings read from the optional YAML config file. Every key may be left
/// out; command line flags take precedence over whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub health_check: Option<bool>,
    pub color: Option<ColorChoice>,
}

impl FileConfig {
    /// Reads `path` when given. Otherwise looks for `dirsim.yaml` in the
    /// current directory and falls back to defaults if there is none.
    pub async fn read(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path).await,
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_path(&default_path).await
                } else {
                    debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Ok(Self::default())
                }
            }
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_path_display(),
        })?;

        contents.as_str().try_into()
    }

    fn from_mapping(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, ConfigError> {
        let port = lookup(top_level, "port")
            .map(|value| {
                value
                    .as_integer()
                    .and_then(|port| u16::try_from(port).ok())
                    .context(InvalidValueSnafu {
                        key: "port",
                        expected: "an integer between 0 and 65535",
                    })
            })
            .transpose()?;

        let health_check = lookup(top_level, "health_check")
            .map(|value| {
                value.as_bool().context(InvalidValueSnafu {
                    key: "health_check",
                    expected: "a boolean",
                })
            })
            .transpose()?;

        let color = lookup(top_level, "color")
            .map(|value| {
                value
                    .as_str()
                    .and_then(|choice| ColorChoice::from_str(choice, true).ok())
                    .context(InvalidValueSnafu {
                        key: "color",
                        expected: "one of auto, always, never",
                    })
            })
            .transpose()?;

        Ok(FileConfig {
            port,
            health_check,
            color,
        })
    }
}

fn lookup<'a, 'input>(
    mapping: &'a LinkedHashMap<Yaml<'input>, Yaml<'input>>,
    key: &'static str,
) -> Option<&'a Yaml<'input>> {
    mapping.get(&Yaml::Value(Scalar::String(Cow::Borrowed(key))))
}

impl TryFrom<&str> for FileConfig {
    type Error = ConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            debug!("Config file is empty, using defaults");
            return Ok(Self::default());
        };

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        Self::from_mapping(top_level)
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The config file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Config key '{}' should be {}", key, expected))]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[compio::test]
    async fn config_returns_error_on_nonexistent_file() {
        let result = FileConfig::read(Some(Path::new("nonexistent.yaml"))).await;
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[compio::test]
    async fn config_reads_all_keys_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "port: 8080\nhealth_check: false\ncolor: never\n")
            .expect("Failed to write to temp file");

        let config = FileConfig::from_path(file.path()).await.unwrap();
        assert_eq!(
            config,
            FileConfig {
                port: Some(8080),
                health_check: Some(false),
                color: Some(ColorChoice::Never),
            }
        );
    }

    #[compio::test]
    async fn config_rejects_non_utf8_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&[0xff, 0xfe, 0x00])
            .expect("Failed to write to temp file");

        let result = FileConfig::from_path(file.path()).await;
        assert!(matches!(result, Err(ConfigError::EncodingError { .. })));
    }

    #[test]
    fn config_returns_error_on_invalid_yaml() {
        let result: Result<FileConfig, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn config_empty_file_uses_defaults() {
        let result: Result<FileConfig, _> = "".try_into();
        assert_eq!(result.unwrap(), FileConfig::default());
    }

    #[rstest]
    #[case("- item1\n- item2")]
    #[case("just a string")]
    fn config_returns_error_when_top_level_is_not_map(#[case] contents: &str) {
        let result: Result<FileConfig, _> = contents.try_into();
        assert!(matches!(result, Err(ConfigError::TopLevelNotMap)));
    }

    #[test]
    fn config_ignores_unknown_keys() {
        let result: Result<FileConfig, _> = "other_config: value\nport: 3001".try_into();
        assert_eq!(
            result.unwrap(),
            FileConfig {
                port: Some(3001),
                ..FileConfig::default()
            }
        );
    }

    #[rstest]
    #[case("port: 70000", "port")]
    #[case("port: -1", "port")]
    #[case("port: eighty", "port")]
    #[case("health_check: maybe", "health_check")]
    #[case("color: rainbow", "color")]
    fn config_rejects_wrongly_typed_values(#[case] contents: &str, #[case] expected_key: &str) {
        let result: Result<FileConfig, _> = contents.try_into();
        match result {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, expected_key),
            other => panic!("expected InvalidValue for {expected_key}, got {other:?}"),
        }
    }
}
