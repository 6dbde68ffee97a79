use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;

/// API credentials and default station, read once from `$HOME/.condrc`.
///
/// The file is a small JSON object:
///
/// ```json
/// { "key": "0123456789abcdef", "station": "KLNK" }
/// ```
///
/// Both capitalized and lower-case key names are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Weather Underground API key.
    #[serde(alias = "Key")]
    pub key: String,

    /// Default station used when `-s` is not given; may be empty.
    #[serde(default, alias = "Station")]
    pub station: String,
}

impl Config {
    /// Load the configuration from its fixed per-user path.
    pub fn load() -> Result<Self, Error> {
        Self::from_file(&Self::config_file_path()?)
    }

    /// Load the configuration from an explicit path.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::MissingConfig);
        }

        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, Error> {
        let dirs = BaseDirs::new().ok_or(Error::NoHomeDir)?;
        Ok(dirs.home_dir().join(".condrc"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn parses_key_and_station() {
        let file = write_config(r#"{ "key": "0123456789abcdef", "station": "KSFO" }"#);
        let cfg = Config::from_file(file.path()).expect("config must parse");

        assert_eq!(cfg.key, "0123456789abcdef");
        assert_eq!(cfg.station, "KSFO");
    }

    #[test]
    fn accepts_capitalized_field_names() {
        let file = write_config(r#"{ "Key": "0123456789abcdef", "Station": "KLNK" }"#);
        let cfg = Config::from_file(file.path()).expect("config must parse");

        assert_eq!(cfg.key, "0123456789abcdef");
        assert_eq!(cfg.station, "KLNK");
    }

    #[test]
    fn station_is_optional() {
        let file = write_config(r#"{ "key": "0123456789abcdef" }"#);
        let cfg = Config::from_file(file.path()).expect("config must parse");

        assert!(cfg.station.is_empty());
    }

    #[test]
    fn missing_file_yields_guidance() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Config::from_file(&dir.path().join(".condrc")).unwrap_err();

        assert!(err.to_string().contains(".condrc"));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let file = write_config("{ not json");
        let err = Config::from_file(file.path()).unwrap_err();

        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
