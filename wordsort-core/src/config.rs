use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult, sorter::SortOrder};

/// Header printed above the sorted words.
pub const DEFAULT_HEADER: &str = "Words sorted by size:";

/// Settings for building a [`Report`](crate::report::Report).
///
/// Every field has a default, so an empty JSON object is a valid config
/// and reproduces the standard output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default)]
    pub order: SortOrder,
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: default_header(),
            order: SortOrder::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        let config: Config = from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.header, "Words sorted by size:");
        assert_eq!(config.order, SortOrder::Ascending);
    }

    #[test]
    fn test_config_serde() {
        let config = Config {
            header: "Longest first:".to_string(),
            order: SortOrder::Descending,
        };
        let json = serde_json::to_string(&config).unwrap();
        tracing::debug!("{}", json);
        assert!(json.contains("\"descending\""));
        let deserialized: Config = from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_invalid_order_is_config_error() {
        let result: InternalResult<Config> = from_str(r#"{"order": "sideways"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"header": "Sorted:"}}"#).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.header, "Sorted:");
        assert_eq!(config.order, SortOrder::Ascending);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Config::from_file("does/not/exist.json");
        match result {
            Err(Error::Config(message)) => assert!(message.contains("Failed to open")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }
}
