// config lets you read a separate config file, overridden by the environment
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_STRING_CAPACITY: usize = 50_000;
pub const DEFAULT_INDEX_CAPACITY: usize = 1_000;
pub const ENVIRONMENT_PREFIX: &str = "PANTERM";

/// Sizing of the term caches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub string_capacity: usize,
    pub index_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            string_capacity: DEFAULT_STRING_CAPACITY,
            index_capacity: DEFAULT_INDEX_CAPACITY,
        }
    }
}

impl Settings {
    /// Reads settings from an optional file (any format `config` recognizes by
    /// extension) and then from `PANTERM_*` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("string_capacity", DEFAULT_STRING_CAPACITY as i64)?
            .set_default("index_capacity", DEFAULT_INDEX_CAPACITY as i64)?;
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(Environment::with_prefix(ENVIRONMENT_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load(Some("definitely/not/here/panterm")).unwrap();
        assert_eq!(settings.string_capacity, DEFAULT_STRING_CAPACITY);
        assert_eq!(settings.index_capacity, DEFAULT_INDEX_CAPACITY);
    }

    #[test]
    fn file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("panterm_settings_{}.toml", std::process::id()));
        std::fs::write(&path, "string_capacity = 16\n").unwrap();
        let settings = Settings::load(path.to_str()).unwrap();
        assert_eq!(settings.string_capacity, 16);
        assert_eq!(settings.index_capacity, DEFAULT_INDEX_CAPACITY);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("panterm_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "string_capacity = \"lots\"\n").unwrap();
        let err = Settings::load(path.to_str()).unwrap_err();
        assert_eq!(err.kind(), "Config");
        let _ = std::fs::remove_file(&path);
    }
}
