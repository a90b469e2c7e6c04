use std::fmt;

use config::{builder::DefaultState, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Directory holding one review file per document.
    pub dir: String,
    /// Character position in the filename that carries the class marker.
    pub label_offset: usize,
    /// Marker value meaning "negative review"; anything else is positive.
    pub negative_marker: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub dir: String,
    pub positive_name: String,
    pub negative_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read configuration from `path`. A missing file is not an error;
    /// every value has a built-in default.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let mut builder: ConfigBuilder<DefaultState> = ConfigBuilder::default();

        builder = builder
            .set_default("corpus.dir", "movies_reviews")?
            .set_default("corpus.label_offset", 7_i64)?
            .set_default("corpus.negative_marker", "1")?
            .set_default("store.dir", "models")?
            .set_default("store.positive_name", "Positive_Dict")?
            .set_default("store.negative_name", "Negative_Dict")?
            .set_default("logging.level", "info")?
            .add_source(File::with_name(path).required(false));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("config")
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "corpus={} store={} ({}/{})",
            self.corpus.dir, self.store.dir, self.store.positive_name, self.store.negative_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let cfg = Config::from_file("/no/such/config").unwrap();

        assert_eq!(cfg.corpus.dir, "movies_reviews");
        assert_eq!(cfg.corpus.label_offset, 7);
        assert_eq!(cfg.corpus.negative_marker, "1");
        assert_eq!(cfg.store.positive_name, "Positive_Dict");
        assert_eq!(cfg.store.negative_name, "Negative_Dict");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn file_values_override_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[corpus]\ndir = \"reviews\"\n\n[store]\ndir = \"cache\"\n",
        )
        .unwrap();

        let cfg = Config::from_file(path.to_str().unwrap()).unwrap();

        assert_eq!(cfg.corpus.dir, "reviews");
        assert_eq!(cfg.store.dir, "cache");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.corpus.label_offset, 7);
        assert_eq!(cfg.store.positive_name, "Positive_Dict");
    }
}
