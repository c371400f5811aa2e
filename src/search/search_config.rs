//! Settings for a planner run, read from a TOML file. Every field is optional;
//! command line flags take precedence over the file.
//!
//! ```toml
//! engines = ["astar", "ucs"]
//! heuristic = "manhattan"
//! max-expansions = 10000
//! time-limit = "30s"
//! memory-limit-mb = 512
//! verbosity = "verbose"
//! ```

use crate::search::{
    search_engines::{SearchEngineName, TerminationCondition},
    HeuristicName, Verbosity,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub engines: Vec<SearchEngineName>,
    pub heuristic: HeuristicName,
    pub max_expansions: Option<i64>,
    #[serde(deserialize_with = "deserialize_duration", serialize_with = "serialize_duration")]
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
    pub verbosity: Verbosity,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engines: SearchEngineName::ALL.to_vec(),
            heuristic: HeuristicName::Manhattan,
            max_expansions: None,
            time_limit: None,
            memory_limit_mb: None,
            verbosity: Verbosity::Normal,
        }
    }
}

impl SearchConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// A fresh termination condition for one search run.
    pub fn termination_condition(&self) -> TerminationCondition {
        TerminationCondition::new(self.time_limit, self.memory_limit_mb, self.max_expansions)
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    text.map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

fn serialize_duration<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match duration {
        Some(duration) => {
            serializer.serialize_some(&humantime::format_duration(*duration).to_string())
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SearchConfig::from_toml("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.engines.len(), 4);
    }

    #[test]
    fn parse_full_config() {
        let config = SearchConfig::from_toml(
            r#"
            engines = ["astar", "bfs"]
            heuristic = "zero"
            max-expansions = 100
            time-limit = "1m 30s"
            memory-limit-mb = 256
            verbosity = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.engines,
            vec![SearchEngineName::Astar, SearchEngineName::Bfs]
        );
        assert_eq!(config.heuristic, HeuristicName::ZeroHeuristic);
        assert_eq!(config.max_expansions, Some(100));
        assert_eq!(config.time_limit, Some(Duration::from_secs(90)));
        assert_eq!(config.memory_limit_mb, Some(256));
        assert_eq!(config.verbosity, Verbosity::Debug);
    }

    #[test]
    fn reject_bad_values() {
        assert!(SearchConfig::from_toml("time-limit = \"soon\"").is_err());
        assert!(SearchConfig::from_toml("engines = [\"greedy\"]").is_err());
        assert!(SearchConfig::from_toml("max-depth = 3").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "engines = [\"ucs\"]\nmax-expansions = 5").unwrap();
        let config = SearchConfig::load(file.path()).unwrap();
        assert_eq!(config.engines, vec![SearchEngineName::Ucs]);
        assert_eq!(config.max_expansions, Some(5));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = SearchConfig::load(Path::new("/nonexistent/taxi-search.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn serialises_back_to_toml() {
        let config = SearchConfig {
            time_limit: Some(Duration::from_secs(30)),
            ..SearchConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SearchConfig::from_toml(&text).unwrap(), config);
    }
}
