use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub survey: SurveyConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SurveyConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// One word per line. Falls back to the built-in list when unset.
    #[serde(default)]
    pub word_file: Option<PathBuf>,
}

fn default_title() -> String {
    "词汇情感判断调查".to_string()
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            word_file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_file_name() -> String {
    "survey_results.csv".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

impl OutputConfig {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    /// Used when RUST_LOG is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("valence-survey.log")
}

fn default_log_filter() -> String {
    "valence_survey=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// A missing file means defaults; a malformed one is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.survey.title, "词汇情感判断调查");
        assert!(config.survey.word_file.is_none());
        assert_eq!(
            config.output.path(),
            Path::new("results").join("survey_results.csv")
        );
        assert_eq!(config.logging.filter, "valence_survey=info");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = Config::parse(
            r#"
            [survey]
            word_file = "words.txt"

            [output]
            dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(config.survey.word_file, Some(PathBuf::from("words.txt")));
        assert_eq!(config.survey.title, "词汇情感判断调查");
        assert_eq!(config.output.path(), Path::new("out").join("survey_results.csv"));
    }

    #[test]
    fn test_malformed_config_errors() {
        assert!(Config::parse("[output\ndir = 3").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.output.file_name, "survey_results.csv");
    }

    #[test]
    fn test_config_parses() {
        let config = Config::load(Path::new("config.toml")).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("results"));
        assert_eq!(config.output.file_name, "survey_results.csv");
    }
}
