use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Rendering configuration. Every section is optional in the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub links: LinkTargets,
    pub employment: EmploymentConfig,
    pub tables: TableConfig,
    pub limits: Limits,
}

/// Fixed navigation targets for tags that don't carry their own URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTargets {
    /// Used by `DOCTOR` and `DOCTORSLIST` tags.
    pub doctor_directory: String,
    /// `DOCTORPROFILE` targets are `<base>/<specialty>/<slug>`.
    pub doctor_profile_base: String,
    /// `LOCATION` tags always point here, whatever their label says.
    pub map_search: String,
}

impl Default for LinkTargets {
    fn default() -> Self {
        Self {
            doctor_directory: "https://www.kghospital.com/doctors-list".to_string(),
            doctor_profile_base: "https://www.kghospital.com/doctors".to_string(),
            map_search: "https://www.google.com/maps/search/?api=1&query=KG+Hospital+Coimbatore"
                .to_string(),
        }
    }
}

/// Visual category of an employment tag on a numbered list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentCategory {
    FullTime,
    PartTime,
    Other,
}

impl EmploymentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentCategory::FullTime => "full-time",
            EmploymentCategory::PartTime => "part-time",
            EmploymentCategory::Other => "other",
        }
    }
}

impl fmt::Display for EmploymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a literal substring of an employment token to its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    /// Compared against the lowercased token, so write it in lower case.
    pub substring: String,
    pub category: EmploymentCategory,
}

impl CategoryLabel {
    pub fn new(substring: impl Into<String>, category: EmploymentCategory) -> Self {
        Self {
            substring: substring.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentConfig {
    /// Case-insensitive regexes; a token matching any of them is an employment tag.
    pub patterns: Vec<String>,
    /// Checked in order once a token is known to be an employment tag. The
    /// first label contained in the lowercased token decides the category;
    /// tokens matching none of them are `Other`.
    pub categories: Vec<CategoryLabel>,
    pub no_category_pattern: String,
}

impl Default for EmploymentConfig {
    fn default() -> Self {
        Self {
            patterns: [r"full\s*time", r"part\s*time", "visiting", "locum", "consultant"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            categories: vec![
                CategoryLabel::new("full time", EmploymentCategory::FullTime),
                CategoryLabel::new("part time", EmploymentCategory::PartTime),
            ],
            no_category_pattern: r"no\s*category\s*mentioned".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column count assumed when a table's first line has no usable cells.
    pub default_column_count: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_column_count: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Deepest section nesting at which table detection still runs.
    ///
    /// Section text never holds table lines, so rendering stops at depth 1
    /// whatever this is set to. The limit bounds the recursion and marks the
    /// point where the renderer logs that it stopped looking for tables.
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nesting_depth: 8,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/chatmark/config.toml"));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
[links]
map_search = "https://maps.example.org/?q=clinic"

[limits]
max_nesting_depth = 2
"#,
        )
        .unwrap();

        assert_eq!(config.links.map_search, "https://maps.example.org/?q=clinic");
        assert_eq!(
            config.links.doctor_directory,
            LinkTargets::default().doctor_directory
        );
        assert_eq!(config.limits.max_nesting_depth, 2);
        assert_eq!(config.tables.default_column_count, 4);
        assert_eq!(config.employment, EmploymentConfig::default());
    }

    #[test]
    fn test_employment_vocabulary_from_toml() {
        let config = Config::from_toml_str(
            r#"
[employment]
patterns = ["honorary", "full\\s*time"]
categories = [{ substring = "honorary", category = "part-time" }]
"#,
        )
        .unwrap();

        assert_eq!(config.employment.patterns, vec!["honorary", r"full\s*time"]);
        assert_eq!(
            config.employment.categories,
            vec![CategoryLabel::new("honorary", EmploymentCategory::PartTime)]
        );
        assert_eq!(
            config.employment.no_category_pattern,
            EmploymentConfig::default().no_category_pattern
        );
    }

    #[test]
    fn test_default_categories_are_literal_labels() {
        let categories = EmploymentConfig::default().categories;
        assert_eq!(
            categories,
            vec![
                CategoryLabel::new("full time", EmploymentCategory::FullTime),
                CategoryLabel::new("part time", EmploymentCategory::PartTime),
            ]
        );
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Config::from_toml_str(
            r#"
[employment]
categories = [{ substring = "x", category = "sometimes" }]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[tables]\ndefault_column_count = \"four\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut test_config = Config::default();
        test_config.tables.default_column_count = 3;
        test_config
            .employment
            .categories
            .push(CategoryLabel::new("locum", EmploymentCategory::Other));

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
