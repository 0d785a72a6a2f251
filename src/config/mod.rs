//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Icons appended to the title of the active column
///
/// Values are inserted into markup as-is, so HTML entities work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortIcons {
    /// Shown when the column is sorted ascending
    pub asc: String,

    /// Shown when the column is sorted descending
    pub desc: String,

    /// Shown when the column is active but carries no direction
    pub unset: String,
}

impl Default for SortIcons {
    fn default() -> Self {
        Self {
            asc: "&uarr;".to_string(),
            desc: "&darr;".to_string(),
            unset: String::new(),
        }
    }
}

/// Configuration for rendering sortable columns
///
/// # Example
/// ```yaml
/// css_class: sort-column
/// icons:
///   asc: " &#9650;"
///   desc: " &#9660;"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    /// Direction icons
    pub icons: SortIcons,

    /// CSS class carried by every sort anchor
    pub css_class: String,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            icons: SortIcons::default(),
            css_class: "sort-column".to_string(),
        }
    }
}

impl SortingConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
