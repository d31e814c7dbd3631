use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_min_clause_chars() -> usize {
    40
}

fn default_party_suffixes() -> Vec<String> {
    vec![
        "Services".to_string(),
        "Solutions".to_string(),
        "Ltd".to_string(),
        "Private".to_string(),
    ]
}

fn default_jurisdiction_keyword() -> String {
    "india".to_string()
}

fn default_jurisdiction_label() -> String {
    "India".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// How the document text is split into clauses
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    /// Named-entity extraction rules
    #[serde(default)]
    pub entities: EntityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentationConfig {
    /// A trimmed line becomes a clause only when it is strictly longer than this (in characters)
    #[serde(default = "default_min_clause_chars")]
    pub min_clause_chars: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_clause_chars: default_min_clause_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityConfig {
    /// Words that mark a capitalised name as an organisation, e.g. "Acme Services"
    #[serde(default = "default_party_suffixes")]
    pub party_suffixes: Vec<String>,
    #[serde(default)]
    pub jurisdiction: JurisdictionConfig,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            party_suffixes: default_party_suffixes(),
            jurisdiction: JurisdictionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JurisdictionConfig {
    /// Lower-case keyword searched for in the lower-cased document
    #[serde(default = "default_jurisdiction_keyword")]
    pub keyword: String,
    /// Value reported when the keyword is present
    #[serde(default = "default_jurisdiction_label")]
    pub label: String,
}

impl Default for JurisdictionConfig {
    fn default() -> Self {
        Self {
            keyword: default_jurisdiction_keyword(),
            label: default_jurisdiction_label(),
        }
    }
}

impl AnalysisConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file {path}"))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!("failed to load config from {p}: {e:#}");
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
