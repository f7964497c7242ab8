//! Configuration for the analysis pipeline

use clausewise_domain::{default_categories, ClauseCategory, DEFAULT_RISK_KEYWORDS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How clause candidates are cut out of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Split into sentences and keep those that hit a category keyword
    #[default]
    KeywordCategory,
    /// Cut at explicit `Clause N` markers
    MarkerSegmentation,
}

/// How long text is fed to the summarization model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Every fixed-size chunk is summarized and the results joined
    #[default]
    Chunked,
    /// Only the first chunk is summarized
    Truncate,
}

/// A clause category as written in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category name
    pub name: String,

    /// Trigger keywords
    pub keywords: Vec<String>,
}

impl From<&CategoryConfig> for ClauseCategory {
    fn from(config: &CategoryConfig) -> Self {
        ClauseCategory::new(config.name.clone(), config.keywords.iter().cloned())
    }
}

impl From<ClauseCategory> for CategoryConfig {
    fn from(category: ClauseCategory) -> Self {
        Self {
            name: category.name,
            keywords: category.keywords,
        }
    }
}

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Clause extraction strategy
    pub extraction_mode: ExtractionMode,

    /// Summarization strategy
    pub summary_mode: SummaryMode,

    /// Characters per summarization chunk
    pub chunk_size: usize,

    /// Maximum summary length per chunk (model tokens)
    pub summary_max_length: usize,

    /// Minimum summary length per chunk (model tokens)
    pub summary_min_length: usize,

    /// Output token limit for clause rewriting
    pub rewrite_max_tokens: u32,

    /// Sampling temperature for clause rewriting
    pub rewrite_temperature: f32,

    /// Upload size cap in bytes (0 disables the check)
    pub max_file_size_bytes: usize,

    /// Upper bound for each external call (seconds)
    pub service_timeout_secs: u64,

    /// Keywords that mark a clause as risky
    pub risk_keywords: Vec<String>,

    /// Clause categories for keyword-category extraction
    pub categories: Vec<CategoryConfig>,
}

impl AnalyzerConfig {
    /// Get the external call timeout as a Duration
    pub fn service_timeout(&self) -> Duration {
        Duration::from_secs(self.service_timeout_secs)
    }

    /// Categories as domain values
    pub fn clause_categories(&self) -> Vec<ClauseCategory> {
        self.categories.iter().map(ClauseCategory::from).collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.summary_max_length == 0 {
            return Err("summary_max_length must be greater than 0".to_string());
        }
        if self.summary_min_length > self.summary_max_length {
            return Err("summary_min_length cannot exceed summary_max_length".to_string());
        }
        if self.rewrite_max_tokens == 0 {
            return Err("rewrite_max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.rewrite_temperature) {
            return Err("rewrite_temperature must be between 0.0 and 2.0".to_string());
        }
        if self.service_timeout_secs == 0 {
            return Err("service_timeout_secs must be greater than 0".to_string());
        }
        if self.risk_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("risk_keywords must not contain blank entries".to_string());
        }
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err("category names must not be blank".to_string());
            }
            if category.keywords.is_empty() || category.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!(
                    "category '{}' needs at least one non-blank keyword",
                    category.name
                ));
            }
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    /// Default configuration matching the long-standing behavior
    fn default() -> Self {
        Self {
            extraction_mode: ExtractionMode::KeywordCategory,
            summary_mode: SummaryMode::Chunked,
            chunk_size: 1000,
            summary_max_length: 130,
            summary_min_length: 30,
            rewrite_max_tokens: 200,
            rewrite_temperature: 0.7,
            max_file_size_bytes: 5 * 1024 * 1024,
            service_timeout_secs: 60,
            risk_keywords: DEFAULT_RISK_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            categories: default_categories().into_iter().map(CategoryConfig::from).collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Quick preset: summarize only the opening of the document
    pub fn quick() -> Self {
        Self {
            summary_mode: SummaryMode::Truncate,
            service_timeout_secs: 30,
            ..Self::default()
        }
    }

    /// Thorough preset: longer summaries and a more generous timeout
    pub fn thorough() -> Self {
        Self {
            summary_max_length: 200,
            summary_min_length: 50,
            service_timeout_secs: 180,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
