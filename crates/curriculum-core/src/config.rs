use crate::errors::ConfigError;
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod path_resolver;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Bound-variable ceiling of the bundled SQLite (`SQLITE_MAX_VARIABLE_NUMBER`).
pub const MAX_SQL_VARIABLES: u64 = 32_766;

pub const DEFAULT_DB_PATH: &str = "assets/databases/bible_bsb.db";
pub const DEFAULT_OUT_PATH: &str = "assets/databases/seed_curriculum_complete_500.sql";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub verses_table: String,
    pub books_table: String,
    /// Verses per category assumed seeded by the base curriculum.
    pub base_per_category: u32,
    pub verses_per_week: u32,
    /// Exclusive lower bound on verse text length.
    pub min_text_len: u32,
    /// Exclusive upper bound on verse text length.
    pub max_text_len: u32,
    pub title: String,
    pub base_seed_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verses_table: "BSB_verses".to_string(),
            books_table: "BSB_books".to_string(),
            base_per_category: 20,
            verses_per_week: 5,
            min_text_len: 30,
            max_text_len: 600,
            title: "FaithLock Complete Curriculum".to_string(),
            base_seed_file: "seed_curriculum.sql".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumConfig {
    #[serde(default, rename = "configVersion", alias = "version")]
    pub version: u32,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default = "crate::registry::default_categories")]
    pub categories: Vec<Category>,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            settings: Settings::default(),
            categories: crate::registry::default_categories(),
        }
    }
}

impl CurriculumConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 0 && self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError(format!(
                "unsupported config version {} (supported: 0, {})",
                self.version, SUPPORTED_CONFIG_VERSION
            )));
        }
        if self.categories.is_empty() {
            return Err(ConfigError("config has no categories".into()));
        }

        let s = &self.settings;
        for (field, value) in [
            ("verses_table", &s.verses_table),
            ("books_table", &s.books_table),
        ] {
            if !is_identifier(value) {
                return Err(ConfigError(format!(
                    "settings.{field} must be a plain SQL identifier, got {value:?}"
                )));
            }
        }
        if s.verses_per_week == 0 {
            return Err(ConfigError("settings.verses_per_week must be > 0".into()));
        }
        if s.min_text_len >= s.max_text_len {
            return Err(ConfigError(format!(
                "settings.min_text_len ({}) must be below max_text_len ({})",
                s.min_text_len, s.max_text_len
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for c in &self.categories {
            if c.name.trim().is_empty() {
                return Err(ConfigError("category with empty name".into()));
            }
            if !seen.insert(c.name.as_str()) {
                return Err(ConfigError(format!("duplicate category {:?}", c.name)));
            }
        }

        let total_target: u64 = self.categories.iter().map(|c| c.target as u64).sum();
        let base_total = s.base_per_category as u64 * self.categories.len() as u64;
        if total_target > u32::MAX as u64 || base_total > u32::MAX as u64 {
            return Err(ConfigError(format!(
                "category targets ({total_target}) or base total ({base_total}) exceed {}",
                u32::MAX
            )));
        }

        // Each lookup binds its keywords, both length bounds, the limit and
        // every verse id taken earlier in the run.
        let taken: u64 = self
            .categories
            .iter()
            .map(|c| c.additional_needed(s.base_per_category) as u64)
            .sum();
        let max_keywords = self
            .categories
            .iter()
            .map(|c| c.keywords.len() as u64)
            .max()
            .unwrap_or(0);
        if taken + max_keywords + 3 > MAX_SQL_VARIABLES {
            return Err(ConfigError(format!(
                "run would bind {} SQL variables (limit {}); lower the category targets",
                taken + max_keywords + 3,
                MAX_SQL_VARIABLES
            )));
        }
        Ok(())
    }

    /// Verses the base curriculum is assumed to hold across all categories.
    pub fn base_total(&self) -> u32 {
        self.settings
            .base_per_category
            .saturating_mul(self.categories.len() as u32)
    }

    pub fn total_target(&self) -> u32 {
        self.categories
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.target))
    }

    pub fn total_additional(&self) -> u32 {
        self.categories.iter().fold(0u32, |acc, c| {
            acc.saturating_add(c.additional_needed(self.settings.base_per_category))
        })
    }
}

pub fn load_config(path: &Path, strict: bool) -> Result<CurriculumConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let mut ignored_keys = std::collections::BTreeSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);
    let cfg: CurriculumConfig = serde_ignored::deserialize(deserializer, |p| {
        ignored_keys.insert(p.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if !ignored_keys.is_empty() {
        if strict {
            return Err(ConfigError(format!(
                "Unknown fields detected in strict mode: {:?} (file: {})",
                ignored_keys,
                path.display()
            )));
        }
        tracing::warn!(
            event = "config_unknown_fields",
            fields = ?ignored_keys,
            file = %path.display()
        );
    }

    cfg.validate()?;
    Ok(cfg)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
