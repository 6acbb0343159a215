use serde::{Deserialize, Serialize};

/// A `LIKE`-style substring pattern such as `%tempt%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordPattern(String);

impl KeywordPattern {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Pattern as written, passed verbatim to SQL `LIKE`.
    pub fn as_like(&self) -> &str {
        &self.0
    }

    /// Literal substring left once wildcard markers are stripped.
    pub fn needle(&self) -> &str {
        self.0.trim_matches('%')
    }

    /// ASCII case-insensitive containment, mirroring SQLite's default `LIKE`.
    pub fn matches(&self, text: &str) -> bool {
        let needle = self.needle();
        if needle.is_empty() {
            return true;
        }
        text.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
    }
}

impl From<&str> for KeywordPattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<KeywordPattern>,
    pub target: u32,
}

impl Category {
    pub fn new(name: &str, target: u32, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| KeywordPattern::from(*k)).collect(),
            target,
        }
    }

    /// Verses still needed once the base curriculum is accounted for.
    pub fn additional_needed(&self, base_per_category: u32) -> u32 {
        self.target.saturating_sub(base_per_category)
    }
}

/// A candidate verse as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub id: i64,
    pub book: String,
    pub chapter: i64,
    pub verse: i64,
    pub text: String,
}

impl Verse {
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A selected verse with its derived curriculum fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedVerse {
    /// 1-based position within its category.
    pub index: usize,
    pub verse: Verse,
    pub week: u32,
    pub difficulty: u8,
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub category: String,
    pub requested: u32,
    pub verses: Vec<AnnotatedVerse>,
}

impl CategoryOutcome {
    pub fn found(&self) -> usize {
        self.verses.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub outcomes: Vec<CategoryOutcome>,
    pub base_total: u32,
}

impl GenerationReport {
    pub fn total_generated(&self) -> usize {
        self.outcomes.iter().map(|o| o.found()).sum()
    }

    pub fn total_with_base(&self) -> usize {
        self.base_total as usize + self.total_generated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_strips_wildcards() {
        let p = KeywordPattern::from("%tempt%");
        assert_eq!(p.needle(), "tempt");
        assert_eq!(p.as_like(), "%tempt%");
        assert!(p.matches("Lead us not into TEMPTation"));
        assert!(!p.matches("Give us this day our daily bread"));
    }

    #[test]
    fn test_pattern_folds_ascii_case_only() {
        let p = KeywordPattern::from("%été%");
        assert!(p.matches("un été chaud"));
        assert!(!p.matches("UN ÉTÉ CHAUD"));
        assert!(KeywordPattern::from("%Spirit%").matches("the spirit is willing"));
    }

    #[test]
    fn test_additional_needed_saturates() {
        let c = Category::new("pride", 100, &["%pride%"]);
        assert_eq!(c.additional_needed(20), 80);
        assert_eq!(c.additional_needed(150), 0);
    }
}
