use crate::config::Settings;
use crate::model::{Category, KeywordPattern, Verse};
use crate::storage::VerseSource;
use std::collections::BTreeSet;

/// Parameters for one candidate lookup against a [`VerseSource`].
#[derive(Debug, Clone)]
pub struct SelectionRequest<'a> {
    pub keywords: &'a [KeywordPattern],
    pub limit: u32,
    pub min_len: u32,
    pub max_len: u32,
    /// Verse ids already taken earlier in this run.
    pub exclude: &'a BTreeSet<i64>,
}

impl SelectionRequest<'_> {
    pub fn is_empty(&self) -> bool {
        self.limit == 0 || self.keywords.is_empty()
    }
}

/// Picks up to `limit` unassigned verses for `category`, skipping `exclude`.
/// A short list is not an error.
pub fn select_verses(
    source: &dyn VerseSource,
    category: &Category,
    limit: u32,
    settings: &Settings,
    exclude: &BTreeSet<i64>,
) -> anyhow::Result<Vec<Verse>> {
    let req = SelectionRequest {
        keywords: &category.keywords,
        limit,
        min_len: settings.min_text_len,
        max_len: settings.max_text_len,
        exclude,
    };
    if req.is_empty() {
        return Ok(Vec::new());
    }

    let found = source.find_unassigned(&req)?;

    let mut seen = BTreeSet::new();
    let verses: Vec<Verse> = found
        .into_iter()
        .filter(|v| !exclude.contains(&v.id) && seen.insert(v.id))
        .take(limit as usize)
        .collect();

    tracing::debug!(
        event = "verses_selected",
        category = %category.name,
        requested = limit,
        found = verses.len()
    );
    Ok(verses)
}
