use super::VerseSource;
use crate::model::Verse;
use crate::selector::SelectionRequest;

/// In-process verse source with the same filtering rules as [`super::VerseStore`].
/// Candidates come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<(Verse, Option<String>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, verse: Verse, category: Option<&str>) {
        self.rows.push((verse, category.map(str::to_string)));
    }
}

impl VerseSource for MemorySource {
    fn find_unassigned(&self, req: &SelectionRequest<'_>) -> anyhow::Result<Vec<Verse>> {
        if req.is_empty() {
            return Ok(Vec::new());
        }
        let out = self
            .rows
            .iter()
            .filter(|(_, category)| category.is_none())
            .map(|(v, _)| v)
            .filter(|v| !req.exclude.contains(&v.id))
            .filter(|v| {
                let len = v.text.chars().count();
                len > req.min_len as usize && len < req.max_len as usize
            })
            .filter(|v| req.keywords.iter().any(|k| k.matches(&v.text)))
            .take(req.limit as usize)
            .cloned()
            .collect();
        Ok(out)
    }

    fn count_assigned(&self, category: &str) -> anyhow::Result<u64> {
        Ok(self
            .rows
            .iter()
            .filter(|(_, c)| c.as_deref() == Some(category))
            .count() as u64)
    }
}
