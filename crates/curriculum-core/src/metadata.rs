//! Position-based curriculum fields: week, difficulty and a display keyword.

use crate::model::{AnnotatedVerse, Verse};

pub const FALLBACK_KEYWORD: &str = "faith";
pub const MAX_KEYWORD_CHARS: usize = 15;
pub const MIN_KEYWORD_CHARS: usize = 5;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "shall", "would", "should", "may", "might", "can", "could", "must",
];

/// 1-based week for a 0-based selection position.
pub fn week_for(position: usize, verses_per_week: u32) -> u32 {
    let per_week = verses_per_week.max(1) as usize;
    (position / per_week) as u32 + 1
}

pub fn difficulty_for(week: u32) -> u8 {
    match week {
        0..=4 => 1,
        5..=12 => 2,
        _ => 3,
    }
}

/// First lower-cased token longer than four chars that is not a stop word,
/// cut to fifteen chars. Falls back to `"faith"`.
pub fn extract_keyword(text: &str) -> String {
    let cleaned = text.to_lowercase().replace([',', '.'], "");
    cleaned
        .split_whitespace()
        .find(|w| w.chars().count() >= MIN_KEYWORD_CHARS && !STOP_WORDS.contains(&w))
        .map(|w| w.chars().take(MAX_KEYWORD_CHARS).collect())
        .unwrap_or_else(|| FALLBACK_KEYWORD.to_string())
}

/// Annotates verses in selection order.
pub fn annotate(verses: Vec<Verse>, verses_per_week: u32) -> Vec<AnnotatedVerse> {
    verses
        .into_iter()
        .enumerate()
        .map(|(pos, verse)| {
            let week = week_for(pos, verses_per_week);
            AnnotatedVerse {
                index: pos + 1,
                keyword: extract_keyword(&verse.text),
                week,
                difficulty: difficulty_for(week),
                verse,
            }
        })
        .collect()
}
