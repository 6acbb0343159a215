//! Renders the curriculum seed script.
//!
//! Values are embedded as single-quoted literals without escaping; a quote in a
//! book name or keyword produces invalid SQL.

use crate::config::{CurriculumConfig, Settings};
use crate::model::{AnnotatedVerse, CategoryOutcome, GenerationReport};

const RULE: &str = "-- ============================================";

pub fn render_preamble(cfg: &CurriculumConfig) -> String {
    let total_target = cfg.total_target();
    let additional = cfg.total_additional();

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "-- {} - {} Power Verses\n",
        cfg.settings.title, total_target
    ));
    out.push_str("-- Auto-generated from Bible database\n");
    out.push_str(&format!(
        "-- Run {} FIRST ({} base verses)\n",
        cfg.settings.base_seed_file,
        cfg.base_total()
    ));
    out.push_str(&format!(
        "-- Then run this file ({} additional verses)\n",
        additional
    ));
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

pub fn render_category(settings: &Settings, outcome: &CategoryOutcome) -> String {
    let mut lines: Vec<String> = vec![
        format!("\n{RULE}"),
        format!(
            "-- CATEGORY: {} ({} verses)",
            outcome.category.to_uppercase(),
            outcome.found()
        ),
        format!("{RULE}\n"),
    ];

    let per_week = settings.verses_per_week.max(1) as usize;
    for a in &outcome.verses {
        if (a.index - 1) % per_week == 0 {
            lines.push(format!("\n-- === WEEK {} ===\n", a.week));
        }
        push_update(&mut lines, settings, &outcome.category, a);
    }

    lines.join("\n")
}

fn push_update(lines: &mut Vec<String>, settings: &Settings, category: &str, a: &AnnotatedVerse) {
    let v = &a.verse;
    lines.push(format!("-- {}. {}", a.index, v.reference()));
    lines.push(format!("UPDATE {} SET", settings.verses_table));
    lines.push(format!("  category = '{}',", category));
    lines.push(format!("  curriculum_week = {},", a.week));
    lines.push(format!("  difficulty = {},", a.difficulty));
    lines.push(format!("  keyword = '{}'", a.keyword));
    lines.push(format!(
        "WHERE book_id = (SELECT id FROM {} WHERE name = '{}')",
        settings.books_table, v.book
    ));
    lines.push(format!(
        "  AND chapter = {} AND verse = {};",
        v.chapter, v.verse
    ));
    lines.push(String::new());
}

pub fn render_footer(report: &GenerationReport) -> String {
    format!(
        "\n{RULE}\n-- COMPLETE: {} additional verses generated\n-- Total with base: {} verses\n{RULE}\n",
        report.total_generated(),
        report.total_with_base()
    )
}

pub fn render_script(cfg: &CurriculumConfig, report: &GenerationReport) -> String {
    let mut out = render_preamble(cfg);
    for outcome in &report.outcomes {
        out.push_str(&render_category(&cfg.settings, outcome));
    }
    out.push_str(&render_footer(report));
    out
}

pub fn write_script(path: &std::path::Path, script: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, script).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verse;

    fn annotated(index: usize, week: u32, difficulty: u8) -> AnnotatedVerse {
        AnnotatedVerse {
            index,
            verse: Verse {
                id: index as i64,
                book: "1 Corinthians".into(),
                chapter: 10,
                verse: 13,
                text: "No temptation has seized you".into(),
            },
            week,
            difficulty,
            keyword: "temptation".into(),
        }
    }

    #[test]
    fn test_category_block_layout() {
        let outcome = CategoryOutcome {
            category: "temptation".into(),
            requested: 80,
            verses: vec![annotated(1, 1, 1)],
        };
        let got = render_category(&Settings::default(), &outcome);
        let expected = "\n-- ============================================\n\
-- CATEGORY: TEMPTATION (1 verses)\n\
-- ============================================\n\
\n\
\n-- === WEEK 1 ===\n\
\n\
-- 1. 1 Corinthians 10:13\n\
UPDATE BSB_verses SET\n\
\x20 category = 'temptation',\n\
\x20 curriculum_week = 1,\n\
\x20 difficulty = 1,\n\
\x20 keyword = 'temptation'\n\
WHERE book_id = (SELECT id FROM BSB_books WHERE name = '1 Corinthians')\n\
\x20 AND chapter = 10 AND verse = 13;\n";
        assert_eq!(got, expected);
    }

    #[test]
    fn test_week_header_every_fifth_verse() {
        let verses = (1..=11)
            .map(|i| annotated(i, crate::metadata::week_for(i - 1, 5), 1))
            .collect();
        let outcome = CategoryOutcome {
            category: "pride".into(),
            requested: 80,
            verses,
        };
        let got = render_category(&Settings::default(), &outcome);
        assert_eq!(got.matches("-- === WEEK").count(), 3);
        assert!(got.contains("-- === WEEK 3 ===\n\n-- 11. "));
        assert_eq!(got.matches("UPDATE BSB_verses SET").count(), 11);
    }

    #[test]
    fn test_empty_category_has_banner_only() {
        let outcome = CategoryOutcome {
            category: "fear_anxiety".into(),
            requested: 80,
            verses: vec![],
        };
        let got = render_category(&Settings::default(), &outcome);
        assert!(got.contains("-- CATEGORY: FEAR_ANXIETY (0 verses)"));
        assert!(!got.contains("UPDATE"));
        assert!(got.ends_with("-- ============================================\n"));
    }

    #[test]
    fn test_preamble_and_footer_totals() {
        let cfg = CurriculumConfig::default();
        let pre = render_preamble(&cfg);
        assert!(pre.contains("-- FaithLock Complete Curriculum - 500 Power Verses\n"));
        assert!(pre.contains("-- Run seed_curriculum.sql FIRST (100 base verses)\n"));
        assert!(pre.contains("-- Then run this file (400 additional verses)\n"));
        assert!(pre.ends_with("============\n\n"));

        let report = GenerationReport {
            outcomes: vec![CategoryOutcome {
                category: "anger".into(),
                requested: 80,
                verses: vec![annotated(1, 1, 1), annotated(2, 1, 1)],
            }],
            base_total: 100,
        };
        let foot = render_footer(&report);
        assert!(foot.contains("-- COMPLETE: 2 additional verses generated\n"));
        assert!(foot.contains("-- Total with base: 102 verses\n"));
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let mut a = annotated(1, 1, 1);
        a.verse.book = "Solomon's Song".into();
        let outcome = CategoryOutcome {
            category: "lust".into(),
            requested: 80,
            verses: vec![a],
        };
        let got = render_category(&Settings::default(), &outcome);
        assert!(got.contains("WHERE name = 'Solomon's Song')"));
    }
}
