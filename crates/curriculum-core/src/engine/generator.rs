use crate::config::CurriculumConfig;
use crate::metadata::annotate;
use crate::model::{CategoryOutcome, GenerationReport};
use crate::report::{console, sql};
use crate::selector::select_verses;
use crate::storage::VerseSource;
use std::collections::BTreeSet;
use std::path::Path;

pub struct Generator<'a> {
    pub source: &'a dyn VerseSource,
    pub config: &'a CurriculumConfig,
    /// Suppress the per-category progress lines on stdout.
    pub quiet: bool,
}

pub struct GenerationArtifacts {
    pub report: GenerationReport,
    pub script: String,
}

impl<'a> Generator<'a> {
    pub fn new(source: &'a dyn VerseSource, config: &'a CurriculumConfig) -> Self {
        Self {
            source,
            config,
            quiet: false,
        }
    }

    /// Selects and annotates verses for every category in order, then renders the script.
    /// Any store error aborts the whole run.
    pub fn generate(&self) -> anyhow::Result<GenerationArtifacts> {
        let settings = &self.config.settings;
        let mut taken: BTreeSet<i64> = BTreeSet::new();
        let mut outcomes = Vec::with_capacity(self.config.categories.len());

        for category in &self.config.categories {
            if !self.quiet {
                console::print_category_start(&category.name);
            }
            self.check_base_curriculum(&category.name)?;

            let requested = category.additional_needed(settings.base_per_category);
            let verses = select_verses(self.source, category, requested, settings, &taken)?;
            taken.extend(verses.iter().map(|v| v.id));

            let outcome = CategoryOutcome {
                category: category.name.clone(),
                requested,
                verses: annotate(verses, settings.verses_per_week),
            };

            tracing::info!(
                event = "category_done",
                category = %outcome.category,
                requested,
                found = outcome.found()
            );
            if !self.quiet {
                console::print_category_done(&outcome);
            }
            outcomes.push(outcome);
        }

        let report = GenerationReport {
            outcomes,
            base_total: self.config.base_total(),
        };
        let script = sql::render_script(self.config, &report);
        Ok(GenerationArtifacts { report, script })
    }

    /// Runs [`Self::generate`] and writes the script to `out` in one piece.
    pub fn generate_to(&self, out: &Path) -> anyhow::Result<GenerationReport> {
        let artifacts = self.generate()?;
        sql::write_script(out, &artifacts.script)?;
        tracing::info!(
            event = "script_written",
            path = %out.display(),
            verses = artifacts.report.total_generated()
        );
        Ok(artifacts.report)
    }

    // Advisory only; the request size stays target - base regardless.
    fn check_base_curriculum(&self, category: &str) -> anyhow::Result<()> {
        let base = self.config.settings.base_per_category as u64;
        if base == 0 {
            return Ok(());
        }
        let seeded = self.source.count_assigned(category)?;
        if seeded < base {
            tracing::warn!(
                event = "base_curriculum_short",
                category,
                seeded,
                expected = base
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Verse};
    use crate::storage::MemorySource;

    fn verse(id: i64, text: &str) -> Verse {
        Verse {
            id,
            book: "Proverbs".into(),
            chapter: 16,
            verse: id,
            text: text.into(),
        }
    }

    #[test]
    fn test_verse_never_assigned_twice_in_one_run() {
        let mut src = MemorySource::new();
        src.push(
            verse(1, "Pride goes before destruction, and a haughty spirit before a fall."),
            None,
        );
        src.push(
            verse(2, "A gentle answer turns away wrath, but a harsh word stirs up anger."),
            None,
        );

        let mut cfg = CurriculumConfig::default();
        cfg.categories = vec![
            Category::new("pride", 100, &["%pride%", "%wrath%"]),
            Category::new("anger", 100, &["%anger%", "%pride%"]),
        ];

        let mut generator = Generator::new(&src, &cfg);
        generator.quiet = true;
        let out = generator.generate().unwrap();

        let pride: Vec<_> = out.report.outcomes[0].verses.iter().map(|a| a.verse.id).collect();
        let anger: Vec<_> = out.report.outcomes[1].verses.iter().map(|a| a.verse.id).collect();
        assert_eq!(pride, vec![1, 2]);
        assert!(anger.is_empty());
        assert_eq!(out.report.total_generated(), 2);
        assert!(out.script.contains("-- CATEGORY: ANGER (0 verses)"));
    }

    #[test]
    fn test_request_size_is_target_minus_base() {
        let mut src = MemorySource::new();
        for i in 0..12 {
            src.push(
                verse(i, "Humble yourselves before the Lord, and He will exalt you."),
                None,
            );
        }
        let mut cfg = CurriculumConfig::default();
        cfg.categories = vec![Category::new("pride", 30, &["%humble%"])];

        let mut generator = Generator::new(&src, &cfg);
        generator.quiet = true;
        let out = generator.generate().unwrap();
        assert_eq!(out.report.outcomes[0].requested, 10);
        assert_eq!(out.report.outcomes[0].found(), 10);
        assert_eq!(out.report.base_total, 20);
        assert_eq!(out.report.total_with_base(), 30);
    }
}
