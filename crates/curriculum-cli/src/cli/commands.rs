use super::args::Cli;
use anyhow::Context;
use curriculum_core::config::path_resolver::PathResolver;
use curriculum_core::config::{load_config, CurriculumConfig};
use curriculum_core::engine::generator::Generator;
use curriculum_core::report::console;
use curriculum_core::storage::VerseStore;
use std::path::{Path, PathBuf};

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const MISSING_INPUT: i32 = 1;
    pub const FATAL: i32 = 2;
}

/// Workspace root of this build, where `assets/databases` lives.
pub fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

pub fn run(cli: Cli) -> anyhow::Result<i32> {
    let root = cli.root.clone().unwrap_or_else(default_root);
    let resolver = PathResolver::new(&root);
    let db_path = resolver.resolve(&cli.db);
    let out_path = resolver.resolve(&cli.out);

    if !db_path.exists() {
        println!("❌ Database not found: {}", db_path.display());
        return Ok(exit_codes::MISSING_INPUT);
    }

    let cfg = match &cli.config {
        Some(p) => {
            let p = resolver.resolve(p);
            load_config(&p, cli.strict_config).map_err(|e| anyhow::anyhow!(e))?
        }
        None => CurriculumConfig::default(),
    };

    tracing::info!(
        event = "generate_start",
        db = %db_path.display(),
        out = %out_path.display(),
        categories = cfg.categories.len()
    );

    println!("📖 Connecting to database: {}", db_path.display());
    let store = VerseStore::open(&db_path, &cfg.settings)
        .with_context(|| format!("cannot use database {}", db_path.display()))?;

    let mut generator = Generator::new(&store, &cfg);
    generator.quiet = cli.quiet;
    let report = generator.generate_to(&out_path)?;

    console::print_summary(&report, &db_path, &out_path, &cfg.settings.base_seed_file);
    Ok(exit_codes::OK)
}
