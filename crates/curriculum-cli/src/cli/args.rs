use clap::Parser;
use curriculum_core::config::{DEFAULT_DB_PATH, DEFAULT_OUT_PATH};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "curriculum-gen",
    version,
    about = "Select verses per category and emit the curriculum seed SQL"
)]
pub struct Cli {
    /// Project root; relative paths below are resolved against it.
    /// Defaults to the workspace this binary was built from.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Bible database (read-only)
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Generated SQL script
    #[arg(long, default_value = DEFAULT_OUT_PATH)]
    pub out: PathBuf,

    /// Optional YAML overriding settings and categories
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject unknown keys in the config file
    #[arg(long)]
    pub strict_config: bool,

    /// tracing filter, e.g. "info" or "curriculum_core=debug"
    #[arg(long, env = "CURRICULUM_LOG", default_value = "info")]
    pub log_level: String,

    /// Suppress per-category progress lines
    #[arg(long)]
    pub quiet: bool,
}
