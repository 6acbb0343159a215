use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::args::Cli;
use cli::commands::{exit_codes, run};

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::FATAL
        }
    };
    std::process::exit(code);
}
