use clap::Parser;
use roster_core::{config::Config, Directory, EntityKind};
use std::path::PathBuf;

mod headless;

#[derive(Parser)]
#[command(name = "roster", about = "Search palette over a directory of people and vehicles")]
struct Cli {
    /// Write debug logs to <tmp>/roster-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// JSON directory file. Defaults to the built-in sample directory.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Config file. Defaults to $XDG_CONFIG_HOME/roster/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run one query, print the grouped results and exit.
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Restrict a headless query to one kind (person or vehicle).
    #[arg(long, value_name = "KIND", requires = "query")]
    filter: Option<EntityKind>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("roster-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "roster debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load config; using defaults");
            Config::defaults()
        }),
    };

    let directory = match &cli.data {
        Some(path) => Directory::load(path)?,
        None => Directory::sample(),
    };

    if let Some(query) = &cli.query {
        return headless::run(directory, config.search.modal_options(), query, cli.filter);
    }

    roster_tui::run(directory, config)
}
