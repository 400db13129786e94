//! UI Explorer demo binary
//!
//! ```bash
//! cargo run
//! cargo run -- --location "#Atoms/Button/Loading"
//! cargo run -- --list
//! echo '{"type": "navigate", "location": "#Atoms/Badge"}' | cargo run -- --stdin
//! ```

mod stories;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use ui_explorer::config::{load_config, load_config_from};
use ui_explorer::logging;

#[derive(Debug, Parser)]
#[command(name = "ui-explorer", about = "Browse every story of every component")]
struct Cli {
    /// Location to open, e.g. "#Atoms/Button/Loading"
    #[arg(short, long)]
    location: Option<String>,

    /// Config file to use instead of ~/.ui-explorer/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the location of every UI and exit
    #[arg(long)]
    list: bool,

    /// Accept JSONL navigation commands on stdin
    #[arg(long)]
    stdin: bool,
}

/// Expand a leading `~`. Paths that are not valid UTF-8 are used as given.
fn expand_config_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => path.to_path_buf(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let mut config = match &cli.config {
        Some(path) => {
            let path = expand_config_path(path);
            load_config_from(&path)
                .with_context(|| format!("loading config from {}", path.display()))?
        }
        None => load_config(),
    };
    if cli.location.is_some() {
        config.initial_location = cli.location;
    }
    config.stdin_commands |= cli.stdin;

    let catalog = stories::demo_catalog(config.theme);

    if cli.list {
        let mut out = std::io::stdout().lock();
        for location in catalog.ui_locations() {
            writeln!(out, "{location}").context("writing catalog listing")?;
        }
        return Ok(());
    }

    tracing::info!(
        event_type = "app_lifecycle",
        action = "run",
        initial_location = ?config.initial_location,
        stdin_commands = config.stdin_commands,
        "Starting explorer"
    );
    ui_explorer::run_with_config(catalog, config);
    Ok(())
}
