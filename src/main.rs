//! Duvi - an interactive terminal browser for du output.
//!
//! # Usage
//!
//! ```bash
//! du -k | sort -rn > du.txt   # or: du -k some/dir > du.txt
//! duvi du.txt
//! duvi --sort name-asc du.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use duvi::app::App;
use duvi::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use duvi::tree::SortMode;

/// An interactive terminal browser for du output
#[derive(Parser, Debug)]
#[command(name = "duvi", version, about, long_about = None)]
struct Cli {
    /// Listing to browse: SIZE<TAB>PATH lines as produced by `du -k`
    #[arg(value_name = "FILE", default_value = "du.txt")]
    file: PathBuf,

    /// Initial sort order
    #[arg(short, long, value_enum)]
    sort: Option<SortMode>,

    /// Draw tree connectors with plain ASCII instead of box-drawing glyphs
    #[arg(long)]
    ascii: bool,

    /// Save current command-line flags as defaults in the config file
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in the config file
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Verify file exists before touching the terminal
    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    // Run the application
    let mut app = App::new(cli.file)
        .with_sort_mode(effective.sort.unwrap_or_default())
        .with_ascii(effective.ascii);

    app.run().context("Application error")
}
