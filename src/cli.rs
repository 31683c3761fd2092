use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// slidedeck - A terminal presenter for module-grouped slide decks
#[derive(Parser, Debug)]
#[command(name = "slidedeck")]
#[command(about = "Present a module-grouped slide deck in the terminal")]
#[command(version)]
pub struct Cli {
    /// Slide catalog (JSON array of slide records). Defaults to the built-in deck.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings file with the reduced range and asset table
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Directory asset paths are resolved against
    /// (falls back to SLIDEDECK_ASSET_DIR, then the working directory)
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,

    /// Start with the full slide set, document pages included
    #[arg(long, global = true, conflicts_with = "reduced")]
    pub full: bool,

    /// Start with the reduced slide set
    #[arg(long, global = true)]
    pub reduced: bool,

    /// Offer the full/reduced toggle even when starting reduced
    #[arg(long, global = true)]
    pub allow_toggle: bool,

    /// Write logs to this file while presenting (otherwise they are discarded)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive presenter (default)
    Present {
        /// Display id of the slide to open on
        #[arg(short, long, default_value_t = 1)]
        start: u32,
    },
    /// Validate a slide catalog
    Validate {
        /// Catalog to validate (defaults to --catalog or the built-in deck)
        catalog: Option<PathBuf>,
    },
    /// Print the active slide sequence
    List,
    /// Print the derived module index
    Modules,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Present { start: 1 }
    }
}
