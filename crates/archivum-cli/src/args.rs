use crate::types::{KindArg, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archivum")]
#[command(about = "Browse a historical archive dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the archive JSON document
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Workspace directory for config and the notes database
    #[arg(long, global = true)]
    pub archivum_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser (grids, timeline, map, notes)
    Browse,

    /// Print the category grids, optionally filtered
    List {
        /// Case-insensitive substring matched against name, summary,
        /// and key terms
        #[arg(long, default_value = "")]
        query: String,

        /// Kind checkbox; repeatable. "all" overrides the others.
        #[arg(long = "kind", value_enum)]
        kinds: Vec<KindArg>,
    },

    /// Print one record's full detail view
    Show { id: String },

    /// Print the chronological timeline
    Timeline {
        /// Jump to the first entry at or past this year
        #[arg(long)]
        jump: Option<i32>,
    },

    Map {
        #[command(subcommand)]
        command: MapCommand,
    },

    Notes {
        #[command(subcommand)]
        command: NotesCommand,
    },
}

#[derive(Subcommand)]
pub enum MapCommand {
    /// Write the relationship map as Graphviz DOT
    Export {
        /// Output path (default: relationship-map.dot)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum NotesCommand {
    /// Print a stored note body
    Get { id: String },

    /// Store a note body, replacing any prior value
    Set { id: String, text: String },
}
