use super::args::{Cli, Commands, MapCommand, NotesCommand};
use super::handlers;
use crate::config::{Config, resolve_dataset_path, resolve_workspace_path};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use archivum_store::{Archive, NotesStore};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let workspace = resolve_workspace_path(cli.archivum_dir.as_deref())?;
    let config = Config::load_from(&workspace.join("config.toml"))?;
    let dataset_path = resolve_dataset_path(cli.data.as_deref(), &config);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Browse => {
            let archive = load_archive(&dataset_path, cli.format)?;
            let notes = NotesStore::open(&workspace.join("notes.db"))?;
            handlers::browse::handle(archive, notes)
        }

        Commands::List { query, kinds } => {
            let archive = load_archive(&dataset_path, cli.format)?;
            handlers::list::handle(&archive, &query, &kinds, cli.format)
        }

        Commands::Show { id } => {
            let archive = load_archive(&dataset_path, cli.format)?;
            handlers::show::handle(&archive, &id, cli.format)
        }

        Commands::Timeline { jump } => {
            let archive = load_archive(&dataset_path, cli.format)?;
            handlers::timeline::handle(&archive, jump, cli.format)
        }

        Commands::Map { command } => match command {
            MapCommand::Export { out } => {
                let archive = load_archive(&dataset_path, cli.format)?;
                handlers::map::handle_export(&archive, out.as_deref())
            }
        },

        Commands::Notes { command } => {
            let notes = NotesStore::open(&workspace.join("notes.db"))?;
            match command {
                NotesCommand::Get { id } => handlers::notes::handle_get(&notes, &id),
                NotesCommand::Set { id, text } => handlers::notes::handle_set(&notes, &id, &text),
            }
        }
    }
}

/// One fetch of the dataset per invocation. Failure is a single terminal
/// message; there is no retry and no partial success. Load diagnostics
/// (unresolved connections, duplicate ids) go to stderr so they never
/// corrupt machine-readable stdout.
fn load_archive(path: &Path, format: OutputFormat) -> Result<Archive> {
    let archive = Archive::load(path)
        .with_context(|| format!("Failed to load archive dataset: {}", path.display()))?;

    if format == OutputFormat::Plain {
        for diagnostic in archive.diagnostics() {
            eprintln!("Warning: {}", diagnostic);
        }
    }

    Ok(archive)
}

fn show_guidance() {
    println!("archivum - Historical archive browser\n");
    println!("Quick commands:");
    println!("  archivum browse                   # Interactive browser");
    println!("  archivum list --query douglass    # Search the grids");
    println!("  archivum show <ID>                # View one record");
    println!("  archivum timeline --jump 1955     # Chronological view");
    println!("  archivum map export               # Write the relationship map\n");
    println!("For more commands:");
    println!("  archivum --help");
}
