use crate::types::OutputFormat;
use anyhow::Result;
use archivum_engine::{Card, DetailView, Grids, Source, TimelineEntry};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io;

/// Console rendering for the non-interactive commands. Plain output is
/// for humans (styled only on a terminal), JSON for scripts.

pub fn print_grids(grids: &Grids, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(grids)?);
        }
        OutputFormat::Plain => {
            print_grid_section("PEOPLE", &grids.people);
            print_grid_section("MOVEMENTS & EVENTS", &grids.movements);
            print_grid_section("RESOURCES", &grids.resources);
        }
    }
    Ok(())
}

fn print_grid_section(heading: &str, cards: &[Card]) {
    let tty = io::stdout().is_terminal();

    if tty {
        println!("{}", heading.yellow().bold());
    } else {
        println!("{}", heading);
    }
    println!("{}", "-".repeat(60));

    if cards.is_empty() {
        println!("  (no matching records)\n");
        return;
    }

    for card in cards {
        if tty {
            println!("  {}  {}", card.title.bold(), card.dates.dimmed());
        } else {
            println!("  {}  {}", card.title, card.dates);
        }
        println!("    id: {}", card.id);
        if !card.key_terms.is_empty() {
            println!("    terms: {}", card.key_terms.join(", "));
        }
        if !card.summary.is_empty() {
            println!("    {}", card.summary);
        }
        println!();
    }
}

pub fn print_detail(view: &DetailView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(view)?);
        }
        OutputFormat::Plain => {
            let tty = io::stdout().is_terminal();

            if tty {
                println!("{}", view.name.yellow().bold());
            } else {
                println!("{}", view.name);
            }
            println!("{}\n", view.dates);

            if !view.body.is_empty() {
                println!("{}\n", view.body);
            }

            if !view.gallery.is_empty() {
                println!("Gallery:");
                for url in &view.gallery {
                    println!("  {}", url);
                }
                println!();
            }

            if !view.sources.is_empty() {
                println!("Sources:");
                for source in &view.sources {
                    match source {
                        Source::Link(url) => println!("  View Source -> {}", url),
                        Source::Citation(text) => println!("  {}", text),
                    }
                }
            }
        }
    }
    Ok(())
}

pub fn print_timeline(
    entries: &[TimelineEntry],
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "entries": entries,
                "jump": jump,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            let tty = io::stdout().is_terminal();

            for (idx, entry) in entries.iter().enumerate() {
                let marker = if jump == Some(idx) { ">" } else { " " };
                let year = entry
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "----".to_string());

                let line = format!(
                    "{} {:>5}  {}  ({})",
                    marker, year, entry.name, entry.dates
                );
                if tty && entry.accent {
                    println!("{}", line.red());
                } else {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}
