// NOTE: archivum Architecture Rationale
//
// Why load-then-render (no index, no cache)?
// - The archive is one JSON document, small enough to re-read per command
// - Whole-dataset re-renders keep every view trivially consistent
// - Trade-off: no incremental anything, which is fine at this scale
//
// Why resolve cross-references at load time?
// - The dataset links records by *name*, a weak join that breaks silently
//   on rename
// - Resolving once into id-based links turns per-view silent drops into
//   one set of load diagnostics the user actually sees
//
// Why a sidecar SQLite file for notes?
// - Notes are the only locally-originated mutation; the dataset itself is
//   never rewritten
// - One table, schema created on open, no migrations to carry

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod output;
pub mod types;
pub mod ui;

pub use args::{Cli, Commands, MapCommand, NotesCommand};
pub use commands::run;
