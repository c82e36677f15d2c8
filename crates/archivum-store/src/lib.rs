// Store layer - the I/O boundary of archivum.
//
// Two concerns live here:
// - dataset: one-shot load of the archive JSON document, including load-time
//   resolution of name-based `connections` into id-based links
// - notes: the SQLite-backed key/value store for user note fields
//
// Everything above this layer (engine, CLI) works on in-memory data only.

mod dataset;
mod error;
mod notes;

pub use dataset::{Archive, Link, LoadDiagnostic};
pub use error::{Error, Result};
pub use notes::NotesStore;
