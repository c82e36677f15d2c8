use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use archivum_engine::{build_timeline, jump_to_year};
use archivum_store::Archive;

pub fn handle(archive: &Archive, jump: Option<i32>, format: OutputFormat) -> Result<()> {
    let entries = build_timeline(archive.records());

    // A jump past every dated entry falls through silently: the full
    // timeline still prints, just without a marked entry.
    let jump_index = jump.and_then(|year| jump_to_year(&entries, year));

    output::print_timeline(&entries, jump_index, format)
}
