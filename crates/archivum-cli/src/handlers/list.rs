use crate::output;
use crate::types::{KindArg, OutputFormat, kind_selection};
use anyhow::Result;
use archivum_engine::{Filter, build_grids, filter_records};
use archivum_store::Archive;

pub fn handle(archive: &Archive, query: &str, kinds: &[KindArg], format: OutputFormat) -> Result<()> {
    let filter = Filter {
        query: query.to_string(),
        kinds: kind_selection(kinds),
    };

    let matched = filter_records(archive.records(), &filter);
    let grids = build_grids(matched.into_iter());

    output::print_grids(&grids, format)
}
