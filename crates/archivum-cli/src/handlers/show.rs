use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use archivum_engine::DetailView;
use archivum_store::Archive;

pub fn handle(archive: &Archive, id: &str, format: OutputFormat) -> Result<()> {
    let Some(record) = archive.get(id) else {
        anyhow::bail!("No record with id '{}'", id);
    };

    let view = DetailView::build(record);
    output::print_detail(&view, format)
}
