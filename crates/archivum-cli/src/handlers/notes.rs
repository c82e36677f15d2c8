use anyhow::Result;
use archivum_store::NotesStore;

pub fn handle_get(notes: &NotesStore, id: &str) -> Result<()> {
    if let Some(body) = notes.get(id)? {
        println!("{}", body);
    }
    Ok(())
}

pub fn handle_set(notes: &NotesStore, id: &str, text: &str) -> Result<()> {
    notes.put(id, text)?;
    Ok(())
}
