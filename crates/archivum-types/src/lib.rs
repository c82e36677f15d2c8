// Types layer - the archive record schema and values derived from it.
// Contains no I/O; loading lives in archivum-store, interpretation in
// archivum-engine.

mod placeholder;
mod record;

pub use placeholder::placeholder_url;
pub use record::{Record, RecordKind, leading_year};
