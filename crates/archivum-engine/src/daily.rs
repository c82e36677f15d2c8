use archivum_types::Record;
use rand::Rng;

/// Pick the home section's daily-review record uniformly at random.
/// Re-entering the home section re-rolls by calling this again.
pub fn pick_daily<'a, R: Rng + ?Sized>(records: &'a [Record], rng: &mut R) -> Option<&'a Record> {
    if records.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..records.len());
    Some(&records[idx])
}
