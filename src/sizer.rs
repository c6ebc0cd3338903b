use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

/// Total size in bytes of every regular file under `path`.
///
/// Best effort: entries that cannot be listed or stat'ed count as zero, so a
/// path that vanished or is entirely unreadable measures as `0`. Nested
/// `bin`/`obj` folders are counted like anything else.
pub fn measure(path: &Path) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                total = total.saturating_add(metadata.len());
            }
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "skipping file size");
            }
        }
    }
    total
}
