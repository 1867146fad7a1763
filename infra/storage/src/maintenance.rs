use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

pub(crate) const TMP_MARKER: &str = ".famtmp.";
const STALE_AFTER: Duration = Duration::from_secs(300);

/// Removes temp files older than [`STALE_AFTER`] from `root`. Best effort.
pub(crate) fn purge_tmp(root: &Path) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %root.display(), error = %err, "Cannot scan storage root for temp files");
            return;
        },
    };

    let now = SystemTime::now();
    let (mut removed, mut failed) = (0usize, 0usize);
    for entry in entries.flatten() {
        let path = entry.path();
        if !is_tmp(&path) || !is_stale(&path, now) {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to remove temp file");
                failed += 1;
            },
        }
    }

    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

fn is_tmp(path: &Path) -> bool {
    path.is_file()
        && path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.contains(TMP_MARKER))
}

fn is_stale(path: &Path, now: SystemTime) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > STALE_AFTER)
}
