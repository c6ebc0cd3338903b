use std::fs;
use std::path::Path;

use globset::GlobSet;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::AppError;
use crate::model::{DeleteFailure, ReclaimEvent, ReclaimResult, TargetNameSet};
use crate::path::{is_excluded, validate_root};
use crate::sizer::measure;

/// Receives one event per matched folder, synchronously and in walk order.
pub trait EventSink {
    fn emit(&mut self, event: &ReclaimEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&ReclaimEvent),
{
    fn emit(&mut self, event: &ReclaimEvent) {
        self(event)
    }
}

/// Walks a tree and removes every folder whose name is in the target set.
pub struct Reclaimer {
    targets: TargetNameSet,
    exclude: Option<GlobSet>,
}

impl Reclaimer {
    pub fn new(exclude: Option<GlobSet>) -> Self {
        Self { targets: TargetNameSet::DEFAULT, exclude }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(config.compile_excludes()?))
    }

    pub fn targets(&self) -> TargetNameSet {
        self.targets
    }

    /// Depth-first walk of `root`, siblings in file-name order.
    ///
    /// A matched folder is measured, removed and reported, and never descended
    /// into. Failed removals are reported and skipped; only a missing or
    /// non-directory `root` makes this return an error.
    pub fn reclaim<S>(&self, root: &Path, sink: &mut S) -> Result<ReclaimResult, AppError>
    where
        S: EventSink + ?Sized,
    {
        validate_root(root)?;
        info!(root = %root.display(), "reclaim started");

        let mut result = ReclaimResult::new();
        let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if is_excluded(path, self.exclude.as_ref()) {
                debug!(path = %path.display(), "excluded");
                walker.skip_current_dir();
                continue;
            }

            if !self.targets.matches(entry.file_name()) {
                continue;
            }

            // Drop the walker's handle on the folder before removing it.
            walker.skip_current_dir();
            let event = remove_target(path);
            result.record(&event);
            sink.emit(&event);
        }

        info!(
            freed = result.freed,
            deleted = result.deleted,
            failed = result.failed,
            "reclaim finished"
        );
        Ok(result)
    }
}

impl Default for Reclaimer {
    fn default() -> Self {
        Reclaimer::new(None)
    }
}

/// Reclaim `root` with the default target set and no exclusions.
pub fn reclaim<S>(root: &Path, sink: &mut S) -> Result<ReclaimResult, AppError>
where
    S: EventSink + ?Sized,
{
    Reclaimer::default().reclaim(root, sink)
}

fn remove_target(path: &Path) -> ReclaimEvent {
    let size = measure(path);
    debug!(path = %path.display(), size, "removing build output");
    match fs::remove_dir_all(path) {
        Ok(()) => ReclaimEvent::Deleted { path: path.to_path_buf(), size },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "failed to delete");
            ReclaimEvent::Failed { path: path.to_path_buf(), failure: DeleteFailure::from(&err) }
        }
    }
}
