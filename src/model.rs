use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Folder names treated as build output: compiled binaries and intermediate objects.
const TARGET_NAMES: &[&str] = &["bin", "obj"];

/// Fixed set of build-output folder names, matched without regard to ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetNameSet {
    names: &'static [&'static str],
}

impl TargetNameSet {
    pub const DEFAULT: TargetNameSet = TargetNameSet { names: TARGET_NAMES };

    pub fn matches(&self, name: &OsStr) -> bool {
        let Some(name) = name.to_str() else {
            return false;
        };
        self.names.iter().any(|target| target.eq_ignore_ascii_case(name))
    }

    /// Renders the set for messages, e.g. `'bin' and 'obj'`.
    pub fn describe(&self) -> String {
        let quoted: Vec<String> = self.names.iter().map(|name| format!("'{name}'")).collect();
        match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }
}

impl Default for TargetNameSet {
    fn default() -> Self {
        TargetNameSet::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The folder was gone by the time removal ran.
    Vanished,
    PermissionDenied,
    Io,
}

impl From<io::ErrorKind> for FailureKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => FailureKind::Vanished,
            io::ErrorKind::PermissionDenied => FailureKind::PermissionDenied,
            _ => FailureKind::Io,
        }
    }
}

/// Why a matched folder could not be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&io::Error> for DeleteFailure {
    fn from(err: &io::Error) -> Self {
        DeleteFailure { kind: err.kind().into(), message: err.to_string() }
    }
}

impl fmt::Display for DeleteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReclaimEvent {
    Deleted {
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        size: u64,
    },
    Failed {
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        failure: DeleteFailure,
    },
}

/// Paths are written lossily so a non-UTF-8 name never fails a report.
pub fn serialize_path_lossy<P, S>(path: P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

impl ReclaimEvent {
    pub fn path(&self) -> &Path {
        match self {
            ReclaimEvent::Deleted { path, .. } | ReclaimEvent::Failed { path, .. } => path,
        }
    }
}

/// Running totals for a single walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReclaimResult {
    pub freed: u64,
    pub deleted: usize,
    pub failed: usize,
}

impl ReclaimResult {
    pub fn new() -> Self {
        ReclaimResult::default()
    }

    pub fn record(&mut self, event: &ReclaimEvent) {
        match event {
            ReclaimEvent::Deleted { size, .. } => {
                self.freed = self.freed.saturating_add(*size);
                self.deleted += 1;
            }
            ReclaimEvent::Failed { .. } => {
                self.failed += 1;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deleted == 0 && self.failed == 0
    }
}
