use std::path::{Path, PathBuf};

use crate::error::AppError;
use dirs_next as dirs;

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}

pub fn resolve_root(explicit: Option<PathBuf>, current: bool) -> PathBuf {
    match explicit {
        Some(path) if !current => path,
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// The root must be an existing directory before any walk starts.
pub fn validate_root(root: &Path) -> Result<(), AppError> {
    if root.is_dir() { Ok(()) } else { Err(AppError::InvalidRoot(root.to_path_buf())) }
}

pub fn is_excluded(path: &Path, exclude: Option<&globset::GlobSet>) -> bool {
    if let Some(set) = exclude {
        let candidate = if path.is_absolute() {
            path.to_string_lossy().to_string()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => {
                    let joined = cwd.join(path);
                    joined.to_string_lossy().to_string()
                }
                Err(_) => path.to_string_lossy().to_string(),
            }
        };
        set.is_match(&candidate)
    } else {
        false
    }
}
