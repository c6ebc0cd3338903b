use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::format::format_bytes;
use crate::model::{ReclaimEvent, ReclaimResult, serialize_path_lossy};
use crate::path::{display_path, validate_root};
use crate::walker::Reclaimer;

pub struct CleanOptions {
    pub root: PathBuf,
    pub assume_yes: bool,
    pub json: bool,
}

pub fn execute_clean(options: CleanOptions) -> Result<ReclaimResult, AppError> {
    validate_root(&options.root)?;
    let config = Config::load()?;
    let reclaimer = Reclaimer::from_config(&config)?;
    let targets = reclaimer.targets().describe();

    if !options.assume_yes && !confirm_clean(&targets, &options.root)? {
        println!("Aborted. No folders were deleted.");
        return Ok(ReclaimResult::new());
    }

    if options.json {
        let mut events = Vec::new();
        let result = reclaimer
            .reclaim(&options.root, &mut |event: &ReclaimEvent| events.push(event.clone()))?;
        let report = JsonReport {
            root: &options.root,
            events: &events,
            freed_bytes: result.freed,
            freed: format_bytes(result.freed),
            deleted: result.deleted,
            failed: result.failed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(result);
    }

    println!("Cleaning {} folders in:", targets);
    println!("{}", display_path(&options.root));
    println!();

    let result = reclaimer.reclaim(&options.root, &mut print_event)?;

    println!();
    if result.is_empty() {
        println!("Nothing to delete. No build output folders were found.");
    }
    println!("Done!");
    if result.failed > 0 {
        println!("{} folder(s) could not be deleted.", result.failed);
    }
    println!("Total space freed: {}", format_bytes(result.freed));
    Ok(result)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    root: &'a Path,
    events: &'a [ReclaimEvent],
    freed_bytes: u64,
    freed: String,
    deleted: usize,
    failed: usize,
}

fn print_event(event: &ReclaimEvent) {
    match event {
        ReclaimEvent::Deleted { path, size } => {
            println!("Deleted: {} ({})", display_path(path), format_bytes(*size));
        }
        ReclaimEvent::Failed { path, failure } => {
            println!("Failed to delete {}: {}", display_path(path), failure);
        }
    }
}

fn confirm_clean(targets: &str, root: &Path) -> Result<bool, AppError> {
    println!("About to delete every {} folder under {}. Proceed? [y/N]", targets, display_path(root));
    print!("Confirm: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim().to_ascii_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
