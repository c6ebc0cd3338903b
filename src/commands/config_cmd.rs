use std::path::Path;
use std::process::Command;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::path::display_path;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub add_exclude: Option<String>,
    pub remove_exclude: Option<String>,
}

impl ConfigOptions {
    fn is_empty(&self) -> bool {
        !self.show_path && !self.edit && self.add_exclude.is_none() && self.remove_exclude.is_none()
    }
}

/// Show or change the configuration. Without flags, prints the file path and
/// the current exclusions.
pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    if options.is_empty() {
        println!("Configuration file: {}", display_path(&config_file_path()?));
        print_excludes(&Config::load()?);
        return Ok(());
    }

    if options.show_path {
        println!("Configuration file: {}", display_path(&config_file_path()?));
    }

    if options.add_exclude.is_some() || options.remove_exclude.is_some() {
        let mut config = Config::load()?;
        if let Some(pattern) = options.add_exclude {
            // Reject bad globs before they are written to disk.
            globset::Glob::new(&pattern)?;
            config.append_exclude(pattern.clone());
            println!("Added exclude pattern '{}'. Matching folders will be left alone.", pattern);
        }
        if let Some(pattern) = options.remove_exclude {
            if config.remove_exclude(&pattern) {
                println!("Removed exclude pattern '{}'.", pattern);
            } else {
                println!("No exclude pattern '{}' to remove.", pattern);
            }
        }
        config.save()?;
    }

    if options.edit {
        let path = ensure_config_file()?;
        open_editor(&path)?;
    }

    Ok(())
}

fn print_excludes(config: &Config) {
    if config.exclude.is_empty() {
        println!("No exclude patterns.");
        return;
    }
    println!("Exclude patterns:");
    for pattern in &config.exclude {
        println!("  {}", pattern);
    }
}

fn open_editor(path: &Path) -> Result<(), AppError> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string());

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(format!("{editor}: {err}")))?;

    if !status.success() {
        return Err(AppError::Editor(format!("{editor} exited with status {status}")));
    }
    Ok(())
}

fn default_editor() -> &'static str {
    if cfg!(windows) { "notepad" } else { "nano" }
}
