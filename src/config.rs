use std::fs;
use std::path::{Path, PathBuf};

use dirs_next as dirs;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const APP_DIR: &str = "vsclean";
const CONFIG_FILE: &str = "config.toml";

/// User configuration, stored as TOML.
///
/// `exclude` holds glob patterns; a folder matching one is neither walked nor
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Config::load_from(&config_file_path()?)
    }

    /// A missing file is an empty configuration.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn append_exclude(&mut self, value: String) {
        if !self.exclude.contains(&value) {
            self.exclude.push(value);
        }
    }

    /// Returns whether the pattern was present.
    pub fn remove_exclude(&mut self, value: &str) -> bool {
        let before = self.exclude.len();
        self.exclude.retain(|existing| existing != value);
        self.exclude.len() != before
    }

    pub fn compile_excludes(&self) -> Result<Option<GlobSet>, AppError> {
        if self.exclude.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            builder.add(Glob::new(&expand_home(pattern)?)?);
        }
        Ok(Some(builder.build()?))
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join(APP_DIR).join(CONFIG_FILE))
}

/// Path of the config file, written with defaults first if it does not exist.
pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        Config::default().save_to(&path)?;
    }
    Ok(path)
}

fn expand_home(value: &str) -> Result<String, AppError> {
    if !value.starts_with('~') {
        return Ok(value.to_string());
    }
    let home_dir = dirs::home_dir().ok_or_else(|| {
        AppError::config("Unable to expand '~' because the home directory is unknown")
    })?;
    if value == "~" {
        Ok(home_dir.display().to_string())
    } else if let Some(stripped) = value.strip_prefix("~/") {
        Ok(home_dir.join(stripped).display().to_string())
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_exclude_skips_duplicates() {
        let mut config = Config::default();
        config.append_exclude("/work/vendor/**".to_string());
        config.append_exclude("/work/vendor/**".to_string());
        config.append_exclude("/work/third_party/**".to_string());

        assert_eq!(config.exclude, vec!["/work/vendor/**", "/work/third_party/**"]);
    }

    #[test]
    fn remove_exclude_reports_presence() {
        let mut config = Config { exclude: vec!["/a/**".to_string(), "/b/**".to_string()] };

        assert!(config.remove_exclude("/a/**"));
        assert!(!config.remove_exclude("/a/**"));
        assert_eq!(config.exclude, vec!["/b/**"]);
    }

    #[test]
    fn empty_config_compiles_to_no_globs() {
        assert!(Config::default().compile_excludes().unwrap().is_none());
    }

    #[test]
    fn excludes_compile_and_match() {
        let config: Config = toml::from_str("exclude = [\"/work/keep/**\"]").unwrap();
        let set = config.compile_excludes().unwrap().unwrap();

        assert!(set.is_match("/work/keep/App/bin"));
        assert!(!set.is_match("/work/App/bin"));
    }

    #[test]
    fn saved_config_loads_back() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested/vsclean/config.toml");
        assert!(Config::load_from(&path).unwrap().exclude.is_empty());

        let config = Config { exclude: vec!["~/work/keep/**".to_string()] };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().exclude, config.exclude);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let config = Config { exclude: vec!["/work/[".to_string()] };
        assert!(matches!(config.compile_excludes(), Err(AppError::Glob(_))));
    }
}
