use crate::domain::ShellSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const QUALIFIER: &str = "com";
const ORG: &str = "mustang";
const APP: &str = "shell";
const SETTINGS_FILE: &str = "settings.json";

pub struct FilePersistence {
    settings_override: Option<PathBuf>,
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePersistence {
    /// Settings location from `MUSTANG_CONFIG`, falling back to the platform config dir.
    pub fn new() -> Self {
        let settings_override = std::env::var_os(mustang_config::CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { settings_override }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            settings_override: Some(path.into()),
        }
    }

    /// Explicit path wins over the environment and the config dir.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => Self::at(path),
            None => Self::new(),
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from(QUALIFIER, ORG, APP)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    pub fn settings_path(&self) -> Result<PathBuf> {
        match &self.settings_override {
            Some(path) => Ok(path.clone()),
            None => Ok(self.config_dir()?.join(SETTINGS_FILE)),
        }
    }

    pub fn load_settings(&self) -> Result<ShellSettings> {
        let path = self.settings_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(ShellSettings::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let settings: ShellSettings = serde_json::from_str(&content)
            .with_context(|| format!("Malformed settings {}", path.display()))?;
        Ok(settings.normalized())
    }

    pub fn save_settings(&self, settings: &ShellSettings) -> Result<()> {
        let path = self.settings_path()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(settings)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write settings")?;
        Ok(())
    }
}

/// Replaces `path` with a synced temp file from the same directory, then
/// syncs the directory so the rename itself is durable.
fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    if let Ok(dir) = fs::File::open(dir) {
        let _ = dir.sync_all();
    }
    Ok(())
}
