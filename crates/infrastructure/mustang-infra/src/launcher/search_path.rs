use std::ffi::OsString;
use std::path::PathBuf;

/// Resolves command names against an executable search path.
///
/// `from_env` uses the process `PATH`; `with_paths` pins an explicit list,
/// which keeps lookups deterministic in tests.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    paths: Option<OsString>,
}

impl SearchPath {
    pub fn from_env() -> Self {
        Self { paths: None }
    }

    pub fn with_paths(paths: impl Into<OsString>) -> Self {
        Self {
            paths: Some(paths.into()),
        }
    }

    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let found = match &self.paths {
            None => which::which(name),
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(name, Some(paths), cwd)
            }
        };

        match found {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(name, "Command not on search path: {e}");
                None
            }
        }
    }
}
