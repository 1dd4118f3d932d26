use serde::Serialize;
use std::path::PathBuf;

/// What came of a single dispatch. Failures are values, never panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum LaunchResult {
    Started { program: PathBuf, pid: u32 },
    ExecutableNotFound { path: PathBuf },
    NoViableRunnerFound { candidates: Vec<String> },
    SpawnFailed { program: PathBuf, reason: String },
    Exiting,
}

impl LaunchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchResult::Started { .. } | LaunchResult::Exiting)
    }

    /// Short text suitable for a status bar.
    pub fn status_line(&self) -> String {
        match self {
            LaunchResult::Started { program, .. } => {
                let name = program
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| program.display().to_string());
                format!("Started {name}")
            }
            LaunchResult::ExecutableNotFound { path } => {
                format!("Not found: {}", path.display())
            }
            LaunchResult::NoViableRunnerFound { candidates } => {
                format!("Browser not found ({})", candidates.join(" or "))
            }
            LaunchResult::SpawnFailed { program, reason } => {
                format!("Failed to start {}: {reason}", program.display())
            }
            LaunchResult::Exiting => "Exiting".to_string(),
        }
    }
}
