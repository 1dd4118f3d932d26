use std::path::{Path, PathBuf};

pub const KIOSK_FLAG: &str = "--kiosk";

/// A fully resolved invocation: what to run and with which arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub url: Option<String>,
}

impl LaunchTarget {
    /// `<java> -jar <jar>`
    pub fn java_jar(java: impl Into<PathBuf>, jar: &Path) -> Self {
        Self {
            program: java.into(),
            args: vec!["-jar".to_string(), jar.to_string_lossy().into_owned()],
            url: None,
        }
    }

    /// `<runner> --kiosk <url>`
    pub fn kiosk(runner: impl Into<PathBuf>, url: &str) -> Self {
        Self {
            program: runner.into(),
            args: vec![KIOSK_FLAG.to_string(), url.to_string()],
            url: Some(url.to_string()),
        }
    }

    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }
}
