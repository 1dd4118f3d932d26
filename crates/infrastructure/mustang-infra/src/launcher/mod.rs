use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;
use thiserror::Error;

pub mod platform;
pub mod search_path;

pub use search_path::SearchPath;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Launch command has no program")]
    EmptyCommand,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A child that was started; its exit status is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedProcess {
    pub pid: u32,
}

/// Starts programs with no stdio attached and never blocks on them.
///
/// Children that have already exited are reaped with `try_wait` before the
/// next spawn, so finished launches do not linger as zombies.
#[derive(Debug, Default)]
pub struct DetachedSpawner {
    children: Mutex<Vec<Child>>,
}

impl DetachedSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&self, program: &Path, args: &[String]) -> Result<SpawnedProcess, LaunchError> {
        if program.as_os_str().is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        let mut children = self.children.lock().unwrap_or_else(|e| e.into_inner());
        reap_exited(&mut children);

        tracing::info!(program = %program.display(), ?args, "Launching detached process");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        platform::detach(&mut cmd);

        let child = cmd.spawn()?;
        let pid = child.id();
        children.push(child);
        Ok(SpawnedProcess { pid })
    }

    /// Children started by this spawner that have not been reaped yet.
    pub fn unreaped(&self) -> usize {
        let mut children = self.children.lock().unwrap_or_else(|e| e.into_inner());
        reap_exited(&mut children);
        children.len()
    }
}

fn reap_exited(children: &mut Vec<Child>) {
    children.retain_mut(|child| match child.try_wait() {
        Ok(Some(status)) => {
            tracing::debug!(pid = child.id(), %status, "Reaped launched process");
            false
        }
        Ok(None) => true,
        Err(e) => {
            tracing::debug!(pid = child.id(), "Cannot poll launched process: {e}");
            false
        }
    });
}

/// Existence check for configured executables and bundles.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskProbe;

impl DiskProbe {
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
