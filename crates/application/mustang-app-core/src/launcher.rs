use mustang_infra::{DetachedSpawner, DiskProbe, SearchPath};
use std::path::{Path, PathBuf};

use crate::ports::{ExecutableLocator, ExitControl, FileProbe, ProcessSpawner};

impl FileProbe for DiskProbe {
    fn exists(&self, path: &Path) -> bool {
        DiskProbe::exists(self, path)
    }
}

impl ExecutableLocator for SearchPath {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        SearchPath::locate(self, name)
    }
}

impl ProcessSpawner for DetachedSpawner {
    fn spawn_detached(&self, program: &Path, args: &[String]) -> anyhow::Result<u32> {
        let spawned = self.spawn(program, args)?;
        Ok(spawned.pid)
    }
}

/// Exit control for front ends without an event loop to stop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEventLoop;

impl ExitControl for NoEventLoop {
    fn request_exit(&self) {
        tracing::debug!("Exit requested with no event loop attached");
    }
}
