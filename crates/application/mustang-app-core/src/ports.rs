use std::path::{Path, PathBuf};

pub trait FileProbe: Send + Sync + 'static {
    fn exists(&self, path: &Path) -> bool;
}

pub trait ExecutableLocator: Send + Sync + 'static {
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

pub trait ProcessSpawner: Send + Sync + 'static {
    /// Start `program` with `args` and return its pid without waiting on it.
    fn spawn_detached(&self, program: &Path, args: &[String]) -> anyhow::Result<u32>;
}

pub trait ExitControl: Send + Sync + 'static {
    fn request_exit(&self);
}
