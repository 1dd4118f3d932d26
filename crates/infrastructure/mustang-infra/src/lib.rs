pub mod launcher;

// Re-exports for convenience
pub use launcher::{DetachedSpawner, DiskProbe, LaunchError, SearchPath, SpawnedProcess};
