pub mod dispatcher;
pub mod domain;
pub mod launcher;
pub mod listeners;
pub mod persistence;
pub mod ports;
pub mod quit;
pub mod viewmodel;

pub use dispatcher::Dispatcher;
pub use domain::{LaunchConfig, ShellSettings};
pub use launcher::NoEventLoop;
pub use listeners::{ChannelListener, DispatchOutcome, OutcomeListener};
pub use persistence::FilePersistence;
pub use ports::*;
pub use quit::QuitLatch;
pub use viewmodel::*;

pub use mustang_core::{Action, LaunchResult, LaunchTarget};
pub use mustang_infra::{DetachedSpawner, DiskProbe, SearchPath};

/// Dispatcher wired to the real filesystem, `PATH` and process table.
pub type SystemDispatcher<E> = Dispatcher<DiskProbe, SearchPath, DetachedSpawner, E>;

pub fn system_dispatcher<E: ExitControl>(config: LaunchConfig, exit: E) -> SystemDispatcher<E> {
    Dispatcher::new(
        config,
        DiskProbe,
        SearchPath::from_env(),
        DetachedSpawner::new(),
        exit,
    )
}
