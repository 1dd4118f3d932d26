use std::path::{Path, PathBuf};

use mustang_core::{Action, LaunchResult, LaunchTarget};

use crate::domain::LaunchConfig;
use crate::listeners::OutcomeListener;
use crate::ports::{ExecutableLocator, ExitControl, FileProbe, ProcessSpawner};
use crate::quit::QuitLatch;

/// Turns button presses into detached processes.
///
/// Every failure comes back as a [`LaunchResult`] and is logged at `warn`;
/// nothing here ends the shell except [`Action::Quit`].
pub struct Dispatcher<P, L, S, E> {
    config: LaunchConfig,
    probe: P,
    locator: L,
    spawner: S,
    quit: QuitLatch<E>,
    listeners: Vec<Box<dyn OutcomeListener>>,
}

impl<P, L, S, E> Dispatcher<P, L, S, E>
where
    P: FileProbe,
    L: ExecutableLocator,
    S: ProcessSpawner,
    E: ExitControl,
{
    pub fn new(config: LaunchConfig, probe: P, locator: L, spawner: S, exit: E) -> Self {
        Self {
            config,
            probe,
            locator,
            spawner,
            quit: QuitLatch::new(exit),
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn subscribe(&mut self, listener: impl OutcomeListener) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&self, action: Action) -> LaunchResult {
        tracing::debug!(%action, "Dispatching");
        let result = match action {
            Action::OpenTuner => self.resolve_tool(self.config.tool_jar.as_std_path()),
            Action::OpenMusic => {
                self.launch_kiosk(&self.config.music_url, &self.config.browser_candidates)
            }
            Action::OpenNavigation => {
                self.launch_kiosk(&self.config.navigation_url, &self.config.browser_candidates)
            }
            Action::Quit => {
                self.quit();
                LaunchResult::Exiting
            }
        };

        for listener in &self.listeners {
            listener.on_outcome(action, &result);
        }
        result
    }

    /// Run the tuning tool through java if its bundle is on disk.
    pub fn resolve_tool(&self, tool_path: &Path) -> LaunchResult {
        if !self.probe.exists(tool_path) {
            tracing::warn!("Tuning tool not found at: {}", tool_path.display());
            return LaunchResult::ExecutableNotFound {
                path: tool_path.to_path_buf(),
            };
        }

        self.spawn(LaunchTarget::java_jar(&self.config.java, tool_path))
    }

    /// First candidate that resolves wins; the list order is the priority.
    pub fn resolve_browser_runner(&self, candidates: &[String]) -> Option<PathBuf> {
        candidates.iter().find_map(|name| {
            let found = self.locator.locate(name);
            if let Some(path) = &found {
                tracing::debug!(candidate = %name, path = %path.display(), "Browser runner resolved");
            }
            found
        })
    }

    pub fn launch_kiosk(&self, url: &str, candidates: &[String]) -> LaunchResult {
        let Some(runner) = self.resolve_browser_runner(candidates) else {
            tracing::warn!("Browser not found ({})", candidates.join(" or "));
            return LaunchResult::NoViableRunnerFound {
                candidates: candidates.to_vec(),
            };
        };

        self.spawn(LaunchTarget::kiosk(runner, url))
    }

    pub fn quit(&self) {
        if self.quit.request() {
            tracing::info!("Shell exit requested");
        }
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit.is_requested()
    }

    fn spawn(&self, target: LaunchTarget) -> LaunchResult {
        match self.spawner.spawn_detached(&target.program, &target.args) {
            Ok(pid) => {
                tracing::info!(pid, argv = ?target.argv(), "Process started");
                LaunchResult::Started {
                    program: target.program,
                    pid,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to start {}: {e:#}", target.program.display());
                LaunchResult::SpawnFailed {
                    program: target.program,
                    reason: e.to_string(),
                }
            }
        }
    }
}
