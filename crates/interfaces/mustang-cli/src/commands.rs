use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use mustang_app_core::{
    Action, DetachedSpawner, DiskProbe, DispatchOutcome, Dispatcher, FilePersistence, LaunchConfig,
    NoEventLoop, SearchPath, ShellSettings,
};

use crate::CliAction;

fn dispatcher(
    config: &LaunchConfig,
    search: SearchPath,
) -> Dispatcher<DiskProbe, SearchPath, DetachedSpawner, NoEventLoop> {
    Dispatcher::new(
        config.clone(),
        DiskProbe,
        search,
        DetachedSpawner::new(),
        NoEventLoop,
    )
}

/// Dispatch one action the way its button would.
pub fn cmd_run(config: &LaunchConfig, search: SearchPath, action: CliAction) -> DispatchOutcome {
    let action: Action = action.into();
    let result = dispatcher(config, search).dispatch(action);
    DispatchOutcome { action, result }
}

/// Status line for humans, or the tagged outcome as JSON for scripts.
pub fn render_outcome(outcome: &DispatchOutcome, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(outcome).context("Failed to render outcome");
    }
    Ok(outcome.result.status_line())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub tool_jar: PathBuf,
    pub tool_present: bool,
    pub candidates: Vec<String>,
    pub browser: Option<PathBuf>,
}

impl DoctorReport {
    pub fn healthy(&self) -> bool {
        self.tool_present && self.browser.is_some()
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tool = if self.tool_present { "OK" } else { "MISSING" };
        writeln!(f, "tool jar   [{tool}] {}", self.tool_jar.display())?;
        match &self.browser {
            Some(path) => write!(f, "browser    [OK] {}", path.display()),
            None => write!(
                f,
                "browser    [MISSING] none of: {}",
                self.candidates.join(", ")
            ),
        }
    }
}

pub fn cmd_doctor(config: &LaunchConfig, search: SearchPath) -> DoctorReport {
    let tool_jar = config.tool_jar.as_std_path().to_path_buf();
    let tool_present = DiskProbe.exists(&tool_jar);
    let browser = dispatcher(config, search).resolve_browser_runner(&config.browser_candidates);

    DoctorReport {
        tool_jar,
        tool_present,
        candidates: config.browser_candidates.clone(),
        browser,
    }
}

pub fn cmd_config_show(settings: &ShellSettings) -> Result<String> {
    serde_json::to_string_pretty(settings).context("Failed to render settings")
}

pub fn cmd_config_init(store: &FilePersistence, force: bool) -> Result<PathBuf> {
    let path = store.settings_path()?;
    if path.exists() && !force {
        bail!(
            "Settings already exist at {} (use --force to overwrite)",
            path.display()
        );
    }
    store.save_settings(&ShellSettings::default())?;
    Ok(path)
}
