pub mod commands;

use clap::ValueEnum;
use mustang_app_core::Action;

/// Actions that make sense without a window; quitting is GUI-only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliAction {
    Gauges,
    Music,
    Navigation,
}

impl From<CliAction> for Action {
    fn from(value: CliAction) -> Self {
        match value {
            CliAction::Gauges => Action::OpenTuner,
            CliAction::Music => Action::OpenMusic,
            CliAction::Navigation => Action::OpenNavigation,
        }
    }
}
