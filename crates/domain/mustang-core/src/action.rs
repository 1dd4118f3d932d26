use serde::Serialize;

/// Everything a button on the head unit can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    OpenTuner,
    OpenMusic,
    OpenNavigation,
    Quit,
}

impl Action {
    /// Grid order: left-to-right, top-to-bottom.
    pub const ALL: [Action; 4] = [
        Action::OpenTuner,
        Action::OpenMusic,
        Action::OpenNavigation,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::OpenTuner => "Gauges",
            Action::OpenMusic => "Music",
            Action::OpenNavigation => "Navigation",
            Action::Quit => "Quit",
        }
    }

    /// Whether the action starts an external process.
    pub fn spawns_process(self) -> bool {
        !matches!(self, Action::Quit)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
