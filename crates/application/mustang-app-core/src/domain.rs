use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

fn default_tool_jar() -> Utf8PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.home_dir().to_path_buf()).ok())
        .map(|home| home.join(mustang_config::DEFAULT_TOOL_JAR))
        .unwrap_or_else(|| Utf8PathBuf::from(mustang_config::DEFAULT_TOOL_JAR))
}

/// Where each button sends the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub tool_jar: Utf8PathBuf,
    pub java: String,
    pub music_url: String,
    pub navigation_url: String,
    /// Priority order, first hit on the search path wins.
    pub browser_candidates: Vec<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            tool_jar: default_tool_jar(),
            java: mustang_config::DEFAULT_JAVA.to_string(),
            music_url: mustang_config::DEFAULT_MUSIC_URL.to_string(),
            navigation_url: mustang_config::DEFAULT_NAVIGATION_URL.to_string(),
            browser_candidates: mustang_config::DEFAULT_BROWSER_CANDIDATES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub launch: LaunchConfig,
    pub fullscreen: bool,
    pub clock_format: String,
    pub status_ttl_secs: u64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            launch: LaunchConfig::default(),
            fullscreen: true,
            clock_format: mustang_config::DEFAULT_CLOCK_FORMAT.to_string(),
            status_ttl_secs: mustang_config::DEFAULT_STATUS_TTL_SECS,
        }
    }
}

impl ShellSettings {
    pub fn normalized(mut self) -> Self {
        self.status_ttl_secs = mustang_config::clamp_status_ttl(self.status_ttl_secs);
        if self.clock_format.trim().is_empty() {
            self.clock_format = mustang_config::DEFAULT_CLOCK_FORMAT.to_string();
        }
        self
    }

    pub fn status_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.status_ttl_secs)
    }
}
