//! Central configuration constants for launch targets and shell defaults.

/// Tuning tool location, relative to the user's home directory.
pub const DEFAULT_TOOL_JAR: &str = "TunerStudio/TunerStudioMS.jar";

/// Java launcher used to start the tuning tool.
pub const DEFAULT_JAVA: &str = "java";

pub const DEFAULT_MUSIC_URL: &str = "https://music.apple.com";

pub const DEFAULT_NAVIGATION_URL: &str = "https://www.google.com/maps";

/// Browser commands tried in order; the first one on `PATH` wins.
pub const DEFAULT_BROWSER_CANDIDATES: &[&str] = &["chromium-browser", "chromium"];

/// chrono format string for the status bar clock.
pub const DEFAULT_CLOCK_FORMAT: &str = "%H:%M";

/// How long a dispatch outcome stays on the status bar.
pub const DEFAULT_STATUS_TTL_SECS: u64 = 6;

/// Minimum and maximum allowed status TTL.
pub const MIN_STATUS_TTL_SECS: u64 = 1;
pub const MAX_STATUS_TTL_SECS: u64 = 60;

/// Clock refresh interval in milliseconds.
pub const CLOCK_TICK_MS: u64 = 1000;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "MUSTANG_CONFIG";

/// Convenience function to clamp a TTL value into allowed range.
pub fn clamp_status_ttl(v: u64) -> u64 {
    v.clamp(MIN_STATUS_TTL_SECS, MAX_STATUS_TTL_SECS)
}
