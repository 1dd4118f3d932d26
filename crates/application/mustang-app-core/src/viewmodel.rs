use chrono::{DateTime, TimeZone};
use mustang_core::Action;
use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::listeners::DispatchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileVariant {
    Launch,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTileVm {
    pub action: Action,
    pub label: &'static str,
    pub variant: TileVariant,
}

/// Buttons in grid order, `columns` per row.
pub fn action_grid(columns: usize) -> Vec<Vec<ActionTileVm>> {
    let tiles: Vec<ActionTileVm> = Action::ALL
        .iter()
        .map(|&action| ActionTileVm {
            action,
            label: action.label(),
            variant: if action.spawns_process() {
                TileVariant::Launch
            } else {
                TileVariant::Exit
            },
        })
        .collect();

    tiles
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

/// Last dispatch outcome, shown until it goes stale.
#[derive(Debug, Clone)]
pub struct StatusLine {
    ttl: Duration,
    current: Option<(StatusMessage, Instant)>,
}

impl StatusLine {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn post(&mut self, outcome: &DispatchOutcome, now: Instant) {
        let tone = if outcome.result.is_success() {
            StatusTone::Info
        } else {
            StatusTone::Error
        };
        let message = StatusMessage {
            text: format!("{}: {}", outcome.action.label(), outcome.result.status_line()),
            tone,
        };
        self.current = Some((message, now));
    }

    pub fn visible(&self, now: Instant) -> Option<&StatusMessage> {
        self.current
            .as_ref()
            .filter(|(_, posted)| now.saturating_duration_since(*posted) < self.ttl)
            .map(|(message, _)| message)
    }

    /// Time until the visible message expires, for scheduling a repaint.
    pub fn expires_in(&self, now: Instant) -> Option<Duration> {
        self.visible(now)?;
        self.current
            .as_ref()
            .map(|(_, posted)| (*posted + self.ttl).saturating_duration_since(now))
    }
}

/// Formats `time` for the status bar, falling back to the default format
/// when `format` cannot be rendered.
pub fn clock_label<Tz>(time: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    // Some specifiers parse but refuse to format (`%#z`), so only the
    // formatter's own result is trusted; `to_string()` would panic.
    let mut label = String::new();
    if write!(label, "{}", time.format(format)).is_ok() {
        return label;
    }

    tracing::debug!(format, "Clock format not renderable, using default");
    label.clear();
    if write!(label, "{}", time.format(mustang_config::DEFAULT_CLOCK_FORMAT)).is_err() {
        label.clear();
    }
    label
}

/// Refresh schedule for the clock label.
#[derive(Debug, Clone)]
pub struct ClockTicker {
    interval: Duration,
    next: Instant,
}

impl ClockTicker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now,
        }
    }

    /// True when the label is due for a refresh; schedules the next one.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use mustang_core::LaunchResult;
    use std::path::PathBuf;

    fn failed_tuner() -> DispatchOutcome {
        DispatchOutcome {
            action: Action::OpenTuner,
            result: LaunchResult::ExecutableNotFound {
                path: PathBuf::from("/home/pi/TunerStudio/TunerStudioMS.jar"),
            },
        }
    }

    #[test]
    fn grid_is_two_by_two_with_quit_last() {
        let grid = action_grid(2);
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.len() == 2));
        assert_eq!(grid[0][0].label, "Gauges");
        assert_eq!(grid[1][1].action, Action::Quit);
        assert_eq!(grid[1][1].variant, TileVariant::Exit);
    }

    #[test]
    fn status_expires_after_ttl() {
        let start = Instant::now();
        let mut status = StatusLine::new(Duration::from_secs(5));
        assert!(status.visible(start).is_none());

        status.post(&failed_tuner(), start);
        let shown = status.visible(start).expect("fresh message is visible");
        assert_eq!(shown.tone, StatusTone::Error);
        assert!(shown.text.starts_with("Gauges: Not found"));
        assert_eq!(status.expires_in(start), Some(Duration::from_secs(5)));

        let later = start + Duration::from_secs(5);
        assert!(status.visible(later).is_none());
        assert_eq!(status.expires_in(later), None);
    }

    #[test]
    fn clock_uses_format_or_falls_back() {
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(7, 5, 9))
            .map(|t| Utc.from_utc_datetime(&t))
            .expect("valid timestamp");

        assert_eq!(clock_label(&time, "%H:%M:%S"), "07:05:09");
        assert_eq!(clock_label(&time, "%Q"), "07:05");
        // Parses as a specifier but fails when rendered.
        assert_eq!(clock_label(&time, "%H:%M %#z"), "07:05");
        assert_eq!(clock_label(&chrono::Local::now(), "%#z").len(), 5);
    }

    #[test]
    fn ticker_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = ClockTicker::new(Duration::from_secs(1), start);

        assert!(ticker.tick(start));
        assert!(!ticker.tick(start + Duration::from_millis(500)));
        assert_eq!(
            ticker.remaining(start + Duration::from_millis(500)),
            Duration::from_millis(500)
        );
        assert!(ticker.tick(start + Duration::from_secs(1)));
    }
}
