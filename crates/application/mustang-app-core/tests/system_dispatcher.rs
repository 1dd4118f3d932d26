#![cfg(unix)]

mod common;

use common::{test_config, CountingExit, FakeProbe, RecordingSpawner};
use mustang_app_core::{Action, Dispatcher, LaunchResult, SearchPath};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn fake_browser(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"#!/bin/sh\nexit 0\n").expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

fn dispatcher_on(
    path: &Path,
    spawner: RecordingSpawner,
) -> Dispatcher<FakeProbe, SearchPath, RecordingSpawner, CountingExit> {
    Dispatcher::new(
        test_config(),
        FakeProbe::default(),
        SearchPath::with_paths(path),
        spawner,
        CountingExit::default(),
    )
}

#[test]
fn real_search_path_prefers_chromium_browser() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let preferred = fake_browser(dir.path(), "chromium-browser");
    fake_browser(dir.path(), "chromium");

    let spawner = RecordingSpawner::default();
    let dispatcher = dispatcher_on(dir.path(), spawner.clone());

    let result = dispatcher.dispatch(Action::OpenMusic);
    assert_eq!(
        result,
        LaunchResult::Started {
            program: preferred.clone(),
            pid: 1001
        }
    );
    assert_eq!(
        spawner.argvs(),
        vec![vec![
            preferred.to_string_lossy().into_owned(),
            "--kiosk".to_string(),
            "https://music.apple.com".to_string(),
        ]]
    );
}

#[test]
fn real_search_path_falls_back_to_chromium() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let fallback = fake_browser(dir.path(), "chromium");

    let dispatcher = dispatcher_on(dir.path(), RecordingSpawner::default());
    let runner = dispatcher.resolve_browser_runner(&dispatcher.config().browser_candidates);
    assert_eq!(runner, Some(fallback));
}

#[test]
fn empty_search_path_reports_no_runner() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let spawner = RecordingSpawner::default();
    let dispatcher = dispatcher_on(dir.path(), spawner.clone());

    let result = dispatcher.dispatch(Action::OpenNavigation);
    assert!(matches!(result, LaunchResult::NoViableRunnerFound { .. }));
    assert!(spawner.argvs().is_empty());
}
