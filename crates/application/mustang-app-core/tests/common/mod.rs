#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mustang_app_core::{
    Dispatcher, ExecutableLocator, ExitControl, FileProbe, LaunchConfig, ProcessSpawner,
};

#[derive(Default, Clone)]
pub struct FakeProbe {
    existing: HashSet<PathBuf>,
}

impl FakeProbe {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            existing: paths.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FileProbe for FakeProbe {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }
}

#[derive(Default, Clone)]
pub struct FakeLocator {
    known: HashMap<String, PathBuf>,
    pub probed: Arc<Mutex<Vec<String>>>,
}

impl FakeLocator {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            known: entries
                .iter()
                .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
                .collect(),
            probed: Arc::default(),
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl ExecutableLocator for FakeLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.probed.lock().unwrap().push(name.to_string());
        self.known.get(name).cloned()
    }
}

#[derive(Default, Clone)]
pub struct RecordingSpawner {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
    fail_with: Option<String>,
}

impl RecordingSpawner {
    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn argvs(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn_detached(&self, program: &Path, args: &[String]) -> anyhow::Result<u32> {
        let mut argv = vec![program.to_string_lossy().into_owned()];
        argv.extend(args.iter().cloned());
        let mut calls = self.calls.lock().unwrap();
        calls.push(argv);

        match &self.fail_with {
            Some(reason) => Err(anyhow::anyhow!(reason.clone())),
            None => Ok(1000 + calls.len() as u32),
        }
    }
}

#[derive(Default, Clone)]
pub struct CountingExit {
    pub count: Arc<AtomicUsize>,
}

impl CountingExit {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl ExitControl for CountingExit {
    fn request_exit(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub const TOOL_JAR: &str = "/home/pi/TunerStudio/TunerStudioMS.jar";

pub fn test_config() -> LaunchConfig {
    LaunchConfig {
        tool_jar: TOOL_JAR.into(),
        java: "java".to_string(),
        music_url: "https://music.apple.com".to_string(),
        navigation_url: "https://www.google.com/maps".to_string(),
        browser_candidates: vec!["chromium-browser".to_string(), "chromium".to_string()],
    }
}

pub type FakeDispatcher = Dispatcher<FakeProbe, FakeLocator, RecordingSpawner, CountingExit>;

pub struct Harness {
    pub dispatcher: FakeDispatcher,
    pub locator: FakeLocator,
    pub spawner: RecordingSpawner,
    pub exit: CountingExit,
}

pub fn harness(probe: FakeProbe, locator: FakeLocator, spawner: RecordingSpawner) -> Harness {
    let exit = CountingExit::default();
    let dispatcher = Dispatcher::new(
        test_config(),
        probe,
        locator.clone(),
        spawner.clone(),
        exit.clone(),
    );
    Harness {
        dispatcher,
        locator,
        spawner,
        exit,
    }
}
