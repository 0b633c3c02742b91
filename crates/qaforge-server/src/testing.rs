// ABOUTME: Test utilities for qaforge-server: a recording fake git runner and state builders.
// ABOUTME: Lets tests drive the full router against a temp directory without network or real git.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use qaforge_agent::InferenceClient;

use crate::app_state::{AppState, SharedState};
use crate::config::QaforgeConfig;
use crate::git::{GitError, GitRunner};

/// Default configuration rooted at `data_dir`, with a placeholder publish remote.
pub fn test_config(data_dir: &Path) -> QaforgeConfig {
    let data_dir = data_dir.to_string_lossy().into_owned();
    QaforgeConfig::from_lookup(|key| match key {
        "QAFORGE_DATA_DIR" => Some(data_dir.clone()),
        "QAFORGE_GIT_REMOTE_URL" => Some("https://example.com/qa-suite.git".to_string()),
        _ => None,
    })
    .expect("default test configuration is valid")
}

/// Shared state over `data_dir` with the given inference and git doubles.
pub fn test_state(data_dir: &Path, inference: Arc<dyn InferenceClient>, git: Arc<dyn GitRunner>) -> SharedState {
    let state = AppState::new(test_config(data_dir), inference, git).expect("test state builds");
    Arc::new(state)
}

/// A GitRunner that records every invocation and can fail on a chosen command.
#[derive(Debug, Default)]
pub struct FakeGit {
    calls: Mutex<Vec<(String, PathBuf)>>,
    fail_prefix: Option<String>,
}

impl FakeGit {
    /// A fake where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake that fails any command whose argument string starts with `prefix`.
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_prefix: Some(prefix.to_string()),
        }
    }

    /// Argument strings of every invocation, in order, including failed ones.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|c| c.iter().map(|(cmd, _)| cmd.clone()).collect())
            .unwrap_or_default()
    }

    /// Working directories of every invocation, in order.
    pub fn cwds(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .map(|c| c.iter().map(|(_, cwd)| cwd.clone()).collect())
            .unwrap_or_default()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError> {
        let joined = args.join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((joined.clone(), cwd.to_path_buf()));
        }

        match &self.fail_prefix {
            Some(prefix) if joined.starts_with(prefix.as_str()) => Err(GitError {
                command: format!("git {}", joined),
                details: "simulated failure".to_string(),
            }),
            _ => Ok(String::new()),
        }
    }
}
