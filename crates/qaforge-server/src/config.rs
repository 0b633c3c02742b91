// ABOUTME: Configuration loading and validation for the qaforge server.
// ABOUTME: Reads QAFORGE_* environment variables into an explicit struct handed to each component.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("QAFORGE_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("QAFORGE_INFERENCE_TIMEOUT_SECS must be a positive whole number of seconds: {0}")]
    InvalidTimeout(String),

    #[error("QAFORGE_SCRIPT_FILE must be a plain file name: {0}")]
    InvalidScriptFile(String),
}

/// Where and how the script is published.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub remote_name: String,
    pub remote_url: Option<String>,
    pub branch: String,
    pub commit_message: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct QaforgeConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub scenario_file: PathBuf,
    pub script_dir: PathBuf,
    pub script_file: String,
    pub inference_url: String,
    pub model: String,
    pub inference_timeout: Duration,
    pub target_app: String,
    pub publish: PublishConfig,
}

impl QaforgeConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - QAFORGE_BIND: socket address to bind (default: 127.0.0.1:5000)
    /// - QAFORGE_DATA_DIR: base directory for relative paths (default: .)
    /// - QAFORGE_SCENARIO_FILE: scenario CSV (default: test_scenarios.csv)
    /// - QAFORGE_SCRIPT_DIR: script and publish directory (default: test_scripts)
    /// - QAFORGE_SCRIPT_FILE: script file name (default: test_suite.py)
    /// - QAFORGE_INFERENCE_URL: generate endpoint (default: http://localhost:11434/api/generate)
    /// - QAFORGE_MODEL: model identifier (default: codegemma:latest)
    /// - QAFORGE_INFERENCE_TIMEOUT_SECS: request timeout (default: 300)
    /// - QAFORGE_TARGET_APP: application named in prompts
    /// - QAFORGE_GIT_REMOTE_URL: publish remote (optional)
    /// - QAFORGE_GIT_BRANCH: publish branch (default: main)
    /// - QAFORGE_COMMIT_MESSAGE: publish commit message (default: Update test suite)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_str = var("QAFORGE_BIND").unwrap_or_else(|| "127.0.0.1:5000".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let data_dir = var("QAFORGE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let scenario_file =
            data_dir.join(var("QAFORGE_SCENARIO_FILE").unwrap_or_else(|| "test_scenarios.csv".to_string()));
        let script_dir = data_dir.join(var("QAFORGE_SCRIPT_DIR").unwrap_or_else(|| "test_scripts".to_string()));

        let script_file = var("QAFORGE_SCRIPT_FILE").unwrap_or_else(|| "test_suite.py".to_string());
        if script_file.contains(['/', '\\']) || script_file == "." || script_file == ".." {
            return Err(ConfigError::InvalidScriptFile(script_file));
        }

        let inference_url = var("QAFORGE_INFERENCE_URL")
            .unwrap_or_else(|| "http://localhost:11434/api/generate".to_string());
        let model = var("QAFORGE_MODEL").unwrap_or_else(|| "codegemma:latest".to_string());

        let timeout_secs = match var("QAFORGE_INFERENCE_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => 300,
        };

        let target_app =
            var("QAFORGE_TARGET_APP").unwrap_or_else(|| "Spotify Windows Desktop application".to_string());

        let publish = PublishConfig {
            remote_name: "origin".to_string(),
            remote_url: var("QAFORGE_GIT_REMOTE_URL"),
            branch: var("QAFORGE_GIT_BRANCH").unwrap_or_else(|| "main".to_string()),
            commit_message: var("QAFORGE_COMMIT_MESSAGE").unwrap_or_else(|| "Update test suite".to_string()),
        };

        Ok(Self {
            bind,
            data_dir,
            scenario_file,
            script_dir,
            script_file,
            inference_url,
            model,
            inference_timeout: Duration::from_secs(timeout_secs),
            target_app,
            publish,
        })
    }

    /// Full path of the script document.
    pub fn script_path(&self) -> PathBuf {
        self.script_dir.join(&self.script_file)
    }

    /// Re-root relative scenario and script paths under a new data directory.
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        if let Ok(rel) = self.scenario_file.strip_prefix(&self.data_dir) {
            self.scenario_file = data_dir.join(rel);
        }
        if let Ok(rel) = self.script_dir.strip_prefix(&self.data_dir) {
            self.script_dir = data_dir.join(rel);
        }
        self.data_dir = data_dir;
        self
    }
}
