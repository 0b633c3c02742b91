// ABOUTME: Publishes the script file to a git remote as an ordered, short-circuiting list of steps.
// ABOUTME: init (if needed) → reset origin → checkout -B → add → commit → pull --rebase → push -u.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::PublishConfig;
use crate::git::GitRunner;

/// One stage of the publish sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStep {
    Init,
    RemoveRemote,
    AddRemote,
    Checkout,
    Stage,
    Commit,
    Pull,
    Push,
}

impl PublishStep {
    pub fn name(&self) -> &'static str {
        match self {
            PublishStep::Init => "init",
            PublishStep::RemoveRemote => "remove remote",
            PublishStep::AddRemote => "add remote",
            PublishStep::Checkout => "checkout",
            PublishStep::Stage => "stage",
            PublishStep::Commit => "commit",
            PublishStep::Pull => "pull",
            PublishStep::Push => "push",
        }
    }
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that abort a publish.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    #[error("no git remote configured; set QAFORGE_GIT_REMOTE_URL")]
    NoRemote,

    #[error("{step} step failed running `{command}`: {details}")]
    StepFailed {
        step: PublishStep,
        command: String,
        details: String,
    },

    #[error("publish task did not complete: {0}")]
    Aborted(String),
}

impl PublishError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PublishError::StepFailed { .. } => StatusCode::BAD_GATEWAY,
            PublishError::NoRemote | PublishError::Aborted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The failing step, when a git command caused the failure.
    pub fn step(&self) -> Option<PublishStep> {
        match self {
            PublishError::StepFailed { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// A git invocation within the publish plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub step: PublishStep,
    pub args: Vec<String>,
    /// When false a failure is logged and the sequence continues.
    pub fatal: bool,
}

/// What a successful publish did.
#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    pub remote_url: String,
    pub branch: String,
    pub steps: Vec<PublishStep>,
}

/// Commits and pushes the script file from the script directory.
#[derive(Clone)]
pub struct Publisher {
    git: Arc<dyn GitRunner>,
    config: PublishConfig,
    repo_dir: PathBuf,
    script_file: String,
}

impl Publisher {
    pub fn new(git: Arc<dyn GitRunner>, config: PublishConfig, repo_dir: PathBuf, script_file: String) -> Self {
        Self {
            git,
            config,
            repo_dir,
            script_file,
        }
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    fn has_repository(&self) -> bool {
        self.repo_dir.join(".git").exists()
    }

    /// The ordered git invocations a publish would run against `remote_url`.
    pub fn plan(&self, remote_url: &str, has_repository: bool) -> Vec<PlannedStep> {
        let remote = self.config.remote_name.as_str();
        let branch = self.config.branch.as_str();
        let step = |step: PublishStep, args: &[&str], fatal: bool| PlannedStep {
            step,
            args: args.iter().map(|a| a.to_string()).collect(),
            fatal,
        };

        let mut plan = Vec::with_capacity(8);
        if !has_repository {
            plan.push(step(PublishStep::Init, &["init"], true));
        }
        plan.push(step(PublishStep::RemoveRemote, &["remote", "remove", remote], false));
        plan.push(step(PublishStep::AddRemote, &["remote", "add", remote, remote_url], true));
        plan.push(step(PublishStep::Checkout, &["checkout", "-B", branch], true));
        plan.push(step(PublishStep::Stage, &["add", &self.script_file], true));
        plan.push(step(PublishStep::Commit, &["commit", "-m", &self.config.commit_message], true));
        plan.push(step(PublishStep::Pull, &["pull", "--rebase", remote, branch], true));
        plan.push(step(PublishStep::Push, &["push", "-u", remote, branch], true));
        plan
    }

    /// Run the publish sequence, stopping at the first fatal failure.
    ///
    /// `checkout -B` force-resets the branch to the current HEAD, so local
    /// branch history that diverged from it is dropped.
    pub fn publish(&self) -> Result<PublishReport, PublishError> {
        let remote_url = self.config.remote_url.clone().ok_or(PublishError::NoRemote)?;
        let plan = self.plan(&remote_url, self.has_repository());
        let mut completed = Vec::with_capacity(plan.len());

        for planned in &plan {
            let args: Vec<&str> = planned.args.iter().map(String::as_str).collect();
            match self.git.run(&args, &self.repo_dir) {
                Ok(_) => {
                    tracing::info!(step = %planned.step, "publish step finished");
                    completed.push(planned.step);
                }
                Err(e) if !planned.fatal => {
                    tracing::debug!(step = %planned.step, error = %e, "ignoring non-fatal publish step failure");
                }
                Err(e) => {
                    tracing::error!(step = %planned.step, error = %e, "publish aborted");
                    return Err(PublishError::StepFailed {
                        step: planned.step,
                        command: e.command,
                        details: e.details,
                    });
                }
            }
        }

        tracing::info!(remote = %remote_url, branch = %self.config.branch, "published script");
        Ok(PublishReport {
            remote_url,
            branch: self.config.branch.clone(),
            steps: completed,
        })
    }

    /// Run `publish` on the blocking pool so slow git calls do not stall other requests.
    pub async fn publish_detached(&self) -> Result<PublishReport, PublishError> {
        let publisher = self.clone();
        tokio::task::spawn_blocking(move || publisher.publish())
            .await
            .map_err(|e| PublishError::Aborted(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGit;
    use std::fs;
    use tempfile::TempDir;

    fn config(remote_url: Option<&str>) -> PublishConfig {
        PublishConfig {
            remote_name: "origin".to_string(),
            remote_url: remote_url.map(String::from),
            branch: "main".to_string(),
            commit_message: "Update test suite".to_string(),
        }
    }

    fn publisher(git: Arc<FakeGit>, dir: &TempDir, remote_url: Option<&str>) -> Publisher {
        Publisher::new(
            git,
            config(remote_url),
            dir.path().to_path_buf(),
            "test_suite.py".to_string(),
        )
    }

    #[test]
    fn fresh_directory_runs_full_sequence_in_order() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::new());
        let report = publisher(Arc::clone(&git), &dir, Some("https://example.com/qa.git"))
            .publish()
            .unwrap();

        assert_eq!(
            git.commands(),
            vec![
                "init",
                "remote remove origin",
                "remote add origin https://example.com/qa.git",
                "checkout -B main",
                "add test_suite.py",
                "commit -m Update test suite",
                "pull --rebase origin main",
                "push -u origin main",
            ]
        );
        assert_eq!(report.branch, "main");
        assert_eq!(report.remote_url, "https://example.com/qa.git");
        assert_eq!(report.steps.first(), Some(&PublishStep::Init));
        assert_eq!(report.steps.last(), Some(&PublishStep::Push));
        assert!(git.cwds().iter().all(|c| c == dir.path()));
    }

    #[test]
    fn existing_repository_skips_init() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let git = Arc::new(FakeGit::new());

        publisher(Arc::clone(&git), &dir, Some("u")).publish().unwrap();

        assert_eq!(git.commands()[0], "remote remove origin");
        assert!(!git.commands().iter().any(|c| c == "init"));
    }

    #[test]
    fn remote_removal_failure_is_ignored() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::failing_on("remote remove"));

        let report = publisher(Arc::clone(&git), &dir, Some("u")).publish().unwrap();

        assert!(!report.steps.contains(&PublishStep::RemoveRemote));
        assert_eq!(git.commands().last().map(String::as_str), Some("push -u origin main"));
    }

    #[test]
    fn commit_failure_aborts_before_pull_and_push() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::failing_on("commit"));

        let err = publisher(Arc::clone(&git), &dir, Some("u")).publish().unwrap_err();

        match err {
            PublishError::StepFailed { step, command, details } => {
                assert_eq!(step, PublishStep::Commit);
                assert_eq!(command, "git commit -m Update test suite");
                assert!(details.contains("simulated failure"));
            }
            other => panic!("expected StepFailed, got {:?}", other),
        }
        let commands = git.commands();
        assert_eq!(commands.last().map(String::as_str), Some("commit -m Update test suite"));
        assert!(!commands.iter().any(|c| c.starts_with("pull") || c.starts_with("push")));
    }

    #[test]
    fn add_remote_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::failing_on("remote add"));

        let err = publisher(Arc::clone(&git), &dir, Some("u")).publish().unwrap_err();

        assert!(matches!(err, PublishError::StepFailed { step: PublishStep::AddRemote, .. }));
        assert!(!git.commands().iter().any(|c| c.starts_with("checkout")));
    }

    #[test]
    fn missing_remote_runs_nothing() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::new());

        let err = publisher(Arc::clone(&git), &dir, None).publish().unwrap_err();

        assert!(matches!(err, PublishError::NoRemote));
        assert!(git.commands().is_empty());
    }

    #[tokio::test]
    async fn detached_publish_reports_failure() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::failing_on("push"));

        let err = publisher(git, &dir, Some("u")).publish_detached().await.unwrap_err();

        assert_eq!(err.step(), Some(PublishStep::Push));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn plan_stages_only_the_script_file() {
        let dir = TempDir::new().unwrap();
        let p = publisher(Arc::new(FakeGit::new()), &dir, Some("u"));

        let plan = p.plan("u", true);
        let stage = plan.iter().find(|s| s.step == PublishStep::Stage).unwrap();

        assert_eq!(stage.args, vec!["add", "test_suite.py"]);
        assert!(plan.iter().filter(|s| !s.fatal).all(|s| s.step == PublishStep::RemoveRemote));
    }
}
