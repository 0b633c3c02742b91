// ABOUTME: Seam for running git subcommands, with a std::process implementation.
// ABOUTME: Each invocation is synchronous; a non-zero exit becomes a GitError carrying git's output.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// A failed git invocation.
#[derive(Debug, Clone, Error)]
#[error("`{command}` failed: {details}")]
pub struct GitError {
    pub command: String,
    pub details: String,
}

/// Runs git with a working directory. Returns trimmed stdout on success.
pub trait GitRunner: Send + Sync {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError>;
}

/// Runs the `git` binary found on PATH.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: String,
}

impl GitCommand {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a specific git executable instead of the one on PATH.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for GitCommand {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, cwd = %cwd.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| GitError {
                command: command.clone(),
                details: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let details = match (stderr.is_empty(), stdout.is_empty()) {
            (false, false) => format!("{}\n{}", stderr, stdout),
            (false, true) => stderr,
            (true, false) => stdout,
            (true, true) => format!("exited with {}", output.status),
        };

        Err(GitError { command, details })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_program_is_reported() {
        let dir = TempDir::new().unwrap();
        let git = GitCommand::with_program("qaforge-no-such-git-binary");

        let err = git.run(&["status"], dir.path()).unwrap_err();

        assert_eq!(err.command, "git status");
        assert!(!err.details.is_empty());
    }

    #[test]
    fn error_display_names_command() {
        let err = GitError {
            command: "git push -u origin main".to_string(),
            details: "rejected".to_string(),
        };
        assert_eq!(err.to_string(), "`git push -u origin main` failed: rejected");
    }
}
