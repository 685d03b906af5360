//! History strip and repository reinitialization

use crate::error::Result;
use crate::process::{run_checked, CommandRunner, CommandSpec};
use camino::Utf8Path;
use sprout_core::types::GitWorkflowConfig;
use std::io::ErrorKind;
use tracing::{debug, info};

/// Remove the `.git` directory under `path`
///
/// Returns `true` when a directory was removed, `false` when there was none.
/// Any other filesystem error is returned.
pub async fn strip_history(path: &Utf8Path) -> Result<bool> {
    let git_dir = path.join(".git");
    debug!("Removing {}", git_dir);

    match tokio::fs::remove_dir_all(&git_dir).await {
        Ok(()) => {
            info!("Template history removed");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No .git directory at {}", path);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// The commands that turn `path` into a fresh single-commit repository, in order
pub fn reinitialize_specs(path: &Utf8Path, git_config: &GitWorkflowConfig) -> Vec<CommandSpec> {
    let git = |args: &[&str]| {
        CommandSpec::new("git")
            .args(args.iter().copied())
            .current_dir(path)
    };

    vec![
        git(&["init"]),
        git(&["add", "."]),
        git(&["commit", "-m", git_config.initial_commit_message.as_str()]),
        git(&["branch", "-M", git_config.default_branch.as_str()]),
    ]
}

/// Initialize a fresh repository in `path` with one commit on the default branch
///
/// Runs `git init`, `git add .`, `git commit -m <message>` and
/// `git branch -M <branch>` inside `path`; the first failure stops the sequence.
pub async fn reinitialize_repository(
    runner: &dyn CommandRunner,
    path: &Utf8Path,
    git_config: &GitWorkflowConfig,
) -> Result<()> {
    info!("Initializing git repository at: {}", path);

    for spec in reinitialize_specs(path, git_config) {
        run_checked(runner, &spec).await?;
    }

    info!(
        "Repository initialized on branch {}",
        git_config.default_branch
    );
    Ok(())
}
