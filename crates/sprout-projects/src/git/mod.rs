//! Git operations module
//!
//! This module provides the git steps of scaffolding:
//! - Cloning the template repository
//! - Stripping the template's history
//! - Reinitializing a fresh repository with a single commit
//!
//! All subprocesses go through a [`CommandRunner`](crate::process::CommandRunner).
//!
//! # Examples
//!
//! ```no_run
//! use sprout_projects::git::{clone_template, reinitialize_repository, strip_history};
//! use sprout_projects::process::ProcessRunner;
//! use sprout_core::types::GitWorkflowConfig;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cwd = Utf8Path::new("/tmp");
//! clone_template(&ProcessRunner, "https://github.com/user/template.git", "demo", cwd).await?;
//!
//! let target = cwd.join("demo");
//! strip_history(&target).await?;
//! reinitialize_repository(&ProcessRunner, &target, &GitWorkflowConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

mod clone;
mod init;

pub use clone::{clone_template, is_valid_repo_url};
pub use init::{reinitialize_repository, reinitialize_specs, strip_history};
