//! Step observation
//!
//! This module provides the `StepObserver` trait for following a scaffold run
//! and a `TracingObserver` implementation that logs using the `tracing` crate.

use crate::error::Error;
use std::fmt;
use tracing::{debug, error, info};

/// One stage of the scaffold pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `git clone <template> <name>`
    Clone,
    /// Remove the template's `.git`
    StripHistory,
    /// `git init`, `git add .`, `git commit`, `git branch -M`
    Reinitialize,
    /// Overwrite manifest `name` and `version`
    RewriteManifest,
    /// `<package manager> install`
    Install,
}

impl Step {
    /// All steps in execution order
    pub const ALL: [Step; 5] = [
        Step::Clone,
        Step::StripHistory,
        Step::Reinitialize,
        Step::RewriteManifest,
        Step::Install,
    ];

    /// Progress text shown while the step runs
    pub fn start_message(&self) -> &'static str {
        match self {
            Step::Clone => "Downloading template...",
            Step::StripHistory => "Cleaning git history...",
            Step::Reinitialize => "Initializing git repository...",
            Step::RewriteManifest => "Updating project manifest...",
            Step::Install => "Installing dependencies (this may take a few minutes)...",
        }
    }

    /// Text shown once the step has succeeded
    pub fn success_message(&self) -> &'static str {
        match self {
            Step::Clone => "Template downloaded",
            Step::StripHistory => "Git history cleaned",
            Step::Reinitialize => "Git repository initialized",
            Step::RewriteManifest => "Project manifest updated",
            Step::Install => "Dependencies installed",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Clone => "clone",
            Step::StripHistory => "strip-history",
            Step::Reinitialize => "reinitialize",
            Step::RewriteManifest => "rewrite-manifest",
            Step::Install => "install",
        };
        f.write_str(name)
    }
}

/// Observer trait for scaffold step events
///
/// Every step reports `on_step_start` followed by exactly one of
/// `on_step_success` or `on_step_failed`. A failed step is the last event of
/// a run.
pub trait StepObserver: Send + Sync {
    /// Called before a step begins
    fn on_step_start(&self, step: Step);

    /// Called after a step completed successfully
    fn on_step_success(&self, step: Step);

    /// Called when a step failed; the run stops afterwards
    fn on_step_failed(&self, step: Step, error: &Error);
}

/// A no-op observer that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl StepObserver for NoOpObserver {
    fn on_step_start(&self, _step: Step) {}

    fn on_step_success(&self, _step: Step) {}

    fn on_step_failed(&self, _step: Step, _error: &Error) {}
}

/// An observer that logs step events using the `tracing` crate
///
/// # Log Levels
///
/// - `on_step_start`: DEBUG
/// - `on_step_success`: INFO
/// - `on_step_failed`: ERROR
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_step_start(&self, step: Step) {
        debug!(step = %step, "{}", step.start_message());
    }

    fn on_step_success(&self, step: Step) {
        info!(step = %step, "{}", step.success_message());
    }

    fn on_step_failed(&self, step: Step, error: &Error) {
        match error.captured_output() {
            Some(output) => error!(step = %step, output = %output.trim_end(), "{}", error),
            None => error!(step = %step, "{}", error),
        }
    }
}
