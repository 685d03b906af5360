//! Spinner-based step reporting

use indicatif::ProgressBar;
use sprout_projects::{Error, Step, StepObserver};
use std::sync::{Mutex, PoisonError};

use crate::output;

/// Shows a spinner while a step runs and a status line when it ends
///
/// On failure the captured command output is printed below the status line.
#[derive(Default)]
pub struct SpinnerObserver {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl StepObserver for SpinnerObserver {
    fn on_step_start(&self, step: Step) {
        let spinner = output::spinner(step.start_message());
        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(spinner);

        if let Some(previous) = previous {
            previous.finish_and_clear();
        }
    }

    fn on_step_success(&self, step: Step) {
        if let Some(spinner) = self.take_spinner() {
            spinner.finish_and_clear();
        }
        output::success(step.success_message());
    }

    fn on_step_failed(&self, step: Step, error: &Error) {
        if let Some(spinner) = self.take_spinner() {
            spinner.finish_and_clear();
        }

        output::error(&format!("Step '{}' failed: {}", step, error));
        if let Some(captured) = error.captured_output() {
            output::captured(captured);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_released_after_each_step() {
        let observer = SpinnerObserver::new();

        observer.on_step_start(Step::Clone);
        assert!(observer.current.lock().unwrap().is_some());

        observer.on_step_success(Step::Clone);
        assert!(observer.current.lock().unwrap().is_none());

        observer.on_step_start(Step::Install);
        observer.on_step_failed(
            Step::Install,
            &Error::command_failed("pnpm install", "ERR_PNPM_FETCH_404"),
        );
        assert!(observer.current.lock().unwrap().is_none());
    }
}
