//! `sprout new` command handler

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use dialoguer::Input;
use sprout_core::ConfigOverrides;
use sprout_projects::process::ProcessRunner;
use sprout_projects::{validate_project_name, Error, ScaffoldRequest, Scaffolder};

use super::{load_config, Reported};
use crate::cli::NewArgs;
use crate::output;
use crate::progress::SpinnerObserver;

/// Create a new project from the template
pub async fn run(args: NewArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    output::header("🚀  Sprout");

    let overrides = ConfigOverrides {
        template_url: args.template,
        package_manager: args.package_manager,
    };
    let config = load_config(config_path, &overrides)?;

    let name = match preset_name(args.name, args.yes, &config.default_project_name) {
        Some(name) => name,
        None => prompt_project_name(&config.default_project_name)?,
    };
    let request = ScaffoldRequest::new(name)?;

    let cwd = current_dir()?;
    let observer = SpinnerObserver::new();
    let scaffolder = Scaffolder::new(&config, &ProcessRunner).with_observer(&observer);

    match scaffolder.run(&request, &cwd).await {
        Ok(outcome) => {
            println!();
            output::success(&format!(
                "✨  Project {} created successfully!",
                outcome.project_name
            ));
            println!();
            for step in &outcome.next_steps {
                output::hint(step);
            }
            println!();
            Ok(())
        }
        Err(err) => Err(report_failure(err, &request.target_path(&cwd))),
    }
}

/// What is left to print after a failed run
#[derive(Debug, PartialEq, Eq)]
enum FailureNotice {
    /// The target existed before the run
    Exists(String),
    /// A step failed and the observer already printed it; carries a warning
    /// when the target directory was left behind
    StepFailed(Option<String>),
    /// Nothing printed yet
    Unreported,
}

fn failure_notice(err: &Error, target: &Utf8Path) -> FailureNotice {
    match err {
        Error::ProjectExists { name, .. } => {
            FailureNotice::Exists(format!("Directory {} already exists, please retry.", name))
        }
        Error::Core(_) => FailureNotice::Unreported,
        _ if target.symlink_metadata().is_ok() => FailureNotice::StepFailed(Some(format!(
            "{} was left in place; remove it before retrying with the same name.",
            target
        ))),
        _ => FailureNotice::StepFailed(None),
    }
}

/// Print what the observer has not, and mark the error when it has been shown
fn report_failure(err: Error, target: &Utf8Path) -> anyhow::Error {
    match failure_notice(&err, target) {
        FailureNotice::Exists(message) => {
            output::error(&message);
            Reported(message).into()
        }
        FailureNotice::StepFailed(leftover) => {
            if let Some(warning) = leftover {
                output::warning(&warning);
            }
            Reported(err.to_string()).into()
        }
        FailureNotice::Unreported => anyhow!(err),
    }
}

/// Name taken without prompting: the positional argument, or the default with `--yes`
fn preset_name(name: Option<String>, yes: bool, default: &str) -> Option<String> {
    match name {
        Some(name) => Some(name),
        None if yes => Some(default.to_string()),
        None => None,
    }
}

/// Ask for a project name until a non-empty one is given
fn prompt_project_name(default: &str) -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Project name")
        .default(default.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_project_name(input).map_err(|e| e.to_string())
        })
        .interact_text()
        .context("Failed to read project name")?;

    Ok(name)
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::is_reported;
    use tempfile::TempDir;

    fn temp_cwd() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let cwd = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (temp, cwd)
    }

    #[test]
    fn test_existing_target_is_reported_once() {
        let (_temp, cwd) = temp_cwd();
        let target = cwd.join("demo");
        std::fs::create_dir(&target).unwrap();
        let err = Error::project_exists("demo", target.as_str());

        assert_eq!(
            failure_notice(&err, &target),
            FailureNotice::Exists("Directory demo already exists, please retry.".to_string())
        );
        assert!(is_reported(&report_failure(err, &target)));
    }

    #[test]
    fn test_step_failure_warns_when_target_left_behind() {
        let (_temp, cwd) = temp_cwd();
        let target = cwd.join("demo");
        std::fs::create_dir(&target).unwrap();
        let err = Error::command_failed("pnpm install", "ERR_PNPM_FETCH_404");

        match failure_notice(&err, &target) {
            FailureNotice::StepFailed(Some(warning)) => {
                assert!(warning.starts_with(target.as_str()));
                assert!(warning.contains("remove it before retrying"));
            }
            other => panic!("expected a leftover warning, got {:?}", other),
        }
        assert!(is_reported(&report_failure(err, &target)));
    }

    #[test]
    fn test_step_failure_without_target_has_no_warning() {
        let (_temp, cwd) = temp_cwd();
        let target = cwd.join("demo");
        let err = Error::command_failed("git clone -- x demo", "fatal: repository not found");

        assert_eq!(failure_notice(&err, &target), FailureNotice::StepFailed(None));
        assert!(is_reported(&report_failure(err, &target)));
    }

    #[test]
    fn test_config_failure_is_left_for_main_to_print() {
        let (_temp, cwd) = temp_cwd();
        let target = cwd.join("demo");
        let err = Error::Core(sprout_core::Error::invalid_config("bad package-managers"));

        assert_eq!(failure_notice(&err, &target), FailureNotice::Unreported);
        assert!(!is_reported(&report_failure(err, &target)));
    }

    #[test]
    fn test_preset_name_prefers_argument() {
        assert_eq!(
            preset_name(Some("demo".to_string()), true, "my-app").as_deref(),
            Some("demo")
        );
    }

    #[test]
    fn test_preset_name_uses_default_with_yes() {
        assert_eq!(preset_name(None, true, "my-app").as_deref(), Some("my-app"));
    }

    #[test]
    fn test_preset_name_prompts_otherwise() {
        assert_eq!(preset_name(None, false, "my-app"), None);
    }
}
