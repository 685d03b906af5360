//! The scaffold pipeline
//!
//! A [`Scaffolder`] turns a [`ScaffoldRequest`] into a ready-to-use project:
//!
//! 1. refuse to run if the target path already exists
//! 2. clone the template into `<cwd>/<name>`
//! 3. strip the template's git history
//! 4. initialize a fresh repository with one commit on the default branch
//! 5. rewrite the manifest's `name` and `version`
//! 6. install dependencies with the configured package manager
//!
//! Steps run strictly one after another. The first failure ends the run; the
//! partially created target directory is left in place.

mod observer;

pub use observer::{NoOpObserver, Step, StepObserver, TracingObserver};

use crate::error::{Error, Result};
use crate::git::{clone_template, reinitialize_repository, strip_history};
use crate::install::install_dependencies;
use crate::manifest::rewrite_manifest;
use crate::process::CommandRunner;
use camino::{Utf8Path, Utf8PathBuf};
use sprout_core::types::{Platform, ScaffoldConfig};
use std::future::Future;
use tracing::info;

/// A validated request to create one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    project_name: String,
}

impl ScaffoldRequest {
    /// Create a request; surrounding whitespace is dropped and the name must not be empty
    pub fn new(project_name: impl Into<String>) -> Result<Self> {
        let project_name = project_name.into();
        let project_name = project_name.trim();

        validate_project_name(project_name)?;

        Ok(Self {
            project_name: project_name.to_string(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Absolute location of the new project under `cwd`
    pub fn target_path(&self, cwd: &Utf8Path) -> Utf8PathBuf {
        cwd.join(&self.project_name)
    }
}

/// Check a project name as typed by a user
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_project_name("project name must not be empty"));
    }
    Ok(())
}

/// Result of a successful scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub project_name: String,
    pub target_path: Utf8PathBuf,
    /// Commands the user should run next, e.g. `cd demo`, `pnpm dev`
    pub next_steps: Vec<String>,
}

/// Runs the scaffold pipeline
pub struct Scaffolder<'a> {
    config: &'a ScaffoldConfig,
    runner: &'a dyn CommandRunner,
    observer: &'a dyn StepObserver,
    platform: Platform,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder for the host platform with no observer
    pub fn new(config: &'a ScaffoldConfig, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            observer: &NoOpObserver,
            platform: Platform::current(),
        }
    }

    /// Report step progress to `observer`
    pub fn with_observer(mut self, observer: &'a dyn StepObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Resolve executables as if running on `platform`
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Fail with [`Error::ProjectExists`] if anything exists at the target path
    ///
    /// Dangling symlinks count as existing.
    pub fn check_target(&self, request: &ScaffoldRequest, cwd: &Utf8Path) -> Result<Utf8PathBuf> {
        let target = request.target_path(cwd);

        if target.symlink_metadata().is_ok() {
            return Err(Error::project_exists(request.project_name(), target.as_str()));
        }

        Ok(target)
    }

    /// Scaffold `request` under `cwd`
    ///
    /// The target check and configuration lookup happen before any
    /// filesystem change or subprocess.
    pub async fn run(&self, request: &ScaffoldRequest, cwd: &Utf8Path) -> Result<ScaffoldOutcome> {
        let package_manager = self.config.selected_package_manager()?;
        let target = self.check_target(request, cwd)?;
        let name = request.project_name();

        info!("Scaffolding {} at {}", name, target);

        self.step(
            Step::Clone,
            clone_template(self.runner, &self.config.template.url, name, cwd),
        )
        .await?;

        self.step(Step::StripHistory, strip_history(&target)).await?;

        self.step(
            Step::Reinitialize,
            reinitialize_repository(self.runner, &target, &self.config.git),
        )
        .await?;

        let manifest_path = target.join(&self.config.manifest.file);
        self.step(Step::RewriteManifest, async {
            rewrite_manifest(&manifest_path, name, &self.config.manifest.version)
        })
        .await?;

        self.step(
            Step::Install,
            install_dependencies(self.runner, package_manager, self.platform, &target),
        )
        .await?;

        info!("Project {} created", name);

        Ok(ScaffoldOutcome {
            project_name: name.to_string(),
            target_path: target,
            next_steps: vec![format!("cd {}", name), package_manager.dev_hint()],
        })
    }

    async fn step<T, F>(&self, step: Step, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.observer.on_step_start(step);

        match operation.await {
            Ok(value) => {
                self.observer.on_step_success(step);
                Ok(value)
            }
            Err(e) => {
                self.observer.on_step_failed(step, &e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{CommandOutput, CommandSpec};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records commands and fakes a successful clone
    #[derive(Default)]
    struct FakeRunner {
        commands: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
            self.commands.lock().unwrap().push(spec.to_string());

            if spec.arguments().first().map(String::as_str) == Some("clone") {
                let cwd = spec.cwd().unwrap();
                let target = cwd.join(spec.arguments().last().unwrap());
                std::fs::create_dir_all(target.join(".git")).unwrap();
                std::fs::write(
                    target.join("package.json"),
                    r#"{"name":"template","version":"0.0.0"}"#,
                )
                .unwrap();
            }

            Ok(CommandOutput::success(""))
        }
    }

    #[derive(Default)]
    struct EventLog {
        events: Mutex<Vec<String>>,
    }

    impl StepObserver for EventLog {
        fn on_step_start(&self, step: Step) {
            self.events.lock().unwrap().push(format!("start {}", step));
        }

        fn on_step_success(&self, step: Step) {
            self.events.lock().unwrap().push(format!("ok {}", step));
        }

        fn on_step_failed(&self, step: Step, _error: &Error) {
            self.events.lock().unwrap().push(format!("failed {}", step));
        }
    }

    fn utf8_dir(temp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).unwrap()
    }

    #[test]
    fn test_request_rejects_empty_name() {
        assert!(matches!(
            ScaffoldRequest::new(""),
            Err(Error::InvalidProjectName { .. })
        ));
        assert!(matches!(
            ScaffoldRequest::new("   "),
            Err(Error::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn test_request_trims_name() {
        let request = ScaffoldRequest::new("  demo ").unwrap();
        assert_eq!(request.project_name(), "demo");
        assert_eq!(
            request.target_path(Utf8Path::new("/work")),
            Utf8PathBuf::from("/work/demo")
        );
    }

    #[tokio::test]
    async fn test_run_reports_every_step_in_order() {
        let temp = TempDir::new().unwrap();
        let cwd = utf8_dir(&temp);
        let config = ScaffoldConfig::default();
        let runner = FakeRunner::default();
        let log = EventLog::default();

        let request = ScaffoldRequest::new("demo").unwrap();
        let outcome = Scaffolder::new(&config, &runner)
            .with_observer(&log)
            .with_platform(Platform::Linux)
            .run(&request, cwd)
            .await
            .unwrap();

        let expected: Vec<String> = Step::ALL
            .iter()
            .flat_map(|s| [format!("start {}", s), format!("ok {}", s)])
            .collect();
        assert_eq!(*log.events.lock().unwrap(), expected);

        assert_eq!(outcome.target_path, cwd.join("demo"));
        assert_eq!(outcome.next_steps, ["cd demo", "pnpm dev"]);
    }

    #[tokio::test]
    async fn test_existing_target_short_circuits() {
        let temp = TempDir::new().unwrap();
        let cwd = utf8_dir(&temp);
        std::fs::create_dir(cwd.join("demo")).unwrap();

        let config = ScaffoldConfig::default();
        let runner = FakeRunner::default();
        let log = EventLog::default();

        let request = ScaffoldRequest::new("demo").unwrap();
        let result = Scaffolder::new(&config, &runner)
            .with_observer(&log)
            .run(&request, cwd)
            .await;

        assert!(matches!(result, Err(Error::ProjectExists { .. })));
        assert!(runner.commands.lock().unwrap().is_empty());
        assert!(log.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_package_manager_fails_before_clone() {
        let temp = TempDir::new().unwrap();
        let config = ScaffoldConfig {
            package_manager: "bower".to_string(),
            ..Default::default()
        };
        let runner = FakeRunner::default();

        let request = ScaffoldRequest::new("demo").unwrap();
        let result = Scaffolder::new(&config, &runner)
            .run(&request, utf8_dir(&temp))
            .await;

        assert!(matches!(result, Err(Error::Core(_))));
        assert!(runner.commands.lock().unwrap().is_empty());
    }
}
