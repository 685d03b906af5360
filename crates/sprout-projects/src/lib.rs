//! # sprout-projects
//!
//! Project scaffolding library for the Sprout CLI providing:
//! - Template cloning and git history reinitialization
//! - Manifest (`package.json`) rewriting
//! - Dependency installation through a platform-resolved package manager
//! - The [`Scaffolder`] pipeline that sequences these steps
//!
//! # Examples
//!
//! ```no_run
//! use sprout_core::ScaffoldConfig;
//! use sprout_projects::process::ProcessRunner;
//! use sprout_projects::{ScaffoldRequest, Scaffolder, TracingObserver};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScaffoldConfig::default();
//! let request = ScaffoldRequest::new("demo")?;
//!
//! let outcome = Scaffolder::new(&config, &ProcessRunner)
//!     .with_observer(&TracingObserver)
//!     .run(&request, Utf8Path::new("/tmp"))
//!     .await?;
//!
//! for hint in &outcome.next_steps {
//!     println!("{}", hint);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod install;
pub mod manifest;
pub mod process;
pub mod scaffold;

pub use error::{Error, Result};

pub use scaffold::{
    validate_project_name, NoOpObserver, ScaffoldOutcome, ScaffoldRequest, Scaffolder, Step,
    StepObserver, TracingObserver,
};
