//! # sprout-core
//!
//! Core library for the Sprout CLI providing:
//! - Scaffold configuration types (template source, package managers, git defaults)
//! - Hierarchical configuration loading (embedded defaults, user file, environment)
//! - Host platform detection for package manager executable resolution

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::{ConfigOverrides, HierarchicalConfigLoader};
pub use error::{Error, Result};
pub use types::{PackageManagerDefinition, Platform, ScaffoldConfig};
pub use utils::get_home_dir;
