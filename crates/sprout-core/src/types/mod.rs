//! Type definitions for Sprout configuration

mod package_manager;
mod platform;
mod scaffold_config;

pub use package_manager::*;
pub use platform::*;
pub use scaffold_config::*;
