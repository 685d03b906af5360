//! Package manager definitions
//!
//! A package manager is looked up by key (`pnpm`, `npm`, ...) and resolves to
//! a platform-specific executable. On Windows the Node package managers are
//! exposed as `.cmd` shims and the bare name may fail to resolve.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Platform;

/// How to invoke one package manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageManagerDefinition {
    /// Executable name used when no platform override applies
    pub executable: String,

    /// Per-platform executable overrides keyed by platform id (windows, macos, linux, other)
    #[serde(default)]
    pub platform_executables: HashMap<String, String>,

    /// Arguments for installing dependencies
    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,

    /// Arguments for starting the development server
    #[serde(default = "default_dev_args")]
    pub dev_args: Vec<String>,
}

impl PackageManagerDefinition {
    /// Create a definition with default install/dev arguments
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            platform_executables: HashMap::new(),
            install_args: default_install_args(),
            dev_args: default_dev_args(),
        }
    }

    /// Add a platform-specific executable override
    pub fn with_platform_executable(
        mut self,
        platform: Platform,
        executable: impl Into<String>,
    ) -> Self {
        self.platform_executables
            .insert(platform.as_str().to_string(), executable.into());
        self
    }

    /// Resolve the executable for a platform
    pub fn executable_for(&self, platform: Platform) -> &str {
        self.platform_executables
            .get(platform.as_str())
            .map(String::as_str)
            .unwrap_or(&self.executable)
    }

    /// Human-readable hint for starting the dev server, e.g. `pnpm dev`
    ///
    /// Uses the plain executable name; the hint is meant to be typed by a user.
    pub fn dev_hint(&self) -> String {
        std::iter::once(self.executable.as_str())
            .chain(self.dev_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_install_args() -> Vec<String> {
    vec!["install".to_string()]
}

fn default_dev_args() -> Vec<String> {
    vec!["dev".to_string()]
}

/// Built-in package manager table
pub fn default_package_managers() -> HashMap<String, PackageManagerDefinition> {
    let mut managers = HashMap::new();

    managers.insert(
        "pnpm".to_string(),
        PackageManagerDefinition::new("pnpm")
            .with_platform_executable(Platform::Windows, "pnpm.cmd"),
    );

    let mut npm =
        PackageManagerDefinition::new("npm").with_platform_executable(Platform::Windows, "npm.cmd");
    npm.dev_args = vec!["run".to_string(), "dev".to_string()];
    managers.insert("npm".to_string(), npm);

    managers.insert(
        "yarn".to_string(),
        PackageManagerDefinition::new("yarn")
            .with_platform_executable(Platform::Windows, "yarn.cmd"),
    );

    managers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnpm_resolves_cmd_shim_on_windows() {
        let managers = default_package_managers();
        let pnpm = &managers["pnpm"];
        assert_eq!(pnpm.executable_for(Platform::Windows), "pnpm.cmd");
        assert_eq!(pnpm.executable_for(Platform::Linux), "pnpm");
        assert_eq!(pnpm.executable_for(Platform::Macos), "pnpm");
        assert_eq!(pnpm.executable_for(Platform::Other), "pnpm");
    }

    #[test]
    fn test_dev_hint() {
        let managers = default_package_managers();
        assert_eq!(managers["pnpm"].dev_hint(), "pnpm dev");
        assert_eq!(managers["npm"].dev_hint(), "npm run dev");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let yaml = r#"
executable: bun
"#;
        let def: PackageManagerDefinition = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(def.executable, "bun");
        assert_eq!(def.install_args, vec!["install"]);
        assert_eq!(def.dev_args, vec!["dev"]);
        assert!(def.platform_executables.is_empty());
        assert_eq!(def.executable_for(Platform::Windows), "bun");
    }
}
