//! Scaffold configuration types
//!
//! These types describe where a new project comes from (template repository),
//! how its fresh repository is initialized, which manifest fields are
//! rewritten, and which package manager installs its dependencies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::package_manager::{default_package_managers, PackageManagerDefinition};
use crate::error::{Error, Result};

/// Complete scaffold configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Template repository settings
    #[serde(default)]
    pub template: TemplateConfig,

    /// Name offered by the interactive prompt
    #[serde(default = "default_project_name")]
    pub default_project_name: String,

    /// Git workflow defaults for the reinitialized repository
    #[serde(default)]
    pub git: GitWorkflowConfig,

    /// Manifest rewrite settings
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Key of the package manager used for installation
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Known package managers
    #[serde(default = "default_package_managers")]
    pub package_managers: HashMap<String, PackageManagerDefinition>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig::default(),
            default_project_name: default_project_name(),
            git: GitWorkflowConfig::default(),
            manifest: ManifestConfig::default(),
            package_manager: default_package_manager(),
            package_managers: default_package_managers(),
        }
    }
}

impl ScaffoldConfig {
    /// Definition of the selected package manager
    pub fn selected_package_manager(&self) -> Result<&PackageManagerDefinition> {
        self.package_managers
            .get(&self.package_manager)
            .ok_or_else(|| {
                Error::unknown_package_manager(
                    &self.package_manager,
                    self.available_package_managers(),
                )
            })
    }

    /// Comma-separated, sorted list of package manager keys
    pub fn available_package_managers(&self) -> String {
        let mut keys: Vec<&str> = self.package_managers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys.join(", ")
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> Result<()> {
        self.selected_package_manager()?;

        if self.template.url.trim().is_empty() {
            return Err(Error::invalid_config("template.url must not be empty"));
        }
        if self.git.default_branch.trim().is_empty() {
            return Err(Error::invalid_config("git.default-branch must not be empty"));
        }
        if self.manifest.file.trim().is_empty() {
            return Err(Error::invalid_config("manifest.file must not be empty"));
        }

        Ok(())
    }
}

/// Template repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Repository URL passed to `git clone`
    #[serde(default = "default_template_url")]
    pub url: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            url: default_template_url(),
        }
    }
}

/// Git workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitWorkflowConfig {
    /// Branch name the initial commit ends up on
    #[serde(default = "default_git_branch")]
    pub default_branch: String,

    /// Message of the single initial commit
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,
}

impl Default for GitWorkflowConfig {
    fn default() -> Self {
        Self {
            default_branch: default_git_branch(),
            initial_commit_message: default_initial_commit_message(),
        }
    }
}

/// Manifest rewrite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestConfig {
    /// Manifest path relative to the project root
    #[serde(default = "default_manifest_file")]
    pub file: String,

    /// Version written into the manifest
    #[serde(default = "default_manifest_version")]
    pub version: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file: default_manifest_file(),
            version: default_manifest_version(),
        }
    }
}

fn default_template_url() -> String {
    "https://github.com/Lin-PQ/react-playground.git".to_string()
}
fn default_project_name() -> String {
    "my-app".to_string()
}
fn default_git_branch() -> String {
    "main".to_string()
}
fn default_initial_commit_message() -> String {
    "feat: init".to_string()
}
fn default_manifest_file() -> String {
    "package.json".to_string()
}
fn default_manifest_version() -> String {
    "1.0.0".to_string()
}
fn default_package_manager() -> String {
    "pnpm".to_string()
}
