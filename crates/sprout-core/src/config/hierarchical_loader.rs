//! Hierarchical configuration loader with precedence
//!
//! Loads the scaffold configuration from multiple sources with the following
//! precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.sprout/config.yaml, or an explicit file)
//! 3. Environment variables (SPROUT_* prefix)
//! 4. CLI flags (passed in as [`ConfigOverrides`])

use crate::error::{Error, Result};
use crate::types::{
    GitWorkflowConfig, ManifestConfig, PackageManagerDefinition, ScaffoldConfig, TemplateConfig,
};
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use tracing::{debug, warn};

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "scaffold-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Values supplied on the command line; `None` leaves lower layers untouched
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Template repository URL (`--template`)
    pub template_url: Option<String>,
    /// Package manager key (`--package-manager`)
    pub package_manager: Option<String>,
}

/// Partial configuration as written by users; absent keys keep lower-layer values
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ScaffoldConfigOverlay {
    template: Option<TemplateConfig>,
    default_project_name: Option<String>,
    git: Option<GitWorkflowConfig>,
    manifest: Option<ManifestConfig>,
    package_manager: Option<String>,
    #[serde(default)]
    package_managers: HashMap<String, PackageManagerDefinition>,
}

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
    /// Explicit config file replacing `<config_dir>/config.yaml`
    config_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.sprout)
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self {
            config_dir,
            config_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            config_file: None,
        }
    }

    /// Use an explicit config file instead of `<config_dir>/config.yaml`
    ///
    /// Unlike the implicit user file, an explicit file must exist.
    pub fn with_config_file(mut self, path: Utf8PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Get the standard config directory (~/.sprout)
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = get_home_dir()
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;
        let home = Utf8PathBuf::from_path_buf(home).map_err(|p| {
            Error::invalid_config(format!("Home directory is not UTF-8: {}", p.display()))
        })?;

        Ok(home.join(".sprout"))
    }

    /// Load the scaffold configuration with hierarchical precedence
    pub fn load_scaffold_config(&self, overrides: &ConfigOverrides) -> Result<ScaffoldConfig> {
        let mut config = Self::load_embedded_config::<ScaffoldConfig>(DEFAULTS_FILE)?;

        match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                let overlay = self.load_yaml_file::<ScaffoldConfigOverlay>(path)?;
                config = Self::merge_scaffold_config(config, overlay);
            }
            None => {
                let user_config_path = self.config_dir.join(USER_CONFIG_FILE);
                if user_config_path.exists() {
                    let overlay =
                        self.load_yaml_file::<ScaffoldConfigOverlay>(&user_config_path)?;
                    config = Self::merge_scaffold_config(config, overlay);
                }
            }
        }

        config = Self::apply_env_overrides(config);
        config = Self::apply_cli_overrides(config, overrides);

        config.validate()?;
        Ok(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        debug!("Loading config file: {}", path);
        let content = fs::read_to_string(path)?;

        // An empty file is a valid "no overrides" document
        if content.trim().is_empty() {
            return serde_yaml_ng::from_str("{}")
                .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)));
        }

        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Merge a user overlay into the base config
    fn merge_scaffold_config(
        mut base: ScaffoldConfig,
        overlay: ScaffoldConfigOverlay,
    ) -> ScaffoldConfig {
        if let Some(template) = overlay.template {
            base.template = template;
        }
        if let Some(name) = overlay.default_project_name {
            base.default_project_name = name;
        }
        if let Some(git) = overlay.git {
            base.git = git;
        }
        if let Some(manifest) = overlay.manifest {
            base.manifest = manifest;
        }
        if let Some(package_manager) = overlay.package_manager {
            base.package_manager = package_manager;
        }

        // Overlay package managers take precedence, others are kept
        for (key, definition) in overlay.package_managers {
            base.package_managers.insert(key, definition);
        }

        base
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: ScaffoldConfig) -> ScaffoldConfig {
        if let Some(val) = non_empty_env("SPROUT_TEMPLATE_URL") {
            config.template.url = val;
        }

        if let Some(val) = non_empty_env("SPROUT_PACKAGE_MANAGER") {
            config.package_manager = val;
        }

        if let Some(val) = non_empty_env("SPROUT_DEFAULT_PROJECT_NAME") {
            config.default_project_name = val;
        }

        if let Some(val) = non_empty_env("SPROUT_DEFAULT_BRANCH") {
            config.git.default_branch = val;
        }

        config
    }

    /// Apply CLI flag overrides
    fn apply_cli_overrides(
        mut config: ScaffoldConfig,
        overrides: &ConfigOverrides,
    ) -> ScaffoldConfig {
        if let Some(url) = &overrides.template_url {
            config.template.url = url.clone();
        }
        if let Some(package_manager) = &overrides.package_manager {
            config.package_manager = package_manager.clone();
        }
        config
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    let val = env::var(key).ok()?;
    if val.trim().is_empty() {
        warn!("Ignoring empty {}", key);
        return None;
    }
    Some(val)
}
