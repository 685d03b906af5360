//! Command implementations

pub mod completions;
pub mod config;
pub mod new;

use anyhow::{Context, Result};
use camino::Utf8Path;
use sprout_core::{ConfigOverrides, HierarchicalConfigLoader, ScaffoldConfig};

/// Marks a failure whose details were already printed
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Reported(pub String);

/// Whether `err` was already shown to the user
pub fn is_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Reported>().is_some()
}

/// Load the scaffold configuration, honoring `--config` and CLI overrides
pub(crate) fn load_config(
    config_path: Option<&Utf8Path>,
    overrides: &ConfigOverrides,
) -> Result<ScaffoldConfig> {
    let mut loader =
        HierarchicalConfigLoader::new().context("Failed to locate configuration directory")?;

    if let Some(path) = config_path {
        loader = loader.with_config_file(path.to_path_buf());
    }

    loader
        .load_scaffold_config(overrides)
        .context("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_is_reported() {
        let reported = anyhow::Error::new(Reported("clone failed".to_string()));
        assert!(is_reported(&reported));
        assert!(is_reported(&reported.context("while scaffolding")));
        assert!(!is_reported(&anyhow!("plain failure")));
    }
}
