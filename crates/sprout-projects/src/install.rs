//! Dependency installation through the configured package manager

use crate::error::Result;
use crate::process::{run_checked, CommandOutput, CommandRunner, CommandSpec};
use camino::Utf8Path;
use sprout_core::types::{PackageManagerDefinition, Platform};
use tracing::info;

/// Install command for `package_manager` on `platform`, run inside `project_dir`
pub fn install_spec(
    package_manager: &PackageManagerDefinition,
    platform: Platform,
    project_dir: &Utf8Path,
) -> CommandSpec {
    CommandSpec::new(package_manager.executable_for(platform))
        .args(package_manager.install_args.iter().map(String::as_str))
        .current_dir(project_dir)
}

/// Install project dependencies inside `project_dir`
pub async fn install_dependencies(
    runner: &dyn CommandRunner,
    package_manager: &PackageManagerDefinition,
    platform: Platform,
    project_dir: &Utf8Path,
) -> Result<CommandOutput> {
    let spec = install_spec(package_manager, platform, project_dir);
    info!("Installing dependencies with: {}", spec);

    let output = run_checked(runner, &spec).await?;

    info!("Dependencies installed");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::types::default_package_managers;

    #[test]
    fn test_install_spec_per_platform() {
        let managers = default_package_managers();
        let dir = Utf8Path::new("/work/demo");

        let windows = install_spec(&managers["pnpm"], Platform::Windows, dir);
        assert_eq!(windows.to_string(), "pnpm.cmd install");
        assert_eq!(windows.cwd(), Some(dir));

        for platform in [Platform::Linux, Platform::Macos, Platform::Other] {
            let spec = install_spec(&managers["pnpm"], platform, dir);
            assert_eq!(spec.to_string(), "pnpm install");
        }
    }

    #[test]
    fn test_install_spec_custom_args() {
        let mut bun = PackageManagerDefinition::new("bun");
        bun.install_args = vec!["install".to_string(), "--frozen-lockfile".to_string()];

        let spec = install_spec(&bun, Platform::Linux, Utf8Path::new("/work/demo"));
        assert_eq!(spec.to_string(), "bun install --frozen-lockfile");
    }
}
