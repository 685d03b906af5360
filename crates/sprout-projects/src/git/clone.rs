//! Template cloning

use crate::error::{Error, Result};
use crate::process::{run_checked, CommandOutput, CommandRunner, CommandSpec};
use camino::Utf8Path;
use tracing::info;

/// Clone `url` into `<cwd>/<project_name>`
///
/// `git clone` runs with `cwd` as its working directory and creates the
/// target directory itself, so `cwd` must exist and the target must not.
/// Positional arguments follow `--` so a name like `--bare` stays a path.
///
/// # Errors
/// Returns error if:
/// - The URL does not look like a repository location
/// - git could not be started
/// - git exits unsuccessfully (captured output is attached)
pub async fn clone_template(
    runner: &dyn CommandRunner,
    url: &str,
    project_name: &str,
    cwd: &Utf8Path,
) -> Result<CommandOutput> {
    info!("Cloning template: {} -> {}", url, cwd.join(project_name));

    if !is_valid_repo_url(url) {
        return Err(Error::invalid_repo_url(url));
    }

    let spec = CommandSpec::new("git")
        .args(["clone", "--", url, project_name])
        .current_dir(cwd);

    let output = run_checked(runner, &spec).await?;

    info!("Template cloned successfully");
    Ok(output)
}

/// Validate if a string looks like a repository location git can clone
pub fn is_valid_repo_url(url: &str) -> bool {
    const SCHEMES: [&str; 5] = ["https://", "http://", "ssh://", "git@", "file://"];

    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme) && url.len() > scheme.len())
        || Utf8Path::new(url).is_absolute()
}
