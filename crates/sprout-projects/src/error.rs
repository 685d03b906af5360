//! Error types for sprout-projects

use thiserror::Error;

/// Result type alias using sprout-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already exists
    #[error("Directory {name} already exists at: {path}")]
    ProjectExists { name: String, path: String },

    /// Invalid project name
    #[error("Invalid project name: {message}")]
    InvalidProjectName { message: String },

    /// Invalid repository URL
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// External command exited unsuccessfully
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        /// Captured stderr, or stdout when stderr was empty
        output: String,
    },

    /// External command could not be started
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// Manifest missing from the cloned template
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// Manifest parsed but has the wrong shape
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] sprout_core::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ProjectExists {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(message: impl Into<String>) -> Self {
        Self::InvalidProjectName {
            message: message.into(),
        }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            output: output.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }

    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Output captured from a failed command, if any
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } if !output.trim().is_empty() => Some(output),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_output() {
        let err = Error::command_failed("git clone x y", "fatal: repository not found");
        assert_eq!(err.captured_output(), Some("fatal: repository not found"));
        assert_eq!(err.to_string(), "Command failed: git clone x y");

        let err = Error::command_failed("pnpm install", "  \n");
        assert_eq!(err.captured_output(), None);

        let err = Error::invalid_repo_url("nope");
        assert_eq!(err.captured_output(), None);
    }
}
