//! Host platform detection
//!
//! Platform identifiers are the keys used in `platform-executables` when
//! resolving a package manager executable.

use std::fmt;

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows
    Windows,
    /// macOS
    Macos,
    /// Linux
    Linux,
    /// Anything else (BSDs, illumos, ...)
    Other,
}

impl Platform {
    /// Detect the platform this binary was compiled for
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }

        #[cfg(target_os = "macos")]
        {
            Platform::Macos
        }

        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            Platform::Other
        }
    }

    /// Identifier used as a configuration key
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_target_os() {
        let expected = match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::Macos,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Platform::Windows.as_str(), "windows");
        assert_eq!(Platform::Macos.to_string(), "macos");
        assert_eq!(Platform::Linux.to_string(), "linux");
        assert_eq!(Platform::Other.as_str(), "other");
    }
}
