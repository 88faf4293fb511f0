//! Path resolution for quickentry configuration.
//!
//! All quickentry data is stored in `~/.quickentry/`:
//! - `config.yaml` - Settings plus the context and project catalogs

use std::path::{Path, PathBuf};

use crate::error::QuickEntryError;

/// Paths to quickentry configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quickentry/`
    pub root: PathBuf,
    /// Config file: `~/.quickentry/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuickEntryError> {
        let home = std::env::var("HOME").map_err(|_| {
            QuickEntryError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quickentry")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Paths for an explicit config file; its parent becomes the root.
    #[must_use]
    pub fn for_config_file(config_file: &Path) -> Self {
        let root = config_file
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self {
            root,
            config_file: config_file.to_path_buf(),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".quickentry"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-quickentry");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_paths_for_config_file() {
        let paths = Paths::for_config_file(Path::new("/etc/qe/custom.yaml"));
        assert_eq!(paths.root, PathBuf::from("/etc/qe"));
        assert_eq!(paths.config_file, PathBuf::from("/etc/qe/custom.yaml"));
    }

}
