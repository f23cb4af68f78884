//! Bridges the TOML loader behind the `ConfigAdapter` seam so bootstrap
//! never touches the filesystem details directly.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads `AppConfig` from an optional explicit file path. Without one, the
/// loader falls back to `config.toml` in the working directory, and a missing
/// file yields the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }

    /// The explicit config path, when one was given on the command line.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(load(self.path())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_the_explicit_path() {
        let adapter = FileConfigAdapter::new(Some(Path::new("custom.toml")));

        assert_eq!(adapter.path(), Some(Path::new("custom.toml")));
    }

    #[test]
    fn defaults_to_no_explicit_path() {
        assert_eq!(FileConfigAdapter::default().path(), None);
    }

    #[test]
    fn missing_file_loads_the_built_in_defaults() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./missing-config.toml")));

        let config = adapter.load().expect("config must load");

        assert_eq!(config, AppConfig::default());
    }
}
