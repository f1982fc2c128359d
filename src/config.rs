// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration management - data directory resolution

use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted store
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory: explicit flag, then `GEOMINERAL_DATA_DIR`,
    /// then the platform data directory, then `.geomineral` under the cwd
    #[must_use]
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let data_dir = override_dir
            .or_else(|| std::env::var("GEOMINERAL_DATA_DIR").ok().map(PathBuf::from))
            .or_else(|| {
                directories::ProjectDirs::from("org", "geomineral", "geomineral")
                    .map(|dirs| dirs.data_dir().to_path_buf())
            })
            .unwrap_or_else(|| {
                std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(".geomineral")
            });

        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        let cfg = Config::resolve(Some(PathBuf::from("/tmp/geomineral-test")));
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/geomineral-test"));
    }
}
