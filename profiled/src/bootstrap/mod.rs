// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{Config, ConfigError, ValidatedConfig};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

pub mod config;

#[derive(Debug)]
pub struct BootstrapResult {
    pub validated_config: ValidatedConfig,
    pub config_file: PathBuf,
    pub created_config: bool,
}

#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Io(std::io::Error),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "{}", err),
            BootstrapError::Io(err) => write!(f, "Bootstrap I/O error: {}", err),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err)
    }
}

pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    let (root_path, created_config) = config::ensure_config(root)?;

    let validated_config = Config::load_and_validate(&root_path).map_err(BootstrapError::Config)?;

    Ok(BootstrapResult {
        validated_config,
        config_file: root_path.join("config.yaml"),
        created_config,
    })
}

pub(crate) fn log_action(message: impl AsRef<str>) {
    eprintln!("[bootstrap] {}", message.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;
    use std::fs;

    #[test]
    fn bootstrap_creates_default_config_when_missing() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-default").unwrap();
        let result = bootstrap_runtime(fixture.path()).expect("bootstrap should succeed");

        assert!(result.created_config);
        assert!(result.config_file.exists());
        assert_eq!(result.validated_config.server.port, 7600);
        assert_eq!(result.validated_config.database.collection, "profiles");
        assert_eq!(result.validated_config.logging.level, "info");
    }

    #[test]
    fn bootstrap_keeps_existing_config() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-existing").unwrap();
        let config_path = fixture.path().join("config.yaml");
        fs::write(
            &config_path,
            r#"
app:
  name: Custom
server:
  host: 0.0.0.0
  port: 9000
  workers: 2
"#,
        )
        .unwrap();

        let result = bootstrap_runtime(fixture.path()).expect("bootstrap should succeed");
        assert!(!result.created_config);
        assert_eq!(result.validated_config.app.name, "Custom");
        assert_eq!(result.validated_config.server.port, 9000);
        assert_eq!(result.validated_config.server.workers, 2);
    }

    #[test]
    fn bootstrap_rejects_invalid_config() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-invalid").unwrap();
        fs::write(
            fixture.path().join("config.yaml"),
            r#"
app:
  name: Broken
server:
  host: 127.0.0.1
  port: 0
"#,
        )
        .unwrap();

        match bootstrap_runtime(fixture.path()) {
            Err(BootstrapError::Config(ConfigError::ValidationError(msg))) => {
                assert!(msg.contains("server.port"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn bootstrap_creates_missing_runtime_root() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-mkroot").unwrap();
        let nested = fixture.path().join("nested").join("root");

        let result = bootstrap_runtime(&nested).expect("bootstrap should succeed");
        assert!(result.created_config);
        assert!(nested.join("config.yaml").exists());
    }
}
