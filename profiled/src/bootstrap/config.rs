// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 7600;
const DEFAULT_WORKERS: u16 = 4;

/// Ensures the runtime root exists and holds a config.yaml, writing the
/// default one on first run. Returns the normalized root and whether a
/// config file was created.
pub fn ensure_config(root: &Path) -> Result<(PathBuf, bool), BootstrapError> {
    let root_path = normalize_root(root)?;
    let config_path = root_path.join("config.yaml");

    if config_path.exists() {
        return Ok((root_path, false));
    }

    let contents = default_config_yaml();

    // create_new keeps a concurrent first run from clobbering the file
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok((root_path, false)),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    log_action(format!(
        "created config.yaml (http {}, {} workers)",
        DEFAULT_PORT, DEFAULT_WORKERS
    ));

    Ok((root_path, true))
}

fn normalize_root(root: &Path) -> Result<PathBuf, BootstrapError> {
    let root_path = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.to_path_buf()
    };

    if root_path.exists() {
        if !root_path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Runtime root is not a directory: {}", root_path.display()),
            )));
        }
        return Ok(root_path);
    }

    fs::create_dir_all(&root_path)?;
    log_action(format!(
        "created runtime root directory {}",
        root_path.display()
    ));
    Ok(root_path)
}

fn default_config_yaml() -> String {
    format!(
        r#"# Profiled configuration
# Created automatically on first run; adjust and restart.

app:
  name: Profiled
  description: Profile record service

server:
  host: 127.0.0.1
  port: {port}
  workers: {workers}

database:
  # Connection string of the MongoDB deployment holding the profiles.
  uri: mongodb://127.0.0.1:27017
  name: profiled
  collection: profiles

logging:
  # One of: trace, debug, info, warn, error
  level: info
"#,
        port = DEFAULT_PORT,
        workers = DEFAULT_WORKERS
    )
}
