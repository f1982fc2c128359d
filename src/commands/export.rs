// SPDX-License-Identifier: AGPL-3.0-or-later
//! Export command - dumps the full store document
//!
//! The dump includes the user table (plaintext passwords), so it is gated
//! on user management, which only Administrators hold.

use crate::auth::{Access, Session, ViewId};
use crate::manager::DataManager;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Run export command
pub fn run(manager: &DataManager, session: &Session, output: Option<PathBuf>) -> Result<()> {
    super::require(session, ViewId::Users, Access::Manage)?;

    let content =
        serde_json::to_string_pretty(manager.data()).context("Failed to serialize store")?;

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            info!("Exported store to {}", path.display());
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
