// SPDX-License-Identifier: AGPL-3.0-or-later
//! Self-registration - open to unauthenticated callers, Researcher only

use crate::manager::DataManager;
use crate::types::{Role, UserRecord};
use anyhow::Result;

/// Create a Researcher account without a session
///
/// The role is fixed; privileged accounts are only created by an
/// administrator through `user add`.
pub fn run(manager: &mut DataManager, username: &str, password: &str) -> Result<()> {
    manager.add_user(
        username,
        UserRecord {
            password: password.to_string(),
            role: Role::Researcher,
        },
    )?;

    println!("Created researcher account: {username}");
    println!("Sign in with: geomineral -u {username} -p <password> login");
    Ok(())
}
