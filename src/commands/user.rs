// SPDX-License-Identifier: AGPL-3.0-or-later
//! User account commands - the account table view (Administrator only)

use crate::auth::{Access, Session, ViewId};
use crate::manager::DataManager;
use crate::types::{Role, UserRecord};
use anyhow::Result;

/// Arguments for user commands
pub struct UserArgs {
    /// Password for the target account (not the session password)
    pub new_password: Option<String>,
    /// Access tier: Administrator, Investor, or Researcher
    pub role: Option<String>,
    /// New username when updating
    pub rename: Option<String>,
}

/// Run user command
pub fn run(
    manager: &mut DataManager,
    session: &Session,
    action: &str,
    username: Option<String>,
    args: UserArgs,
) -> Result<()> {
    // The whole account table is manage-gated; there is no read-only users view.
    super::require(session, ViewId::Users, Access::Manage)?;

    match action {
        "add" | "new" => {
            let username = username.ok_or_else(|| anyhow::anyhow!("Username is required"))?;
            let password = args
                .new_password
                .ok_or_else(|| anyhow::anyhow!("--new-password is required"))?;
            let role = parse_role(
                &args.role.ok_or_else(|| anyhow::anyhow!("--role is required"))?,
            )?;

            manager.add_user(&username, UserRecord { password, role })?;

            println!("Created user: {username}");
            println!("  role: {}", role.as_str());
        }

        "update" | "edit" => {
            let username = username.ok_or_else(|| anyhow::anyhow!("Username is required"))?;

            let current = manager
                .data()
                .users
                .get(&username)
                .ok_or_else(|| anyhow::anyhow!("User not found: {}", username))?
                .clone();

            let role = match args.role {
                Some(r) => parse_role(&r)?,
                None => current.role,
            };
            let record = UserRecord {
                password: args.new_password.unwrap_or(current.password),
                role,
            };
            let new_username = args.rename.unwrap_or_else(|| username.clone());

            manager.update_user(&username, &new_username, record)?;

            if new_username == username {
                println!("Updated user: {username}");
            } else {
                println!("Updated user: {username} -> {new_username}");
            }
        }

        "delete" | "rm" => {
            let username = username.ok_or_else(|| anyhow::anyhow!("Username is required"))?;

            if manager.delete_user(&username)? {
                println!("Deleted user: {username}");
            } else {
                println!("User not found: {username}");
            }
        }

        "list" | "ls" => {
            let users = &manager.data().users;
            if users.is_empty() {
                println!("No users defined. Use 'geomineral user add <username>' to create one.");
                return Ok(());
            }

            // Passwords stay out of the listing.
            println!("Users ({}):", users.len());
            for (username, u) in users {
                println!("  {} ({})", username, u.role.as_str());
            }
        }

        other => {
            anyhow::bail!("Unknown user action: {}. Valid: add, update, delete, list", other);
        }
    }

    Ok(())
}

fn parse_role(s: &str) -> Result<Role> {
    Role::parse(s).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown role: {}. Valid: Administrator, Investor, Researcher",
            s
        )
    })
}
