// SPDX-License-Identifier: AGPL-3.0-or-later
//! Mineral record commands - the mineral cards view

use crate::auth::{Access, Session, ViewId};
use crate::manager::DataManager;
use crate::types::MineralRecord;
use anyhow::Result;

/// Arguments for mineral commands
pub struct MineralArgs {
    /// Where the mineral is mined
    pub location: Option<String>,
    /// Output in tonnes per day
    pub production: Option<u64>,
    /// Display color as #RRGGBB
    pub color: Option<String>,
    /// New name when updating
    pub rename: Option<String>,
}

/// Run mineral command
pub fn run(
    manager: &mut DataManager,
    session: &Session,
    action: &str,
    name: Option<String>,
    args: MineralArgs,
) -> Result<()> {
    match action {
        "add" | "new" => {
            super::require(session, ViewId::Minerals, Access::Manage)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Mineral name is required"))?;
            let location = args
                .location
                .ok_or_else(|| anyhow::anyhow!("--location is required"))?;
            let production = args
                .production
                .ok_or_else(|| anyhow::anyhow!("--production is required"))?;
            let color = args.color.ok_or_else(|| anyhow::anyhow!("--color is required"))?;

            manager.add_mineral(
                &name,
                MineralRecord {
                    location: location.clone(),
                    production,
                    color,
                },
            )?;

            println!("Created mineral: {name}");
            println!("  location: {location}");
            println!("  production: {production} t/day");
        }

        "update" | "edit" => {
            super::require(session, ViewId::Minerals, Access::Manage)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Mineral name is required"))?;

            // Start from the stored record; flags override individual fields.
            let current = manager
                .data()
                .minerals
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("Mineral not found: {}", name))?
                .clone();

            let record = MineralRecord {
                location: args.location.unwrap_or(current.location),
                production: args.production.unwrap_or(current.production),
                color: args.color.unwrap_or(current.color),
            };
            let new_name = args.rename.unwrap_or_else(|| name.clone());

            manager.update_mineral(&name, &new_name, record)?;

            if new_name == name {
                println!("Updated mineral: {name}");
            } else {
                println!("Updated mineral: {name} -> {new_name}");
            }
        }

        "delete" | "rm" => {
            super::require(session, ViewId::Minerals, Access::Manage)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Mineral name is required"))?;

            if manager.delete_mineral(&name)? {
                println!("Deleted mineral: {name}");
            } else {
                println!("Mineral not found: {name}");
            }
        }

        "list" | "ls" => {
            super::require(session, ViewId::Minerals, Access::View)?;
            let minerals = &manager.data().minerals;
            if minerals.is_empty() {
                println!("No minerals defined. Use 'geomineral mineral add <name>' to create one.");
                return Ok(());
            }

            println!("Minerals ({}):", minerals.len());
            for (name, m) in minerals {
                println!("  {} - {} ({} t/day)", name, m.location, m.production);
            }
        }

        "show" => {
            super::require(session, ViewId::Minerals, Access::View)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Mineral name is required"))?;
            let m = manager
                .data()
                .minerals
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("Mineral not found: {}", name))?;

            println!("Mineral: {name}");
            println!("  location: {}", m.location);
            println!("  production: {} t/day", m.production);
            println!("  color: {}", m.color);
        }

        other => {
            anyhow::bail!("Unknown mineral action: {}. Valid: add, update, delete, list, show", other);
        }
    }

    Ok(())
}
