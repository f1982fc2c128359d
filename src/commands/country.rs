// SPDX-License-Identifier: AGPL-3.0-or-later
//! Country profile commands - the country cards view

use crate::auth::{Access, Session, ViewId};
use crate::manager::DataManager;
use crate::types::CountryRecord;
use anyhow::Result;

/// Arguments for country commands
pub struct CountryArgs {
    /// Output in tons
    pub production: Option<u64>,
    /// GDP in millions
    pub gdp: Option<u64>,
    /// Number of active projects
    pub projects: Option<u64>,
    /// Display color as #RRGGBB
    pub color: Option<String>,
    /// New name when updating
    pub rename: Option<String>,
}

/// Run country command
pub fn run(
    manager: &mut DataManager,
    session: &Session,
    action: &str,
    name: Option<String>,
    args: CountryArgs,
) -> Result<()> {
    match action {
        "add" | "new" => {
            super::require(session, ViewId::Countries, Access::Manage)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Country name is required"))?;
            let production = args
                .production
                .ok_or_else(|| anyhow::anyhow!("--production is required"))?;
            let gdp = args.gdp.ok_or_else(|| anyhow::anyhow!("--gdp is required"))?;
            let projects = args
                .projects
                .ok_or_else(|| anyhow::anyhow!("--projects is required"))?;
            let color = args.color.ok_or_else(|| anyhow::anyhow!("--color is required"))?;

            manager.add_country(
                &name,
                CountryRecord {
                    production,
                    gdp,
                    projects,
                    color,
                },
            )?;

            println!("Created country: {name}");
            println!("  production: {production} tons");
            println!("  GDP: {gdp} M");
            println!("  projects: {projects}");
        }

        "update" | "edit" => {
            super::require(session, ViewId::Countries, Access::Manage)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Country name is required"))?;

            let current = manager
                .data()
                .countries
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("Country not found: {}", name))?
                .clone();

            let record = CountryRecord {
                production: args.production.unwrap_or(current.production),
                gdp: args.gdp.unwrap_or(current.gdp),
                projects: args.projects.unwrap_or(current.projects),
                color: args.color.unwrap_or(current.color),
            };
            let new_name = args.rename.unwrap_or_else(|| name.clone());

            manager.update_country(&name, &new_name, record)?;

            if new_name == name {
                println!("Updated country: {name}");
            } else {
                println!("Updated country: {name} -> {new_name}");
            }
        }

        "delete" | "rm" => {
            super::require(session, ViewId::Countries, Access::Manage)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Country name is required"))?;

            if manager.delete_country(&name)? {
                println!("Deleted country: {name}");
            } else {
                println!("Country not found: {name}");
            }
        }

        "list" | "ls" => {
            super::require(session, ViewId::Countries, Access::View)?;
            let countries = &manager.data().countries;
            if countries.is_empty() {
                println!("No countries defined. Use 'geomineral country add <name>' to create one.");
                return Ok(());
            }

            println!("Countries ({}):", countries.len());
            for (name, c) in countries {
                println!(
                    "  {} - {} tons, GDP {} M, {} projects",
                    name, c.production, c.gdp, c.projects
                );
            }
        }

        "show" => {
            super::require(session, ViewId::Countries, Access::View)?;
            let name = name.ok_or_else(|| anyhow::anyhow!("Country name is required"))?;
            let c = manager
                .data()
                .countries
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("Country not found: {}", name))?;

            println!("Country: {name}");
            println!("  production: {} tons", c.production);
            println!("  GDP: {} M", c.gdp);
            println!("  projects: {}", c.projects);
            println!("  color: {}", c.color);
        }

        other => {
            anyhow::bail!("Unknown country action: {}. Valid: add, update, delete, list, show", other);
        }
    }

    Ok(())
}
