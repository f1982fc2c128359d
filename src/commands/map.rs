// SPDX-License-Identifier: AGPL-3.0-or-later
//! Map command - prints the marker list a tile renderer consumes

use crate::aggregate;
use crate::auth::{Access, Session, ViewId};
use crate::manager::DataManager;
use anyhow::Result;

/// Run map command
///
/// The tile source is purely a rendering concern; it is echoed for the
/// renderer and has no effect on the marker list.
pub fn run(manager: &DataManager, session: &Session, tiles: &str) -> Result<()> {
    super::require(session, ViewId::Map, Access::View)?;

    match tiles {
        "satellite" | "road" | "terrain" => {}
        other => {
            anyhow::bail!("Unknown tile source: {}. Valid: satellite, road, terrain", other);
        }
    }

    let markers = aggregate::map_markers(manager.data());
    if markers.is_empty() {
        println!("No markers available (tiles: {tiles})");
        return Ok(());
    }

    println!("Markers ({}) [tiles: {}]:", markers.len(), tiles);
    for m in &markers {
        println!(
            "  {} @ ({:.2}, {:.2}) - {} ({} t/day)",
            m.label, m.lat, m.lon, m.mineral, m.production
        );
    }

    Ok(())
}
