// SPDX-License-Identifier: AGPL-3.0-or-later
//! Login command - prints the dashboard the session's role is entitled to

use crate::auth::{permitted_views, Session};
use anyhow::Result;

/// Run login command
///
/// Authentication already happened when the session was established; this
/// renders the role's permitted views the way a dashboard would gate tiles.
pub fn run(session: &Session) -> Result<()> {
    println!(
        "Signed in as {} ({})",
        session.username,
        session.role.as_str()
    );

    println!("Permitted views:");
    for (view, access) in permitted_views(session.role) {
        println!("  {} ({})", view.as_str(), access.as_str());
    }

    Ok(())
}
