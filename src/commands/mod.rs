// SPDX-License-Identifier: AGPL-3.0-or-later
//
//! Command implementations - the role-gated views over the data core

pub mod chart;
pub mod completions;
pub mod country;
pub mod dashboard;
pub mod export;
pub mod map;
pub mod mineral;
pub mod signup;
pub mod user;

use crate::auth::{self, Access, Session, ViewId};
use anyhow::Result;

/// Reject the command unless the session's role permits the view/access pair
pub(crate) fn require(session: &Session, view: ViewId, access: Access) -> Result<()> {
    if !auth::permits(session.role, view, access) {
        anyhow::bail!(
            "Access denied: role {} does not permit {} on {}",
            session.role.as_str(),
            access.as_str(),
            view.as_str()
        );
    }
    Ok(())
}
