// SPDX-License-Identifier: AGPL-3.0-or-later
//! Authentication and role-based access policy

use crate::types::{AppData, Role};

/// The active username/role pair held for the life of the process
///
/// There is no token or lockout model; "authenticated" simply means the
/// caller holds one of these, passed as explicit context into each view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Username the session was established for
    pub username: String,
    /// Role looked up at authentication time
    pub role: Role,
}

/// Validate credentials against the Users collection
///
/// Succeeds iff the username is present and the password matches exactly
/// (case-sensitive plaintext comparison). Returns `None` for both
/// unknown-user and wrong-password so callers cannot distinguish them.
#[must_use]
pub fn authenticate(data: &AppData, username: &str, password: &str) -> Option<Session> {
    let user = data.users.get(username)?;
    if user.password != password {
        return None;
    }
    Some(Session {
        username: username.to_string(),
        role: user.role,
    })
}

// =========================================================================
// Access policy
// =========================================================================

/// The views a dashboard can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// Mineral record cards
    Minerals,
    /// Country profile cards
    Countries,
    /// User account table
    Users,
    /// Interactive map
    Map,
    /// Generated charts
    Charts,
}

impl ViewId {
    /// Display name for dashboards
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minerals => "minerals",
            Self::Countries => "countries",
            Self::Users => "users",
            Self::Map => "map",
            Self::Charts => "charts",
        }
    }
}

/// Whether a view is read-only or exposes create/update/delete affordances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Read-only rendering
    View,
    /// Read plus create/update/delete
    Manage,
}

impl Access {
    /// Display name for dashboards
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Manage => "manage",
        }
    }
}

/// The total role-to-views table; there is no default-allow
///
/// Anything absent from a role's row is denied outright.
#[must_use]
pub fn permitted_views(role: Role) -> Vec<(ViewId, Access)> {
    match role {
        Role::Administrator => vec![
            (ViewId::Minerals, Access::Manage),
            (ViewId::Map, Access::View),
            (ViewId::Countries, Access::Manage),
            (ViewId::Charts, Access::View),
            (ViewId::Users, Access::Manage),
        ],
        Role::Investor => vec![
            (ViewId::Map, Access::View),
            (ViewId::Countries, Access::View),
            (ViewId::Charts, Access::View),
        ],
        Role::Researcher => vec![
            (ViewId::Minerals, Access::View),
            (ViewId::Charts, Access::View),
        ],
    }
}

/// Whether `role` may use `view` at the requested access level
///
/// `Manage` on a view implies `View` on it.
#[must_use]
pub fn permits(role: Role, view: ViewId, access: Access) -> bool {
    permitted_views(role).iter().any(|&(v, a)| {
        v == view && (a == access || (a == Access::Manage && access == Access::View))
    })
}
