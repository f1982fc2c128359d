// SPDX-License-Identifier: AGPL-3.0-or-later
//
//! Geomineral library - record management for mineral and country reference data
//!
//! This crate provides the data-management core: three keyed collections
//! (minerals, country profiles, user accounts) held in one write-through
//! JSON store, plus authentication, role-based access, and the aggregate
//! series that dashboards render.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod auth;
pub mod collection;
pub mod commands;
pub mod config;
pub mod manager;
pub mod store;

/// Core data types matching the persisted store layout
pub mod types {
    use crate::collection::RecordCollection;
    use serde::{Deserialize, Serialize};

    // =========================================================================
    // Roles
    // =========================================================================

    /// Access tier controlling which views and actions are permitted
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Role {
        /// Full manage access to minerals, countries, and users
        Administrator,
        /// Read-only access to countries, map, and charts
        Investor,
        /// Read-only access to minerals and charts
        Researcher,
    }

    impl Role {
        /// Get the display name for this role
        #[must_use]
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Administrator => "Administrator",
                Self::Investor => "Investor",
                Self::Researcher => "Researcher",
            }
        }

        /// Parse a role from its display name
        #[must_use]
        pub fn parse(s: &str) -> Option<Self> {
            match s {
                "Administrator" => Some(Self::Administrator),
                "Investor" => Some(Self::Investor),
                "Researcher" => Some(Self::Researcher),
                _ => None,
            }
        }
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// One mineral entry; the mineral name is the collection key
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MineralRecord {
        /// Where the mineral is mined
        #[serde(rename = "Location")]
        pub location: String,
        /// Output in tonnes per day
        #[serde(rename = "Production")]
        pub production: u64,
        /// Display color as #RRGGBB
        #[serde(rename = "Color")]
        pub color: String,
    }

    /// One country profile; the country name is the collection key
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CountryRecord {
        /// Output in tons
        #[serde(rename = "Production")]
        pub production: u64,
        /// GDP in millions
        #[serde(rename = "GDP")]
        pub gdp: u64,
        /// Number of active projects
        #[serde(rename = "Projects")]
        pub projects: u64,
        /// Display color as #RRGGBB
        #[serde(rename = "Color")]
        pub color: String,
    }

    /// One user account; the username is the collection key
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserRecord {
        /// Plaintext password, compared byte-for-byte
        pub password: String,
        /// Access tier
        pub role: Role,
    }

    // =========================================================================
    // AppData aggregate
    // =========================================================================

    /// The complete persisted document: all three collections
    ///
    /// Each section falls back to its seed defaults when missing from a
    /// loaded document, matching the original store's per-section behavior.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct AppData {
        /// Mineral reference data
        #[serde(rename = "MineralData", default = "default_minerals")]
        pub minerals: RecordCollection<MineralRecord>,
        /// Country profiles
        #[serde(rename = "CountryProfiles", default = "default_countries")]
        pub countries: RecordCollection<CountryRecord>,
        /// User accounts
        #[serde(rename = "Users", default = "default_users")]
        pub users: RecordCollection<UserRecord>,
    }

    impl Default for AppData {
        fn default() -> Self {
            Self {
                minerals: default_minerals(),
                countries: default_countries(),
                users: default_users(),
            }
        }
    }

    /// Seed minerals installed when no store exists
    #[must_use]
    pub fn default_minerals() -> RecordCollection<MineralRecord> {
        let mut minerals = RecordCollection::new();
        minerals.insert(
            "Cobalt",
            MineralRecord {
                location: "Africa, DRC".into(),
                production: 1200,
                color: "#1f77b4".into(),
            },
        );
        minerals.insert(
            "Lithium",
            MineralRecord {
                location: "Africa, Zimbabwe".into(),
                production: 950,
                color: "#ff7f0e".into(),
            },
        );
        minerals.insert(
            "Gold",
            MineralRecord {
                location: "Africa, S.A".into(),
                production: 2500,
                color: "#d4af37".into(),
            },
        );
        minerals
    }

    /// Seed country profiles installed when no store exists
    #[must_use]
    pub fn default_countries() -> RecordCollection<CountryRecord> {
        let mut countries = RecordCollection::new();
        countries.insert(
            "South Africa",
            CountryRecord {
                production: 1000,
                gdp: 35000,
                projects: 5,
                color: "#2ca02c".into(),
            },
        );
        countries.insert(
            "Lesotho",
            CountryRecord {
                production: 600,
                gdp: 18000,
                projects: 3,
                color: "#9467bd".into(),
            },
        );
        countries.insert(
            "Swaziland",
            CountryRecord {
                production: 1200,
                gdp: 41000,
                projects: 4,
                color: "#8c564b".into(),
            },
        );
        countries
    }

    /// Seed user accounts installed when no store exists, one per role
    #[must_use]
    pub fn default_users() -> RecordCollection<UserRecord> {
        let mut users = RecordCollection::new();
        users.insert(
            "admin",
            UserRecord {
                password: "adminpass".into(),
                role: Role::Administrator,
            },
        );
        users.insert(
            "investor",
            UserRecord {
                password: "investorpass".into(),
                role: Role::Investor,
            },
        );
        users.insert(
            "researcher",
            UserRecord {
                password: "researcherpass".into(),
                role: Role::Researcher,
            },
        );
        users
    }
}

/// Error taxonomy for the data-management core
pub mod error {
    use thiserror::Error;

    /// Failures surfaced by the data-management core
    ///
    /// All variants are local and recoverable; none crash the process.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum DataError {
        /// Create was called with a key that is already present
        #[error("record already exists: {0}")]
        DuplicateKey(String),
        /// A required field was blank or malformed
        #[error("invalid {field}: {reason}")]
        Validation {
            /// Which field failed validation
            field: &'static str,
            /// Why it was rejected
            reason: String,
        },
        /// Update or lookup referenced an absent key
        #[error("record not found: {0}")]
        NotFound(String),
        /// Comparison requested with identical or missing entities
        #[error("invalid comparison: {0}")]
        InvalidComparison(String),
        /// The store write failed; the in-memory state has been rolled back
        #[error("store write failed, the change was not applied: {0}")]
        Persistence(String),
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::DataError;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
