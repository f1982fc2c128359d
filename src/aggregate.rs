// SPDX-License-Identifier: AGPL-3.0-or-later
//! Aggregate series for charts and the map
//!
//! Pure, stateless transforms over an `AppData` snapshot. Every function is
//! idempotent and preserves the source collection's order.

use crate::error::DataError;
use crate::types::AppData;

/// One bar/slice of a chart: `(label, value, color)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    /// Record key this point was derived from
    pub label: String,
    /// Metric value
    pub value: u64,
    /// Record's display color
    pub color: String,
}

/// Which country metric a series reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryMetric {
    /// Output in tons
    Production,
    /// GDP in millions
    Gdp,
    /// Active project count
    Projects,
}

impl CountryMetric {
    /// Display name for chart titles
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Gdp => "GDP",
            Self::Projects => "Projects",
        }
    }

    /// Parse a metric from its CLI spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "gdp" => Some(Self::Gdp),
            "projects" => Some(Self::Projects),
            _ => None,
        }
    }
}

/// Sums across both reference datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of mineral production (tonnes/day)
    pub mineral_production: u64,
    /// Sum of country production (tons)
    pub country_production: u64,
    /// Sum of country GDP (millions)
    pub country_gdp: u64,
}

/// Compute totals over the current snapshot
#[must_use]
pub fn totals(data: &AppData) -> Totals {
    Totals {
        mineral_production: data.minerals.iter().map(|(_, m)| m.production).sum(),
        country_production: data.countries.iter().map(|(_, c)| c.production).sum(),
        country_gdp: data.countries.iter().map(|(_, c)| c.gdp).sum(),
    }
}

/// Per-mineral production series in collection order
#[must_use]
pub fn mineral_series(data: &AppData) -> Vec<SeriesPoint> {
    data.minerals
        .iter()
        .map(|(name, m)| SeriesPoint {
            label: name.clone(),
            value: m.production,
            color: m.color.clone(),
        })
        .collect()
}

/// Per-country series for the chosen metric, in collection order
#[must_use]
pub fn country_series(data: &AppData, metric: CountryMetric) -> Vec<SeriesPoint> {
    data.countries
        .iter()
        .map(|(name, c)| SeriesPoint {
            label: name.clone(),
            value: country_value(c.production, c.gdp, c.projects, metric),
            color: c.color.clone(),
        })
        .collect()
}

/// Two-element series comparing `a` and `b` on `metric`
///
/// # Errors
///
/// `InvalidComparison` if the two keys are equal or either is absent.
pub fn compare_countries(
    data: &AppData,
    a: &str,
    b: &str,
    metric: CountryMetric,
) -> Result<[SeriesPoint; 2], DataError> {
    if a == b {
        return Err(DataError::InvalidComparison(format!(
            "cannot compare '{a}' with itself"
        )));
    }

    let point = |name: &str| -> Result<SeriesPoint, DataError> {
        let c = data
            .countries
            .get(name)
            .ok_or_else(|| DataError::InvalidComparison(format!("unknown country '{name}'")))?;
        Ok(SeriesPoint {
            label: name.to_string(),
            value: country_value(c.production, c.gdp, c.projects, metric),
            color: c.color.clone(),
        })
    };

    Ok([point(a)?, point(b)?])
}

fn country_value(production: u64, gdp: u64, projects: u64, metric: CountryMetric) -> u64 {
    match metric {
        CountryMetric::Production => production,
        CountryMetric::Gdp => gdp,
        CountryMetric::Projects => projects,
    }
}

// =========================================================================
// Map markers
// =========================================================================

/// One map marker a tile renderer can place
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Marker label (site description)
    pub label: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Mineral key the marker belongs to
    pub mineral: String,
    /// Production value of that mineral
    pub production: u64,
}

/// Known mining-site coordinates, keyed by mineral name
///
/// The store carries no coordinates, so markers come from this enrichment
/// table joined against the live mineral collection: deleted minerals drop
/// off the map, and user-added minerals appear only when the table knows
/// their site.
const MINERAL_SITES: [(&str, &str, f64, f64); 3] = [
    ("Cobalt", "Kolwezi, DRC", -10.72, 25.47),
    ("Lithium", "Bikita, Zimbabwe", -19.99, 31.43),
    ("Gold", "Witwatersrand, South Africa", -26.20, 28.05),
];

/// Markers for every live mineral with a known site, in collection order
#[must_use]
pub fn map_markers(data: &AppData) -> Vec<MapMarker> {
    data.minerals
        .iter()
        .filter_map(|(name, m)| {
            let (_, site, lat, lon) = MINERAL_SITES
                .iter()
                .find(|(mineral, _, _, _)| *mineral == name.as_str())?;
            Some(MapMarker {
                label: (*site).to_string(),
                lat: *lat,
                lon: *lon,
                mineral: name.clone(),
                production: m.production,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppData, MineralRecord};

    #[test]
    fn test_totals_over_defaults() {
        let data = AppData::default();
        let t = totals(&data);

        assert_eq!(t.mineral_production, 1200 + 950 + 2500);
        assert_eq!(t.country_production, 1000 + 600 + 1200);
        assert_eq!(t.country_gdp, 35000 + 18000 + 41000);
    }

    #[test]
    fn test_series_preserve_collection_order() {
        let data = AppData::default();

        let minerals = mineral_series(&data);
        let labels: Vec<_> = minerals.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Cobalt", "Lithium", "Gold"]);
        assert_eq!(minerals[0].color, "#1f77b4");

        let gdp = country_series(&data, CountryMetric::Gdp);
        assert_eq!(gdp[0].label, "South Africa");
        assert_eq!(gdp[0].value, 35000);
        assert_eq!(gdp[2].value, 41000);
    }

    #[test]
    fn test_compare_same_country_fails() {
        let data = AppData::default();
        let err =
            compare_countries(&data, "South Africa", "South Africa", CountryMetric::Gdp)
                .unwrap_err();
        assert!(matches!(err, DataError::InvalidComparison(_)));
    }

    #[test]
    fn test_compare_unknown_country_fails() {
        let data = AppData::default();
        let err =
            compare_countries(&data, "South Africa", "Atlantis", CountryMetric::Projects)
                .unwrap_err();
        assert!(matches!(err, DataError::InvalidComparison(_)));
    }

    #[test]
    fn test_compare_returns_two_points() {
        let data = AppData::default();
        let [a, b] =
            compare_countries(&data, "Lesotho", "Swaziland", CountryMetric::Production).unwrap();
        assert_eq!((a.label.as_str(), a.value), ("Lesotho", 600));
        assert_eq!((b.label.as_str(), b.value), ("Swaziland", 1200));
    }

    #[test]
    fn test_markers_follow_live_minerals() {
        let mut data = AppData::default();
        assert_eq!(map_markers(&data).len(), 3);

        data.minerals.delete("Gold");
        let markers = map_markers(&data);
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|m| m.mineral != "Gold"));

        // A mineral without a known site gets no marker.
        data.minerals
            .create(
                "Copper",
                MineralRecord {
                    location: "Africa, Zambia".into(),
                    production: 500,
                    color: "#ff0000".into(),
                },
            )
            .unwrap();
        assert_eq!(map_markers(&data).len(), 2);
    }

    #[test]
    fn test_marker_carries_live_production() {
        let mut data = AppData::default();
        data.minerals.rename_and_update(
            "Cobalt",
            "Cobalt",
            MineralRecord {
                location: "Africa, DRC".into(),
                production: 9999,
                color: "#1f77b4".into(),
            },
        );

        let markers = map_markers(&data);
        let cobalt = markers.iter().find(|m| m.mineral == "Cobalt").unwrap();
        assert_eq!(cobalt.production, 9999);
        assert_eq!(cobalt.label, "Kolwezi, DRC");
    }
}
