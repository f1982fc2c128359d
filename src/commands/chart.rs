// SPDX-License-Identifier: AGPL-3.0-or-later
//! Chart commands - prints the (label, value, color) series a renderer consumes

use crate::aggregate::{self, CountryMetric, SeriesPoint};
use crate::auth::{Access, Session, ViewId};
use crate::manager::DataManager;
use anyhow::Result;

/// Run chart command
pub fn run(
    manager: &DataManager,
    session: &Session,
    action: &str,
    names: Vec<String>,
    metric: Option<String>,
) -> Result<()> {
    super::require(session, ViewId::Charts, Access::View)?;
    let data = manager.data();

    match action {
        "totals" => {
            let t = aggregate::totals(data);
            println!("Totals:");
            println!("  mineral production: {} t/day", t.mineral_production);
            println!("  country production: {} tons", t.country_production);
            println!("  country GDP: {} M", t.country_gdp);
        }

        "minerals" => {
            print_series("Mineral production (t/day)", &aggregate::mineral_series(data));
        }

        "countries" => {
            let metric = parse_metric(metric.as_deref().unwrap_or("production"))?;
            print_series(
                &format!("Country {}", metric.as_str()),
                &aggregate::country_series(data, metric),
            );
        }

        "compare" => {
            if names.len() != 2 {
                anyhow::bail!("compare needs exactly two country names");
            }
            let metric = parse_metric(metric.as_deref().unwrap_or("gdp"))?;
            let points = aggregate::compare_countries(data, &names[0], &names[1], metric)?;
            print_series(&format!("{} comparison", metric.as_str()), &points);
        }

        other => {
            anyhow::bail!("Unknown chart action: {}. Valid: totals, minerals, countries, compare", other);
        }
    }

    Ok(())
}

fn parse_metric(s: &str) -> Result<CountryMetric> {
    CountryMetric::parse(s)
        .ok_or_else(|| anyhow::anyhow!("Unknown metric: {}. Valid: production, gdp, projects", s))
}

fn print_series(title: &str, points: &[SeriesPoint]) {
    if points.is_empty() {
        println!("{title}: no data");
        return;
    }

    println!("{} ({} points):", title, points.len());
    for p in points {
        println!("  {} = {} [{}]", p.label, p.value, p.color);
    }
}
