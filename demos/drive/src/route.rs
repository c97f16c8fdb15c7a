//! Downtown Mobile, AL demo route.
//!
//! Three maneuvers and an arrival: north on Royal St, east on Government St,
//! south on Water St.  Step distances are measured from the encoded
//! geometry and rounded to 0.1 m, the way a directions service reports them.

use anyhow::Result;

use nav_core::{Position, Properties, Unit};
use nav_geodesy::line_distance;
use nav_polyline::{Precision, decode, encode};
use nav_progress::{LegStep, Route, RouteLeg};

/// Urban driving speed used to fill in step durations, m/s.
const SPEED_MPS: f64 = 12.5;

const STEPS: [(&str, &[(f64, f64)]); 4] = [
    ("Royal St",      &[(-88.0430, 30.6900), (-88.0430, 30.6925), (-88.0430, 30.6950)]),
    ("Government St", &[(-88.0430, 30.6950), (-88.0405, 30.6950), (-88.0380, 30.6950)]),
    ("Water St",      &[(-88.0380, 30.6950), (-88.0380, 30.6920)]),
    ("",              &[(-88.0380, 30.6920), (-88.0380, 30.6920)]),
];

/// Build the demo route at `precision`.
pub fn build_route(precision: Precision) -> Result<Route> {
    let mut overview = Vec::new();
    let mut steps    = Vec::with_capacity(STEPS.len());

    for (name, coords) in STEPS {
        let points: Vec<Position> = coords
            .iter()
            .map(|&(lon, lat)| Position::from_lon_lat(lon, lat))
            .collect();

        let geometry = encode(&points, precision)?;
        let meters   = (line_distance(&decode(&geometry, precision)?, Unit::Meters) * 10.0).round() / 10.0;

        steps.push(LegStep::new(geometry, meters, meters / SPEED_MPS).with_name(name));
        overview.extend(points);
    }

    let mut leg = RouteLeg::new(steps);
    leg.summary = "Royal St, Government St".to_owned();

    let mut properties = Properties::new();
    properties.insert("source", "drive demo");

    Ok(Route::new(vec![leg], precision)
        .with_geometry(encode(&overview, precision)?)
        .with_properties(properties))
}
