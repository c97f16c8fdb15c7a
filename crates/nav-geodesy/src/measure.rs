//! Great-circle distance, initial bearing, and forward projection.

use nav_core::{Position, Unit};

/// Haversine great-circle distance from `a` to `b`, expressed in `unit`.
///
/// Symmetric in its arguments and exactly `0.0` when `a` and `b` share the
/// same longitude and latitude.
pub fn distance(a: Position, b: Position, unit: Unit) -> f64 {
    let lat1  = a.lat.to_radians();
    let lat2  = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `h` a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    unit.radians_to_length(2.0 * h.sqrt().atan2((1.0 - h).sqrt()))
}

/// Initial great-circle bearing from `a` toward `b`, in degrees clockwise
/// from north, normalised to `[0, 360)`.
///
/// Returns `0.0` when the two positions coincide.
pub fn bearing(a: Position, b: Position) -> f64 {
    let lat1  = a.lat.to_radians();
    let lat2  = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// The position reached by travelling `dist` (in `unit`) from `origin`
/// along the great circle with initial bearing `bearing_deg`.
///
/// The returned longitude is wrapped to `[-180, 180)`; altitude is not
/// carried over.
pub fn destination(origin: Position, dist: f64, bearing_deg: f64, unit: Unit) -> Position {
    let lat1  = origin.lat.to_radians();
    let lon1  = origin.lon.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = unit.length_to_radians(dist);

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Position::from_lon_lat(wrap_longitude(lon2.to_degrees()), lat2.to_degrees())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
pub(crate) fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs.
    if b >= 360.0 { 0.0 } else { b }
}

#[inline]
fn wrap_longitude(deg: f64) -> f64 {
    if (-180.0..180.0).contains(&deg) {
        return deg;
    }
    (deg + 180.0).rem_euclid(360.0) - 180.0
}
