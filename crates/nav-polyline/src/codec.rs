//! Polyline text codec.
//!
//! # Wire format
//!
//! For each point, latitude then longitude:
//!
//! ```text
//! v      = round(coord × 10^precision) − previous v      (i64 delta)
//! zz     = (v << 1) ^ (v >> 63)                           (zig-zag)
//! groups = zz split into 5-bit chunks, least significant first
//! char   = chunk | 0x20 (if more chunks follow), then + 63
//! ```
//!
//! Every emitted byte is therefore in `'?'..='~'` (63..=126).

use nav_core::Position;

use crate::{Precision, PolylineError, PolylineResult};

const CHAR_OFFSET: u8 = 63;
const CONTINUATION: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;

/// Decode `encoded` into an ordered list of positions.
///
/// An empty string decodes to an empty list.
///
/// # Errors
///
/// [`PolylineError::MalformedGeometry`] if the string ends inside a
/// codeword, contains a byte outside `'?'..='~'`, carries a latitude with
/// no paired longitude, or a codeword or running coordinate overflows 64
/// bits.
pub fn decode(encoded: &str, precision: Precision) -> PolylineResult<Vec<Position>> {
    let bytes  = encoded.as_bytes();
    let factor = precision.factor();

    // Rough capacity guess: short deltas take 2–4 bytes per coordinate.
    let mut points = Vec::with_capacity(bytes.len() / 6);
    let mut cursor = 0usize;
    let mut lat    = 0i64;
    let mut lon    = 0i64;

    while cursor < bytes.len() {
        lat = accumulate(lat, bytes, &mut cursor)?;
        if cursor >= bytes.len() {
            return Err(PolylineError::MalformedGeometry {
                offset: cursor,
                reason: "latitude without a paired longitude",
            });
        }
        lon = accumulate(lon, bytes, &mut cursor)?;

        points.push(Position::from_lat_lon(lat as f64 / factor, lon as f64 / factor));
    }

    Ok(points)
}

/// Encode `points` at `precision`.
///
/// # Errors
///
/// [`PolylineError::NonFiniteCoordinate`] if any latitude or longitude is
/// NaN or infinite.
pub fn encode(points: &[Position], precision: Precision) -> PolylineResult<String> {
    let factor = precision.factor();

    let mut out      = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for (index, p) in points.iter().enumerate() {
        if !p.lat.is_finite() || !p.lon.is_finite() {
            return Err(PolylineError::NonFiniteCoordinate { index });
        }
        let lat = (p.lat * factor).round() as i64;
        let lon = (p.lon * factor).round() as i64;

        push_value(lat - prev_lat, &mut out);
        push_value(lon - prev_lon, &mut out);

        prev_lat = lat;
        prev_lon = lon;
    }

    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Add the next delta to `total`.  Overflow is reported at the offset where
/// the offending codeword starts.
fn accumulate(total: i64, bytes: &[u8], cursor: &mut usize) -> PolylineResult<i64> {
    let start = *cursor;
    let delta = next_value(bytes, cursor)?;
    total.checked_add(delta).ok_or(PolylineError::MalformedGeometry {
        offset: start,
        reason: "coordinate overflows",
    })
}

/// Read one zig-zag varint starting at `*cursor` and advance past it.
fn next_value(bytes: &[u8], cursor: &mut usize) -> PolylineResult<i64> {
    let mut result = 0u64;
    let mut shift  = 0u32;

    loop {
        let Some(&byte) = bytes.get(*cursor) else {
            return Err(PolylineError::MalformedGeometry {
                offset: *cursor,
                reason: "input ends inside a codeword",
            });
        };
        if !(CHAR_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::MalformedGeometry {
                offset: *cursor,
                reason: "byte outside the polyline alphabet",
            });
        }
        if shift >= 64 {
            return Err(PolylineError::MalformedGeometry {
                offset: *cursor,
                reason: "codeword overflows 64 bits",
            });
        }

        let chunk = (byte - CHAR_OFFSET) as u64;
        *cursor += 1;

        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    // Undo zig-zag: even → non-negative, odd → negative.
    let magnitude = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !magnitude } else { magnitude })
}

/// Append the zig-zag varint encoding of `delta` to `out`.
fn push_value(delta: i64, out: &mut String) {
    let mut v = ((delta << 1) ^ (delta >> 63)) as u64;
    while v >= CONTINUATION {
        out.push(((CONTINUATION | (v & CHUNK_MASK)) as u8 + CHAR_OFFSET) as char);
        v >>= 5;
    }
    out.push((v as u8 + CHAR_OFFSET) as char);
}
