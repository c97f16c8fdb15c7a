//! Unit tests for nav-polyline.
//!
//! Known vectors come from the public description of the polyline format so
//! the codec stays bit-compatible with externally produced routes.

#[cfg(test)]
mod helpers {
    use nav_core::Position;

    /// The three-point example from the format description.
    pub const REFERENCE_ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    pub fn reference_points() -> Vec<Position> {
        vec![
            Position::from_lat_lon(38.5, -120.2),
            Position::from_lat_lon(40.7, -120.95),
            Position::from_lat_lon(43.252, -126.453),
        ]
    }

    pub fn assert_close(a: &[Position], b: &[Position], tol: f64) {
        assert_eq!(a.len(), b.len(), "length mismatch");
        for (i, (p, q)) in a.iter().zip(b).enumerate() {
            assert!(p.approx_eq(q, tol), "point {i}: {p} vs {q}");
        }
    }
}

// ── Decoding ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod decode {
    use super::helpers::*;
    use crate::{Precision, decode};

    #[test]
    fn reference_vector() {
        let points = decode(REFERENCE_ENCODED, Precision::FIVE).unwrap();
        assert_close(&points, &reference_points(), 1e-9);
    }

    #[test]
    fn empty_string_is_empty_line() {
        assert!(decode("", Precision::FIVE).unwrap().is_empty());
        assert!(decode("", Precision::SIX).unwrap().is_empty());
    }

    #[test]
    fn precision_scales_coordinates() {
        // 'A' = 65 - 63 = 2 → zig-zag 1; '?' = 0.
        let p5 = decode("A?", Precision::FIVE).unwrap();
        let p6 = decode("A?", Precision::SIX).unwrap();
        assert!((p5[0].lat - 1e-5).abs() < 1e-15);
        assert!((p6[0].lat - 1e-6).abs() < 1e-15);
        assert_eq!(p5[0].lon, 0.0);
    }

    #[test]
    fn wrong_precision_silently_corrupts() {
        let points = decode(REFERENCE_ENCODED, Precision::SIX).unwrap();
        assert!((points[0].lat - 3.85).abs() < 1e-9);
        assert!((points[0].lon + 12.02).abs() < 1e-9);
    }

    #[test]
    fn decoding_is_restartable() {
        let first  = decode(REFERENCE_ENCODED, Precision::FIVE).unwrap();
        let second = decode(REFERENCE_ENCODED, Precision::FIVE).unwrap();
        assert_eq!(first, second);
    }
}

// ── Malformed input ───────────────────────────────────────────────────────────

#[cfg(test)]
mod malformed {
    use crate::{Precision, PolylineError, decode};

    #[test]
    fn truncated_codeword() {
        // '|' carries the continuation bit, then the input stops.
        let err = decode("_p~iF~ps|", Precision::FIVE).unwrap_err();
        assert!(matches!(err, PolylineError::MalformedGeometry { offset: 9, .. }), "{err:?}");
    }

    #[test]
    fn latitude_without_longitude() {
        let err = decode("_p~iF", Precision::FIVE).unwrap_err();
        assert!(matches!(err, PolylineError::MalformedGeometry { offset: 5, .. }), "{err:?}");
    }

    #[test]
    fn byte_outside_alphabet() {
        let err = decode("_p~iF ps|U", Precision::FIVE).unwrap_err();
        assert!(matches!(err, PolylineError::MalformedGeometry { offset: 5, .. }), "{err:?}");
    }

    #[test]
    fn non_ascii_rejected() {
        assert!(decode("_p~iF~ps|Ué", Precision::FIVE).is_err());
    }

    #[test]
    fn accumulated_coordinate_overflow() {
        // Each latitude codeword is the widest 64-bit delta (i64::MIN); the
        // second one cannot be added to the first.
        let wide = "~~~~~~~~~~~~^";
        let err = decode(&format!("{wide}?{wide}?"), Precision::FIVE).unwrap_err();
        assert_eq!(
            err,
            PolylineError::MalformedGeometry { offset: 14, reason: "coordinate overflows" }
        );
    }

    #[test]
    fn overlong_codeword() {
        let endless = "~".repeat(20);
        assert!(matches!(
            decode(&endless, Precision::FIVE),
            Err(PolylineError::MalformedGeometry { .. })
        ));
    }
}

// ── Encoding ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod encode {
    use nav_core::Position;

    use super::helpers::*;
    use crate::{Precision, PolylineError, encode};

    #[test]
    fn reference_vector() {
        assert_eq!(encode(&reference_points(), Precision::FIVE).unwrap(), REFERENCE_ENCODED);
    }

    #[test]
    fn single_negative_value() {
        // Worked example from the format description: -179.9832104 → "`~oia@".
        let p = Position::from_lat_lon(-179.9832104, 0.0);
        assert_eq!(encode(&[p], Precision::FIVE).unwrap(), "`~oia@?");
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(&[], Precision::SIX).unwrap(), "");
    }

    #[test]
    fn output_alphabet() {
        let s = encode(&reference_points(), Precision::SIX).unwrap();
        assert!(s.bytes().all(|b| (63..=126).contains(&b)));
    }

    #[test]
    fn non_finite_rejected() {
        let points = [Position::from_lat_lon(1.0, 1.0), Position::from_lat_lon(f64::NAN, 0.0)];
        assert_eq!(
            encode(&points, Precision::FIVE),
            Err(PolylineError::NonFiniteCoordinate { index: 1 })
        );
    }
}

// ── Round trip ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod round_trip {
    use nav_core::Position;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::helpers::assert_close;
    use crate::{EncodedPolyline, Precision, decode, encode};

    fn random_track(rng: &mut SmallRng, len: usize) -> Vec<Position> {
        (0..len)
            .map(|_| Position::from_lat_lon(rng.gen_range(-85.0..85.0), rng.gen_range(-180.0..180.0)))
            .collect()
    }

    #[test]
    fn random_tracks_within_resolution() {
        let mut rng = SmallRng::seed_from_u64(42);
        for precision in [Precision::FIVE, Precision::SIX] {
            for len in [1, 2, 17, 250] {
                let points  = random_track(&mut rng, len);
                let encoded = encode(&points, precision).unwrap();
                let decoded = decode(&encoded, precision).unwrap();
                assert_close(&decoded, &points, precision.resolution_deg());
            }
        }
    }

    #[test]
    fn encoded_polyline_wrapper() {
        let points = vec![
            Position::from_lon_lat(-122.41942, 37.77493),
            Position::from_lon_lat(-122.41950, 37.77380),
        ];
        let line = EncodedPolyline::from_points(&points, Precision::SIX).unwrap();
        assert!(!line.is_empty());
        assert_eq!(line.precision, Precision::SIX);
        assert_close(&line.decode().unwrap(), &points, Precision::SIX.resolution_deg());
    }
}

// ── Precision ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod precision {
    use crate::{Precision, PolylineError};

    #[test]
    fn factors() {
        assert_eq!(Precision::FIVE.factor(), 1e5);
        assert_eq!(Precision::SIX.factor(), 1e6);
        assert_eq!(Precision::default(), Precision::FIVE);
        assert_eq!(Precision::SIX.to_string(), "polyline6");
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Precision::new(11), Err(PolylineError::InvalidPrecision(11)));
        assert_eq!(Precision::try_from(6).unwrap(), Precision::SIX);
        assert_eq!(u32::from(Precision::new(7).unwrap()), 7);
    }
}
