//! Viewer positions and distance functions.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Distance between two positions.
///
/// Units are up to the implementation; the ranking bands distances in
/// whatever unit this returns. Closures of the right shape implement it, so
/// tests and callers can inject their own metric.
pub trait DistanceFn {
    fn distance(&self, from: Position, to: Position) -> f64;
}

impl<F> DistanceFn for F
where
    F: Fn(Position, Position) -> f64,
{
    fn distance(&self, from: Position, to: Position) -> f64 {
        self(from, to)
    }
}

/// Great-circle distance in kilometres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceFn for Haversine {
    fn distance(&self, from: Position, to: Position) -> f64 {
        let d_lat = (to.latitude - from.latitude).to_radians();
        let d_lon = (to.longitude - from.longitude).to_radians();
        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero() {
        let p = Position::new(-1.2921, 36.8219);
        assert!(Haversine.distance(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_nairobi_mombasa() {
        let nairobi = Position::new(-1.2921, 36.8219);
        let mombasa = Position::new(-4.0435, 39.6682);
        let d = Haversine.distance(nairobi, mombasa);
        // ~440 km as the crow flies
        assert!((430.0..450.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Position::new(10.0, 20.0);
        let b = Position::new(-5.0, 100.0);
        assert!((Haversine.distance(a, b) - Haversine.distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_closure_distance() {
        let manhattan = |a: Position, b: Position| {
            (a.latitude - b.latitude).abs() + (a.longitude - b.longitude).abs()
        };
        let d = manhattan.distance(Position::new(0.0, 0.0), Position::new(3.0, 4.0));
        assert_eq!(d, 7.0);
    }
}
