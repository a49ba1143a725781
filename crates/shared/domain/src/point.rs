use crate::constants::{LAT_RANGE, LNG_RANGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// The only way to obtain one is through [`GeoPoint::new`] (or deserialization, which
/// runs the same checks), so both components are always finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Builds a point, returning `None` unless `lat` is in `[-90, 90]` and `lng` in `[-180, 180]`.
    ///
    /// # Example
    /// ```rust
    /// use locus_domain::GeoPoint;
    ///
    /// assert!(GeoPoint::new(51.5074, -0.1278).is_some());
    /// assert!(GeoPoint::new(95.0, 0.0).is_none());
    /// assert!(GeoPoint::new(f64::NAN, 0.0).is_none());
    /// ```
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        (LAT_RANGE.contains(&lat) && LNG_RANGE.contains(&lng)).then_some(Self { lat, lng })
    }

    /// Builds a point from components that are in range up to floating-point rounding.
    ///
    /// Intended for producers whose arithmetic already guarantees the bounds (spherical
    /// trigonometry, datum transforms) and only needs to absorb a stray ulp. Components
    /// are clamped into range; a NaN component becomes `0.0`.
    #[must_use]
    pub fn from_clamped(lat: f64, lng: f64) -> Self {
        let clamp = |value: f64, limit: f64| {
            if value.is_nan() { 0.0 } else { value.clamp(-limit, limit) }
        };
        Self { lat: clamp(lat, 90.0), lng: clamp(lng, 180.0) }
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Rejected latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidPoint {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for InvalidPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate out of range: lat {} lng {}", self.lat, self.lng)
    }
}

impl std::error::Error for InvalidPoint {}

#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = InvalidPoint;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng).ok_or(InvalidPoint { lat: raw.lat, lng: raw.lng })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(GeoPoint::new(90.0, 180.0).is_some());
        assert!(GeoPoint::new(-90.0, -180.0).is_some());
        assert!(GeoPoint::new(90.000_001, 0.0).is_none());
        assert!(GeoPoint::new(0.0, -180.000_001).is_none());
    }

    #[test]
    fn non_finite_components_are_rejected() {
        assert!(GeoPoint::new(f64::INFINITY, 0.0).is_none());
        assert!(GeoPoint::new(0.0, f64::NEG_INFINITY).is_none());
        assert!(GeoPoint::new(0.0, f64::NAN).is_none());
    }
}
