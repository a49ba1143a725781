//! Numeric constants shared across slices.

/// Mean Earth radius in metres used by every spherical calculation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Latitude bounds of a [`GeoPoint`](crate::GeoPoint), inclusive.
pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Longitude bounds of a [`GeoPoint`](crate::GeoPoint), inclusive.
pub const LNG_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Maximum number of postcodes the bulk endpoint accepts per request.
pub const POSTCODE_BATCH_LIMIT: usize = 100;
