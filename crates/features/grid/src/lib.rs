//! # National Grid Conversion
//!
//! Turns Ordnance Survey National Grid references (`TQ 30163 80311`, `SU3715`, ...) into
//! WGS84 latitude/longitude, and back.
//!
//! The pipeline for the forward direction is:
//! 1. [`GridReference::parse`] resolves the two square letters and the digit pairs into
//!    an easting/northing in metres.
//! 2. An inverse transverse Mercator on the Airy 1830 ellipsoid yields OSGB36 latitude and
//!    longitude.
//! 3. A seven-parameter Helmert shift in Cartesian space moves the point onto WGS84.
//!
//! Accuracy is a few metres, which is what a single Helmert transform can deliver across
//! Great Britain.
//!
//! ```rust
//! use locus_grid::grid_to_wgs84;
//!
//! let point = grid_to_wgs84("TQ 30163 80311").unwrap();
//! assert!((point.lat() - 51.5067).abs() < 1e-3);
//! assert!((point.lng() + 0.1259).abs() < 1e-3);
//! ```

mod ellipsoid;
mod error;
mod helmert;
mod projection;
mod reference;

use crate::ellipsoid::{AIRY_1830, WGS84};
use crate::helmert::OSGB36_TO_WGS84;
use crate::projection::NATIONAL_GRID;
use locus_domain::GeoPoint;
use tracing::debug;

pub use error::{GridError, GridErrorExt};
pub use reference::GridReference;

/// Converts a grid reference string to a WGS84 point.
///
/// # Errors
/// Any [`GridError`] produced by [`GridReference::parse`].
pub fn grid_to_wgs84(input: &str) -> Result<GeoPoint, GridError> {
    let reference = GridReference::parse(input)
        .inspect_err(|e| debug!(input, error = %e, "Grid reference rejected"))?;
    let (easting, northing) = reference.easting_northing();
    Ok(osgb36_to_wgs84(easting, northing))
}

/// Converts an OSGB36 easting/northing in metres to a WGS84 point.
#[must_use]
pub fn osgb36_to_wgs84(easting: f64, northing: f64) -> GeoPoint {
    let (phi, lambda) = NATIONAL_GRID.inverse(easting, northing);
    let (phi, lambda) = OSGB36_TO_WGS84.transform(&AIRY_1830, &WGS84, phi, lambda);
    GeoPoint::from_clamped(phi.to_degrees(), lambda.to_degrees())
}

/// Converts a WGS84 point to an OSGB36 easting/northing in metres.
///
/// The result is only meaningful in and around Great Britain; elsewhere it is whatever the
/// projection formulas produce.
#[must_use]
pub fn wgs84_to_osgb36(point: GeoPoint) -> (f64, f64) {
    let (phi, lambda) = OSGB36_TO_WGS84.inverse().transform(
        &WGS84,
        &AIRY_1830,
        point.lat().to_radians(),
        point.lng().to_radians(),
    );
    NATIONAL_GRID.forward(phi, lambda)
}

/// Converts a WGS84 point to a grid reference with `digits` total digits.
///
/// # Errors
/// [`GridError::OddDigits`] or [`GridError::DigitCount`] for an unsupported `digits`, and
/// [`GridError::OutOfGrid`] when the point projects outside the lettered squares.
pub fn wgs84_to_grid(point: GeoPoint, digits: usize) -> Result<GridReference, GridError> {
    let (easting, northing) = wgs84_to_osgb36(point);
    GridReference::from_easting_northing(easting, northing, digits)
        .context(format!("{point}"))
}
