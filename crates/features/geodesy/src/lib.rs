//! # Geodesy Primitives
//!
//! Spherical-Earth math on a sphere of mean radius [`EARTH_RADIUS_M`]. Everything here is a
//! pure, total function over finite inputs: no allocation beyond returned vectors, no errors.
//!
//! * [`destination_point`] / [`bearing_to`]: the great-circle direct and inverse azimuth
//!   formulas that fan drawing and radial measurement handles are built on.
//! * [`haversine_distance`], [`path_length`], [`polygon_area`], [`midpoint`]: measurement
//!   helpers for drawn shapes.
//! * [`sector_outline`]: the closed ring describing a directional coverage fan.
//!
//! ```rust
//! use locus_domain::GeoPoint;
//! use locus_geodesy::{bearing_to, destination_point};
//!
//! let origin = GeoPoint::new(51.5, -0.12).unwrap();
//! let target = destination_point(origin, 45.0, 1_000.0);
//! assert!((bearing_to(origin, target) - 45.0).abs() < 0.01);
//! ```

mod measure;
mod sector;
mod sphere;

pub use locus_domain::constants::EARTH_RADIUS_M;
pub use measure::{midpoint, path_length, polygon_area};
pub use sector::{DEFAULT_BEAMWIDTH_DEG, sector_outline};
pub use sphere::{bearing_to, destination_point, haversine_distance};
