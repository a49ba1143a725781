//! # Locus
//!
//! Resolves location strings typed by people into WGS84 coordinates. Decimal pairs,
//! degrees/minutes/seconds, Ordnance Survey grid references, UK postcodes and three-word
//! addresses are all accepted; [`detect_format`] tells them apart and [`Resolver`] routes
//! each to the right parser or geocoding service.
//!
//! Keep this crate thin: it composes the slices, it does not implement parsing or math.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use locus::Resolver;
//! use locus::domain::config::LocusConfig;
//!
//! # async fn example() -> Result<(), locus::ResolveError> {
//! let resolver = Resolver::from_config(&LocusConfig::default())?;
//! let point = resolver.resolve("TQ 30163 80311", None).await;
//! assert!(point.is_some());
//! # Ok(())
//! # }
//! ```

mod error;
mod resolver;

pub use error::{ResolveError, ResolveErrorExt};
pub use locus_domain as domain;
pub use locus_domain::{DetectedFormat, GeoPoint};
pub use locus_kernel as kernel;
pub use locus_parsing::detect_format;
pub use resolver::{BatchEntry, BatchReport, Resolver};

/// The slices, re-exported for callers that want a single building block.
pub mod features {
    pub use locus_geodesy as geodesy;
    pub use locus_grid as grid;
    pub use locus_lookup as lookup;
    pub use locus_parsing as parsing;
}
