//! # Domain Models
//!
//! Pure value types shared by every locus slice, with `serde` as the only dependency.
//! Keep it lean: no I/O, networking, or heavy logic, just data and validation.

pub mod config;
pub mod constants;
pub mod format;
pub mod point;

pub use format::DetectedFormat;
pub use point::{GeoPoint, InvalidPoint};
