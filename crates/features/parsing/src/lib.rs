//! # Textual Coordinate Parsing
//!
//! Pure, allocation-light parsers for coordinates typed by hand, and the detector that
//! decides which notation a raw string is in.
//!
//! * [`parse_decimal`]: `"51.5074, -0.1278"` style pairs.
//! * [`parse_dms`]: degrees/minutes/seconds with optional hemisphere letters, scanned by a
//!   small hand-written cursor rather than a pattern engine.
//! * [`detect_format`]: ordered shape checks yielding a [`DetectedFormat`].
//!
//! Rejections are ordinary [`ParseError`] values; callers wanting the "no result" form use
//! `.ok()`.

mod decimal;
mod detect;
mod dms;
mod error;

pub use decimal::parse_decimal;
pub use detect::{detect_format, normalize_postcode};
pub use dms::parse_dms;
pub use error::{ParseError, ParseErrorExt};
pub use locus_domain::DetectedFormat;
