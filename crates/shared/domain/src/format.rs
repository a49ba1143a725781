use serde::{Deserialize, Serialize};
use std::fmt;

/// The notation a raw location string was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedFormat {
    NationalGrid,
    Postcode,
    ThreeWordAddress,
    DegreesMinutesSeconds,
    Decimal,
    Unknown,
}

impl DetectedFormat {
    /// Every variant, in detection precedence order.
    pub const ALL: [Self; 6] = [
        Self::Postcode,
        Self::NationalGrid,
        Self::ThreeWordAddress,
        Self::DegreesMinutesSeconds,
        Self::Decimal,
        Self::Unknown,
    ];

    /// Label suitable for a "detected format" hint next to an input box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Postcode => "UK Postcode",
            Self::NationalGrid => "OS Grid Reference",
            Self::DegreesMinutesSeconds => "Degrees Minutes Seconds",
            Self::ThreeWordAddress => "What3Words",
            Self::Decimal => "Decimal Lat/Lng",
            Self::Unknown => "Unknown format",
        }
    }

    /// Whether resolving this format needs a network round trip.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        matches!(self, Self::Postcode | Self::ThreeWordAddress)
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
