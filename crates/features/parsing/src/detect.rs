use crate::decimal::looks_decimal;
use locus_domain::DetectedFormat;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Outward code (1-2 letters, a digit, an optional letter or digit), optional whitespace,
/// inward code (a digit and two letters).
static POSTCODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,2}[0-9][A-Za-z0-9]?\s*[0-9][A-Za-z]{2}$").ok());

/// Major grid letter, minor letter, 2-10 digits. Matched with whitespace removed.
static GRID_REFERENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[STNOHJstnohj][A-Za-z][0-9]{2,10}$").ok());

/// Optional `///` then three alphabetic words joined by dots.
static THREE_WORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:///)?[A-Za-z]+\.[A-Za-z]+\.[A-Za-z]+$").ok());

fn shape_matches(pattern: &LazyLock<Option<Regex>>, input: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(input))
}

/// Classifies a raw location string.
///
/// Returns `None` only for empty or whitespace-only input. Checks run in a fixed order and
/// the first match wins: postcode, national grid, three-word address, degree or hemisphere
/// markers, then a leading numeric pair.
///
/// ```rust
/// use locus_domain::DetectedFormat;
/// use locus_parsing::detect_format;
///
/// assert_eq!(detect_format("SW1A 1AA"), Some(DetectedFormat::Postcode));
/// assert_eq!(detect_format("TQ 30163 80311"), Some(DetectedFormat::NationalGrid));
/// assert_eq!(detect_format("///filled.count.soap"), Some(DetectedFormat::ThreeWordAddress));
/// assert_eq!(detect_format("51.5074, -0.1278"), Some(DetectedFormat::Decimal));
/// assert_eq!(detect_format("  "), None);
/// ```
#[must_use]
pub fn detect_format(input: &str) -> Option<DetectedFormat> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let format = if is_postcode(input) {
        DetectedFormat::Postcode
    } else if is_grid_reference(input) {
        DetectedFormat::NationalGrid
    } else if is_three_word_address(input) {
        DetectedFormat::ThreeWordAddress
    } else if has_dms_marker(input) {
        DetectedFormat::DegreesMinutesSeconds
    } else if looks_decimal(input) {
        DetectedFormat::Decimal
    } else {
        DetectedFormat::Unknown
    };

    trace!(input, format = ?format, "Detected location format");
    Some(format)
}

/// Uppercases a postcode and drops all whitespace, e.g. `"sw1a 1aa"` to `"SW1A1AA"`.
#[must_use]
pub fn normalize_postcode(postcode: &str) -> String {
    postcode.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase).collect()
}

fn is_postcode(input: &str) -> bool {
    shape_matches(&POSTCODE, input)
}

fn is_grid_reference(input: &str) -> bool {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    shape_matches(&GRID_REFERENCE, &compact)
}

fn is_three_word_address(input: &str) -> bool {
    shape_matches(&THREE_WORDS, input)
}

fn has_dms_marker(input: &str) -> bool {
    input.chars().any(|c| {
        matches!(c.to_ascii_uppercase(), '°' | 'º' | '\'' | '’' | '′' | '"' | '”' | '″' | 'N' | 'S' | 'E' | 'W')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postcode_shapes() {
        for pc in ["SW1A 1AA", "sw1a1aa", "M1 1AE", "M11AE", "B33 8TH", "CR2 6XH", "DN55  1PT", "EC1A 1BB"] {
            assert!(is_postcode(pc), "{pc}");
        }
        for not in ["SW1A 1A", "1AA 1AA", "ABC1 1AA", "SW1A1 1AA", "SW1A 1AA X", "M 1AE", "M1 1A€"] {
            assert!(!is_postcode(not), "{not}");
        }
    }

    #[test]
    fn grid_shapes() {
        assert!(is_grid_reference("TQ3016380311"));
        assert!(is_grid_reference("tq 301 803"));
        assert!(is_grid_reference("SU12"));
        assert!(!is_grid_reference("ZZ99999999"));
        assert!(!is_grid_reference("TQ1"));
        assert!(!is_grid_reference("TQ12345678901"));
    }

    #[test]
    fn three_word_shapes() {
        assert!(is_three_word_address("filled.count.soap"));
        assert!(is_three_word_address("///Filled.Count.Soap"));
        assert!(!is_three_word_address("//filled.count.soap"));
        assert!(!is_three_word_address("filled.count"));
        assert!(!is_three_word_address("filled.count.soap.extra"));
        assert!(!is_three_word_address("filled..soap"));
    }

    #[test]
    fn precedence() {
        assert_eq!(detect_format("51°30'N 0°7'W"), Some(DetectedFormat::DegreesMinutesSeconds));
        assert_eq!(detect_format("51.5 N, 0.12 W"), Some(DetectedFormat::DegreesMinutesSeconds));
        assert_eq!(detect_format("ZZ99999999"), Some(DetectedFormat::Unknown));
        assert_eq!(detect_format("12 abc"), Some(DetectedFormat::Unknown));
        // `SE` is a hemisphere pair, but the grid shape wins.
        assert_eq!(detect_format("SE 123 456"), Some(DetectedFormat::NationalGrid));
    }

    #[test]
    fn shape_patterns_compile() {
        assert!(POSTCODE.is_some());
        assert!(GRID_REFERENCE.is_some());
        assert!(THREE_WORDS.is_some());
    }

    #[test]
    fn shapes_are_ascii_only() {
        // Kelvin sign and long s fold to K/S under Unicode case-insensitivity.
        assert!(!is_postcode("\u{212A}1 1AE"));
        assert!(!is_grid_reference("\u{17F}U3715"));
        assert!(!is_three_word_address("filled.count.s\u{f6}ap"));
        assert!(!is_postcode("M\u{661} 1AE"));
    }

    #[test]
    fn normalizes_postcodes() {
        assert_eq!(normalize_postcode(" sw1a\t1aa "), "SW1A1AA");
    }
}
