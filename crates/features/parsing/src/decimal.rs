use crate::error::ParseError;
use locus_domain::GeoPoint;

/// Splits on runs of commas and whitespace, skipping empty pieces.
pub(crate) fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty())
}

fn number(token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|e| ParseError::Malformed { message: e.to_string().into(), context: Some(token.to_owned().into()) })
}

/// Parses `"<lat>, <lng>"` (or whitespace separated) decimal degrees.
///
/// Tokens after the first two are ignored.
///
/// # Errors
/// [`ParseError::Empty`], [`ParseError::TooFewTokens`], [`ParseError::Malformed`] for a
/// non-numeric component and [`ParseError::OutOfRange`] for impossible coordinates.
///
/// ```rust
/// let point = locus_parsing::parse_decimal("51.5074, -0.1278").unwrap();
/// assert_eq!((point.lat(), point.lng()), (51.5074, -0.1278));
/// ```
pub fn parse_decimal(input: &str) -> Result<GeoPoint, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty { context: None });
    }

    let mut parts = tokens(input);
    let (Some(lat), Some(lng)) = (parts.next(), parts.next()) else {
        return Err(ParseError::TooFewTokens { found: tokens(input).count(), context: None });
    };
    let (lat, lng) = (number(lat)?, number(lng)?);

    GeoPoint::new(lat, lng).ok_or(ParseError::OutOfRange { lat, lng, context: None })
}

/// Whether the first two comma/whitespace separated tokens are both numbers.
pub(crate) fn looks_decimal(input: &str) -> bool {
    let mut parts = tokens(input);
    matches!((parts.next(), parts.next()), (Some(a), Some(b)) if a.parse::<f64>().is_ok() && b.parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_comma_and_space_separators() {
        for input in ["51.5074, -0.1278", "51.5074 -0.1278", " 51.5074,,  -0.1278 ", "51.5074,-0.1278,12"] {
            let point = parse_decimal(input).unwrap();
            assert_eq!((point.lat(), point.lng()), (51.5074, -0.1278), "{input}");
        }
    }

    #[test]
    fn rejections() {
        assert!(matches!(parse_decimal("   "), Err(ParseError::Empty { .. })));
        assert!(matches!(parse_decimal("51.5"), Err(ParseError::TooFewTokens { found: 1, .. })));
        assert!(matches!(parse_decimal("51.5, abc"), Err(ParseError::Malformed { .. })));
        assert!(matches!(parse_decimal("95, 0"), Err(ParseError::OutOfRange { .. })));
        assert!(matches!(parse_decimal("0, 180.5"), Err(ParseError::OutOfRange { .. })));
        assert!(matches!(parse_decimal("NaN, 0"), Err(ParseError::OutOfRange { .. })));
    }

    #[test]
    fn decimal_shape() {
        assert!(looks_decimal("1 2"));
        assert!(looks_decimal("-1.5,2e3"));
        assert!(!looks_decimal("1"));
        assert!(!looks_decimal("1 two"));
    }
}
