use locus_parsing::{DetectedFormat, ParseError, detect_format, parse_decimal, parse_dms};
use proptest::prelude::*;

#[test]
fn london_in_every_textual_notation() {
    let decimal = parse_decimal("51.5074, -0.1278").unwrap();
    assert_eq!((decimal.lat(), decimal.lng()), (51.5074, -0.1278));
    assert_eq!(detect_format("51.5074, -0.1278"), Some(DetectedFormat::Decimal));

    let dms = parse_dms("51°30'26.4\"N, 0°7'40.1\"W").unwrap();
    assert!((dms.lat() - 51.507_333).abs() < 1e-6);
    assert!((dms.lng() + 0.127_806).abs() < 1e-6);
    assert_eq!(detect_format("51°30'26.4\"N, 0°7'40.1\"W"), Some(DetectedFormat::DegreesMinutesSeconds));
}

#[test]
fn southern_and_western_letters_negate() {
    let p = parse_dms("33 52 4 S 151 12 30 E").unwrap();
    assert!((p.lat() + (33.0 + 52.0 / 60.0 + 4.0 / 3600.0)).abs() < 1e-9);
    assert!((p.lng() - (151.0 + 12.0 / 60.0 + 30.0 / 3600.0)).abs() < 1e-9);
}

#[test]
fn empty_input_is_not_classified() {
    assert_eq!(detect_format(""), None);
    assert!(matches!(parse_dms(" \t"), Err(ParseError::Empty { .. })));
}

proptest! {
    #[test]
    fn detector_is_total(input in any::<String>()) {
        let detected = detect_format(&input);
        prop_assert_eq!(detected.is_none(), input.trim().is_empty());
    }

    #[test]
    fn parsers_never_panic_or_escape_range(input in any::<String>()) {
        for point in [parse_decimal(&input), parse_dms(&input)].into_iter().flatten() {
            prop_assert!((-90.0..=90.0).contains(&point.lat()));
            prop_assert!((-180.0..=180.0).contains(&point.lng()));
        }
    }

    #[test]
    fn dms_arithmetic(
        deg in 0u32..90,
        min in 0u32..60,
        sec in 0.0f64..60.0,
        lng in 0u32..180,
        south in any::<bool>(),
    ) {
        let hemi = if south { 'S' } else { 'N' };
        let text = format!("{deg}°{min}'{sec:.3}\"{hemi} {lng}°0'0\"E");
        let point = parse_dms(&text).unwrap();

        let seconds: f64 = format!("{sec:.3}").parse().unwrap();
        let expected = f64::from(deg) + f64::from(min) / 60.0 + seconds / 3600.0;
        let expected = if south { -expected } else { expected };
        prop_assert!((point.lat() - expected).abs() < 1e-9, "{} -> {}", text, point);
        prop_assert!((point.lng() - f64::from(lng)).abs() < 1e-9);
    }
}
