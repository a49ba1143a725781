use locus_domain::GeoPoint;
use locus_grid::{GridError, GridReference, grid_to_wgs84, osgb36_to_wgs84, wgs84_to_grid, wgs84_to_osgb36};
use proptest::prelude::*;

// Within about a centimetre on the ground.
const TOLERANCE_DEG: f64 = 1e-7;

fn assert_near(point: GeoPoint, lat: f64, lng: f64) {
    assert!(
        (point.lat() - lat).abs() < TOLERANCE_DEG && (point.lng() - lng).abs() < TOLERANCE_DEG,
        "expected {lat}, {lng}; got {point}"
    );
}

#[test]
fn central_london() {
    assert_near(grid_to_wgs84("TQ3016380311").unwrap(), 51.506_748_191, -0.125_892_160);
    assert_near(grid_to_wgs84("tq 30163 80311").unwrap(), 51.506_748_191, -0.125_892_160);
}

#[test]
fn references_across_the_squares() {
    assert_near(grid_to_wgs84("SU3715").unwrap(), 50.933_267_678, -1.474_846_788);
    assert_near(grid_to_wgs84("NN1665071250").unwrap(), 56.796_556_472, -5.003_930_406);
    assert_near(grid_to_wgs84("TG5140913177").unwrap(), 52.657_976_595, 1.716_038_415);
    assert_near(grid_to_wgs84("HP4000012000").unwrap(), 60.788_951_440, -1.267_161_705);
}

#[test]
fn unknown_letters_are_rejected() {
    assert!(matches!(grid_to_wgs84("ZZ99999999"), Err(GridError::UnknownLetter { .. })));
}

#[test]
fn wgs84_point_maps_back_to_its_reference() {
    let point = osgb36_to_wgs84(530_163.5, 180_311.5);
    let reference = wgs84_to_grid(point, 10).unwrap();
    assert_eq!(reference.to_string(), "TQ 30163 80311");
    assert_eq!(reference, "TQ3016380311".parse::<GridReference>().unwrap());

    assert_eq!(wgs84_to_grid(point, 4).unwrap().to_string(), "TQ 30 80");
}

#[test]
fn points_far_from_britain_are_out_of_grid() {
    let sydney = GeoPoint::new(-33.8688, 151.2093).unwrap();
    assert!(matches!(wgs84_to_grid(sydney, 10), Err(GridError::OutOfGrid { .. })));
}

proptest! {
    #[test]
    fn easting_northing_round_trip_within_centimetres(
        easting in 100_000.0f64..650_000.0,
        northing in 10_000.0f64..1_200_000.0,
    ) {
        let (e, n) = wgs84_to_osgb36(osgb36_to_wgs84(easting, northing));
        prop_assert!((e - easting).abs() < 0.05, "easting {} -> {}", easting, e);
        prop_assert!((n - northing).abs() < 0.05, "northing {} -> {}", northing, n);
    }

    #[test]
    fn parsed_references_display_and_reparse(
        letters in prop::sample::select(vec!["SV", "SU", "TQ", "NN", "HP", "TG", "NT"]),
        digits in prop::collection::vec(0u8..10, 1..=5),
        more in prop::collection::vec(0u8..10, 5),
    ) {
        let half = digits.len();
        let text: String = digits.iter().chain(more.iter().take(half)).map(|d| char::from(b'0' + d)).collect();
        let reference = GridReference::parse(&format!("{letters}{text}")).unwrap();
        prop_assert_eq!(reference.digits(), half * 2);
        prop_assert_eq!(GridReference::parse(&reference.to_string()).unwrap(), reference);
    }
}
