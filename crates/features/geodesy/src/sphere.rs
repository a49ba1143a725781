use locus_domain::GeoPoint;
use locus_domain::constants::EARTH_RADIUS_M;

/// Point reached by travelling `distance_m` metres from `origin` along the great circle
/// leaving at `bearing_deg` (clockwise from north).
///
/// The bearing is taken modulo 360, so `-90` and `270` are the same heading. The
/// returned longitude is normalised into `(-180, 180]`.
#[must_use]
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.rem_euclid(360.0).to_radians();
    let phi1 = origin.lat().to_radians();
    let lambda1 = origin.lng().to_radians();

    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::from_clamped(phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}

/// Initial great-circle bearing from `a` to `b`, in degrees within `[0, 360)`.
///
/// Coincident points yield `0`.
#[must_use]
pub fn bearing_to(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_lambda = (b.lng() - a.lng()).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    // `rem_euclid` can round a tiny negative up to exactly 360.0; this form cannot.
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Great-circle distance between two points in metres (haversine formula).
#[must_use]
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = (b.lng() - a.lng()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

fn normalize_longitude(lng: f64) -> f64 {
    let wrapped = (lng + 540.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { 180.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn zero_distance_returns_origin() {
        let origin = point(51.5074, -0.1278);
        let dest = destination_point(origin, 123.0, 0.0);
        assert!((dest.lat() - origin.lat()).abs() < 1e-12);
        assert!((dest.lng() - origin.lng()).abs() < 1e-12);
    }

    #[test]
    fn due_north_moves_latitude_only() {
        // One degree of arc on the mean sphere.
        let one_degree = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        let dest = destination_point(point(10.0, 20.0), 0.0, one_degree);
        assert!((dest.lat() - 11.0).abs() < 1e-9);
        assert!((dest.lng() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_is_wrapped_modulo_360() {
        let origin = point(40.0, -3.0);
        let a = destination_point(origin, -90.0, 5_000.0);
        let b = destination_point(origin, 270.0, 5_000.0);
        let c = destination_point(origin, 630.0, 5_000.0);
        assert!((a.lat() - b.lat()).abs() < 1e-12 && (a.lng() - b.lng()).abs() < 1e-12);
        assert!((b.lat() - c.lat()).abs() < 1e-12 && (b.lng() - c.lng()).abs() < 1e-12);
    }

    #[test]
    fn crossing_the_antimeridian_wraps_longitude() {
        let dest = destination_point(point(0.0, 179.9), 90.0, 50_000.0);
        assert!(dest.lng() < -179.0 && dest.lng() > -180.0, "got {}", dest.lng());

        let dest = destination_point(point(0.0, -179.9), 270.0, 50_000.0);
        assert!(dest.lng() > 179.0 && dest.lng() <= 180.0, "got {}", dest.lng());
    }

    #[test]
    fn longitude_normalisation_prefers_positive_180() {
        assert!((normalize_longitude(-180.0) - 180.0).abs() < f64::EPSILON);
        assert!((normalize_longitude(180.0) - 180.0).abs() < f64::EPSILON);
        assert!((normalize_longitude(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_longitude(-540.0) - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cardinal_bearings() {
        let origin = point(0.0, 0.0);
        assert!((bearing_to(origin, point(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing_to(origin, point(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing_to(origin, point(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing_to(origin, point(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_points_have_zero_bearing() {
        let p = point(51.0, 1.0);
        let bearing = bearing_to(p, p);
        assert!(bearing.is_finite());
        assert!(bearing.abs() < f64::EPSILON);
    }

    #[test]
    fn london_to_paris_distance() {
        // Big Ben to the Eiffel Tower, ~340.6 km on the mean sphere.
        let london = point(51.5007, -0.1246);
        let paris = point(48.8584, 2.2945);
        let d = haversine_distance(london, paris);
        assert!((d - 340_600.0).abs() < 1_500.0, "got {d}");
    }
}
