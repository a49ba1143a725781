use crate::sphere::haversine_distance;
use locus_domain::GeoPoint;
use locus_domain::constants::EARTH_RADIUS_M;

/// Component-wise mean of two points.
///
/// This is the label-anchor midpoint used for drawn segments, not the great-circle
/// midpoint; the two agree closely for the short spans it is used on.
#[must_use]
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    GeoPoint::from_clamped((a.lat() + b.lat()) / 2.0, (a.lng() + b.lng()) / 2.0)
}

/// Total length of a polyline in metres. Fewer than two points have zero length.
#[must_use]
pub fn path_length(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|leg| haversine_distance(leg[0], leg[1])).sum()
}

/// Approximate area of a closed ring in square metres.
///
/// Uses the spherical-excess approximation
/// `|Σ (λ₂ − λ₁)(2 + sin φ₁ + sin φ₂)| · R² / 2`. The ring is closed implicitly; vertex
/// order (clockwise or not) does not matter. Fewer than three vertices have zero area.
#[must_use]
pub fn polygon_area(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let sum: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| {
            let (phi1, phi2) = (p.lat().to_radians(), q.lat().to_radians());
            (q.lng() - p.lng()).to_radians() * (2.0 + phi1.sin() + phi2.sin())
        })
        .sum();

    (sum * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn midpoint_is_component_mean() {
        let m = midpoint(point(10.0, 20.0), point(20.0, 40.0));
        assert!((m.lat() - 15.0).abs() < f64::EPSILON);
        assert!((m.lng() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_inputs_measure_zero() {
        assert!(path_length(&[]).abs() < f64::EPSILON);
        assert!(path_length(&[point(1.0, 1.0)]).abs() < f64::EPSILON);
        assert!(polygon_area(&[point(0.0, 0.0), point(1.0, 1.0)]).abs() < f64::EPSILON);
    }

    #[test]
    fn path_length_sums_legs() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 1.0);
        let c = point(1.0, 1.0);
        let total = path_length(&[a, b, c]);
        let expected = haversine_distance(a, b) + haversine_distance(b, c);
        assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn one_degree_square_at_equator() {
        // ~111.19 km per side on the mean sphere, so roughly 1.236e10 m².
        let square = [point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)];
        let area = polygon_area(&square);
        assert!((area - 1.236e10).abs() / 1.236e10 < 0.01, "got {area}");

        let mut reversed = square;
        reversed.reverse();
        assert!((polygon_area(&reversed) - area).abs() < 1.0);
    }
}
