use crate::ellipsoid::{AIRY_1830, Ellipsoid};
use tracing::warn;

const FOOTPOINT_TOLERANCE_M: f64 = 1e-5;
const MAX_FOOTPOINT_ITERATIONS: usize = 100;

/// A transverse Mercator projection on a given ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TransverseMercator {
    ellipsoid: Ellipsoid,
    /// Scale factor on the central meridian.
    f0: f64,
    phi0_deg: f64,
    lambda0_deg: f64,
    /// False easting and northing in metres.
    e0: f64,
    n0: f64,
}

/// The Ordnance Survey National Grid projection on Airy 1830.
pub(crate) const NATIONAL_GRID: TransverseMercator = TransverseMercator {
    ellipsoid: AIRY_1830,
    f0: 0.999_601_271_7,
    phi0_deg: 49.0,
    lambda0_deg: -2.0,
    e0: 400_000.0,
    n0: -100_000.0,
};

/// Radii of curvature at a latitude, both pre-multiplied by `F0`.
struct Curvature {
    nu: f64,
    rho: f64,
    eta2: f64,
}

impl TransverseMercator {
    fn curvature(&self, phi: f64) -> Curvature {
        let af0 = self.ellipsoid.a * self.f0;
        let e2 = self.ellipsoid.e2();
        let denom = 1.0 - e2 * phi.sin().powi(2);
        let nu = af0 / denom.sqrt();
        let rho = af0 * (1.0 - e2) / denom.powf(1.5);
        Curvature { nu, rho, eta2: nu / rho - 1.0 }
    }

    /// Meridional arc from the true origin to `phi`, scaled by `F0`.
    fn meridional_arc(&self, phi: f64) -> f64 {
        let Ellipsoid { a, b } = self.ellipsoid;
        let phi0 = self.phi0_deg.to_radians();
        let n = (a - b) / (a + b);
        let (n2, n3) = (n * n, n * n * n);
        let (dp, sp) = (phi - phi0, phi + phi0);

        b * self.f0
            * ((1.0 + n + 1.25 * n2 + 1.25 * n3) * dp
                - (3.0 * n + 3.0 * n2 + 2.625 * n3) * dp.sin() * sp.cos()
                + (1.875 * n2 + 1.875 * n3) * (2.0 * dp).sin() * (2.0 * sp).cos()
                - (35.0 / 24.0) * n3 * (3.0 * dp).sin() * (3.0 * sp).cos())
    }

    /// Easting/northing in metres to geodetic `(phi, lambda)` in radians on this ellipsoid.
    pub(crate) fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let af0 = self.ellipsoid.a * self.f0;
        let lambda0 = self.lambda0_deg.to_radians();

        let mut phi = self.phi0_deg.to_radians();
        let mut residual = northing - self.n0;
        let mut converged = false;
        for _ in 0..MAX_FOOTPOINT_ITERATIONS {
            phi += residual / af0;
            residual = northing - self.n0 - self.meridional_arc(phi);
            if residual.abs() < FOOTPOINT_TOLERANCE_M {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!(easting, northing, residual, "Foot-point latitude did not converge");
        }

        let Curvature { nu, rho, eta2 } = self.curvature(phi);
        let t = phi.tan();
        let (t2, t4, t6) = (t * t, t.powi(4), t.powi(6));
        let sec = phi.cos().recip();
        let (nu3, nu5, nu7) = (nu.powi(3), nu.powi(5), nu.powi(7));

        let vii = t / (2.0 * rho * nu);
        let viii = t / (24.0 * rho * nu3) * (5.0 + 3.0 * t2 + eta2 - 9.0 * t2 * eta2);
        let ix = t / (720.0 * rho * nu5) * (61.0 + 90.0 * t2 + 45.0 * t4);
        let x = sec / nu;
        let xi = sec / (6.0 * nu3) * (nu / rho + 2.0 * t2);
        let xii = sec / (120.0 * nu5) * (5.0 + 28.0 * t2 + 24.0 * t4);
        let xiia = sec / (5040.0 * nu7) * (61.0 + 662.0 * t2 + 1320.0 * t4 + 720.0 * t6);

        let de = easting - self.e0;
        let lat = phi - vii * de.powi(2) + viii * de.powi(4) - ix * de.powi(6);
        let lng = lambda0 + x * de - xi * de.powi(3) + xii * de.powi(5) - xiia * de.powi(7);
        (lat, lng)
    }

    /// Geodetic `(phi, lambda)` in radians on this ellipsoid to easting/northing in metres.
    pub(crate) fn forward(&self, phi: f64, lambda: f64) -> (f64, f64) {
        let Curvature { nu, rho, eta2 } = self.curvature(phi);
        let (sin, cos) = phi.sin_cos();
        let t2 = phi.tan().powi(2);
        let t4 = t2 * t2;
        let (cos3, cos5) = (cos.powi(3), cos.powi(5));

        let i = self.meridional_arc(phi) + self.n0;
        let ii = nu / 2.0 * sin * cos;
        let iii = nu / 24.0 * sin * cos3 * (5.0 - t2 + 9.0 * eta2);
        let iiia = nu / 720.0 * sin * cos5 * (61.0 - 58.0 * t2 + t4);
        let iv = nu * cos;
        let v = nu / 6.0 * cos3 * (nu / rho - t2);
        let vi = nu / 120.0 * cos5 * (5.0 - 18.0 * t2 + t4 + 14.0 * eta2 - 58.0 * t2 * eta2);

        let p = lambda - self.lambda0_deg.to_radians();
        let northing = i + ii * p.powi(2) + iii * p.powi(4) + iiia * p.powi(6);
        let easting = self.e0 + iv * p + v * p.powi(3) + vi * p.powi(5);
        (easting, northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the Ordnance Survey transverse Mercator guide.
    const GUIDE_E: f64 = 651_409.903;
    const GUIDE_N: f64 = 313_177.270;

    fn dms(d: f64, m: f64, s: f64) -> f64 {
        d + m / 60.0 + s / 3600.0
    }

    #[test]
    fn inverse_matches_guide_example() {
        let (phi, lambda) = NATIONAL_GRID.inverse(GUIDE_E, GUIDE_N);
        assert!((phi.to_degrees() - dms(52.0, 39.0, 27.2531)).abs() < 1e-7);
        assert!((lambda.to_degrees() - dms(1.0, 43.0, 4.5177)).abs() < 1e-7);
    }

    #[test]
    fn forward_matches_guide_example() {
        let phi = dms(52.0, 39.0, 27.2531).to_radians();
        let lambda = dms(1.0, 43.0, 4.5177).to_radians();
        let (e, n) = NATIONAL_GRID.forward(phi, lambda);
        assert!((e - GUIDE_E).abs() < 0.001, "easting {e}");
        assert!((n - GUIDE_N).abs() < 0.001, "northing {n}");
    }

    #[test]
    fn true_origin_maps_to_false_origin() {
        let (e, n) = NATIONAL_GRID.forward(49f64.to_radians(), (-2f64).to_radians());
        assert!((e - 400_000.0).abs() < 1e-6);
        assert!((n + 100_000.0).abs() < 1e-6);
    }
}
