/// Fixed number of refinement passes when converting Cartesian back to geodetic latitude.
const GEODETIC_ITERATIONS: usize = 10;

/// A reference ellipsoid given by its semi-major and semi-minor axes in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ellipsoid {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

pub(crate) const AIRY_1830: Ellipsoid = Ellipsoid { a: 6_377_563.396, b: 6_356_256.909 };
pub(crate) const WGS84: Ellipsoid = Ellipsoid { a: 6_378_137.0, b: 6_356_752.3141 };

/// Earth-centred Cartesian coordinates in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cartesian {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Ellipsoid {
    /// First eccentricity squared.
    pub(crate) fn e2(&self) -> f64 {
        1.0 - (self.b * self.b) / (self.a * self.a)
    }

    /// Geodetic (radians, zero height) to Cartesian.
    pub(crate) fn to_cartesian(&self, phi: f64, lambda: f64) -> Cartesian {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let nu = self.a / (1.0 - self.e2() * sin_phi * sin_phi).sqrt();

        Cartesian {
            x: nu * cos_phi * lambda.cos(),
            y: nu * cos_phi * lambda.sin(),
            z: nu * (1.0 - self.e2()) * sin_phi,
        }
    }

    /// Cartesian to geodetic `(phi, lambda)` in radians. Height is discarded.
    pub(crate) fn to_geodetic(&self, c: Cartesian) -> (f64, f64) {
        let e2 = self.e2();
        let p = c.x.hypot(c.y);

        let mut phi = c.z.atan2(p * (1.0 - e2));
        for _ in 0..GEODETIC_ITERATIONS {
            let sin_phi = phi.sin();
            let nu = self.a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
            phi = (c.z + e2 * nu * sin_phi).atan2(p);
        }

        (phi, c.y.atan2(c.x))
    }
}
