use crate::ellipsoid::{Cartesian, Ellipsoid};

/// Seven-parameter similarity transform between two Cartesian datums.
///
/// Translations in metres, rotations in arc-seconds, scale in parts per million.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Helmert {
    tx: f64,
    ty: f64,
    tz: f64,
    rx: f64,
    ry: f64,
    rz: f64,
    s_ppm: f64,
}

/// OSGB36 to WGS84.
pub(crate) const OSGB36_TO_WGS84: Helmert = Helmert {
    tx: 446.448,
    ty: -125.157,
    tz: 542.060,
    rx: 0.1502,
    ry: 0.2470,
    rz: 0.8421,
    s_ppm: -20.4894,
};

impl Helmert {
    /// Approximate inverse: every parameter negated. Good to a few millimetres here.
    pub(crate) const fn inverse(self) -> Self {
        Self {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            s_ppm: -self.s_ppm,
        }
    }

    pub(crate) fn apply(&self, c: Cartesian) -> Cartesian {
        let rx = (self.rx / 3600.0).to_radians();
        let ry = (self.ry / 3600.0).to_radians();
        let rz = (self.rz / 3600.0).to_radians();
        let k = 1.0 + self.s_ppm * 1e-6;

        Cartesian {
            x: self.tx + k * (c.x - rz * c.y + ry * c.z),
            y: self.ty + k * (rz * c.x + c.y - rx * c.z),
            z: self.tz + k * (-ry * c.x + rx * c.y + c.z),
        }
    }

    /// Moves a geodetic position (radians) from one ellipsoid to another through this transform.
    pub(crate) fn transform(&self, from: &Ellipsoid, to: &Ellipsoid, phi: f64, lambda: f64) -> (f64, f64) {
        to.to_geodetic(self.apply(from.to_cartesian(phi, lambda)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_undoes_forward_to_millimetres() {
        let c = Cartesian { x: 3_874_938.849, y: 116_218.624, z: 5_047_168.208 };
        let back = OSGB36_TO_WGS84.inverse().apply(OSGB36_TO_WGS84.apply(c));
        assert!((back.x - c.x).abs() < 0.01);
        assert!((back.y - c.y).abs() < 0.01);
        assert!((back.z - c.z).abs() < 0.01);
    }

    #[test]
    fn shift_is_on_the_order_of_a_hundred_metres() {
        let c = Cartesian { x: 3_874_938.849, y: 116_218.624, z: 5_047_168.208 };
        let moved = OSGB36_TO_WGS84.apply(c);
        let d = ((moved.x - c.x).powi(2) + (moved.y - c.y).powi(2) + (moved.z - c.z).powi(2)).sqrt();
        assert!((300.0..800.0).contains(&d), "shift {d}");
    }
}
