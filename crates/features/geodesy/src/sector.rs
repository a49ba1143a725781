use crate::sphere::destination_point;
use locus_domain::GeoPoint;

/// Beamwidth of a standard three-sector cell site antenna.
pub const DEFAULT_BEAMWIDTH_DEG: f64 = 120.0;

/// Closed ring outlining a circular sector ("fan") centred on `azimuth_deg`.
///
/// The ring starts and ends at `centre` and visits `steps + 1` evenly spaced arc points
/// from `azimuth - beamwidth / 2` to `azimuth + beamwidth / 2` at `radius_m`. `steps` is
/// raised to at least 1.
#[must_use]
pub fn sector_outline(
    centre: GeoPoint,
    azimuth_deg: f64,
    radius_m: f64,
    beamwidth_deg: f64,
    steps: usize,
) -> Vec<GeoPoint> {
    let steps = steps.max(1);
    let start = azimuth_deg - beamwidth_deg / 2.0;
    let increment = beamwidth_deg / steps as f64;

    let mut ring = Vec::with_capacity(steps + 3);
    ring.push(centre);
    ring.extend(
        (0..=steps).map(|i| destination_point(centre, start + increment * i as f64, radius_m)),
    );
    ring.push(centre);
    ring
}
