use crate::source::TrackPoint;

pub const WGS84_WKID: u32 = 4326;
pub const WEB_MERCATOR_WKID: u32 = 3857;

/// WGS-84 equatorial radius, the sphere used by EPSG:3857.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Transforms a point from the track file's native frame into WGS84
/// longitude/latitude degrees for output.
pub trait Reprojector {
    fn to_wgs84(&self, point: TrackPoint) -> TrackPoint;
}

/// Input already in WGS84 degrees.
pub struct Wgs84;

impl Reprojector for Wgs84 {
    fn to_wgs84(&self, point: TrackPoint) -> TrackPoint {
        point
    }
}

/// Inverse spherical-mercator: EPSG:3857 metres to WGS84 degrees.
pub struct WebMercator;

impl Reprojector for WebMercator {
    fn to_wgs84(&self, point: TrackPoint) -> TrackPoint {
        let lon = (point.x / EARTH_RADIUS_M).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
            .to_degrees();
        TrackPoint::new(lon, lat)
    }
}

pub fn reprojector_for_wkid(wkid: u32) -> Option<Box<dyn Reprojector>> {
    match wkid {
        WGS84_WKID => Some(Box::new(Wgs84)),
        WEB_MERCATOR_WKID => Some(Box::new(WebMercator)),
        _ => None,
    }
}
