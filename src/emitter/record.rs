use serde::{Deserialize, Serialize};

use crate::project::WGS84_WKID;

/// One telemetry tick for one track, in the wire shape consumed by the
/// downstream feed:
///
/// `{"geometry":{"x":-122.39063,"y":47.62897,"spatialReference":{"wkid":4326}},"attributes":{"ID":"Responder01","Heading":45.4,"Altitude":0.0,"Speed":0.0,"CallSign":"Responder01","TrackType":"VEHICLE"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub geometry: Geometry,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "spatialReference")]
    pub spatial_reference: SpatialReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    pub fn wgs84() -> Self {
        Self { wkid: WGS84_WKID }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Heading")]
    pub heading: f64,
    #[serde(rename = "Altitude")]
    pub altitude: f64,
    #[serde(rename = "Speed")]
    pub speed: f64,
    #[serde(rename = "CallSign")]
    pub call_sign: String,
    #[serde(rename = "TrackType")]
    pub track_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TelemetryRecord {
        TelemetryRecord {
            geometry: Geometry {
                x: -122.39063,
                y: 47.62897,
                spatial_reference: SpatialReference::wgs84(),
            },
            attributes: Attributes {
                id: "Responder01".to_string(),
                heading: 45.4,
                altitude: 0.0,
                speed: 0.0,
                call_sign: "Responder01".to_string(),
                track_type: "VEHICLE".to_string(),
            },
        }
    }

    #[test]
    fn serializes_to_wire_shape() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"geometry":{"x":-122.39063,"y":47.62897,"spatialReference":{"wkid":4326}},"attributes":{"ID":"Responder01","Heading":45.4,"Altitude":0.0,"Speed":0.0,"CallSign":"Responder01","TrackType":"VEHICLE"}}"#
        );
    }

    #[test]
    fn round_trips_through_json() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TelemetryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
