use std::fs;
use std::path::PathBuf;

use geojson::{Feature, FeatureCollection, GeoJson, Value};

use crate::source::{SourceError, Track, TrackPoint, TrackSource};

/// Loads tracks from a GeoJSON FeatureCollection on disk. Each `LineString`
/// feature with `ID` and `TrackType` properties becomes one track.
pub struct GeoJsonSource {
    path: PathBuf,
}

impl GeoJsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrackSource for GeoJsonSource {
    fn load(&self) -> Result<Vec<Track>, SourceError> {
        let content = fs::read_to_string(&self.path)?;
        let tracks = parse_tracks(&content)?;
        log::info!(
            "loaded {} tracks from {}",
            tracks.len(),
            self.path.display()
        );
        Ok(tracks)
    }
}

pub fn parse_tracks(input: &str) -> Result<Vec<Track>, SourceError> {
    let geojson: GeoJson = input.parse()?;
    let collection = FeatureCollection::try_from(geojson)?;

    let mut tracks = Vec::new();
    for (i, feature) in collection.features.iter().enumerate() {
        let Some(line) = feature_line(i, feature) else {
            continue;
        };

        let id = required_property(i, feature, "ID")?;
        let track_type = required_property(i, feature, "TrackType")?;

        let points = line
            .iter()
            .map(|position| {
                match (position.first(), position.get(1)) {
                    (Some(&x), Some(&y)) => Ok(TrackPoint::new(x, y)),
                    _ => Err(SourceError::BadCoordinate { feature: i }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracks.push(Track::new(id, track_type, points));
    }

    Ok(tracks)
}

/// Picks the polyline out of a feature. Multi-part lines contribute their
/// first part only; anything that is not a line is skipped.
fn feature_line<'a>(index: usize, feature: &'a Feature) -> Option<&'a Vec<Vec<f64>>> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::LineString(line)) => Some(line),
        Some(Value::MultiLineString(parts)) => {
            if parts.len() > 1 {
                log::warn!(
                    "feature {}: multi-part line, dropping {} extra parts",
                    index,
                    parts.len() - 1
                );
            }
            parts.first()
        }
        other => {
            log::warn!(
                "feature {}: skipping unsupported geometry {:?}",
                index,
                other.map(|v| v.type_name())
            );
            None
        }
    }
}

fn required_property(index: usize, feature: &Feature, name: &'static str) -> Result<String, SourceError> {
    feature
        .property(name)
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or(SourceError::MissingAttribute {
            feature: index,
            name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(geometry: &str, properties: &str) -> String {
        format!(
            r#"{{"type":"Feature","geometry":{},"properties":{}}}"#,
            geometry, properties
        )
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        )
    }

    #[test]
    fn parses_line_string_features() {
        let input = collection(&[
            feature(
                r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0],[2.0,0.0]]}"#,
                r#"{"ID":"T1","TrackType":"VEHICLE"}"#,
            ),
            feature(
                r#"{"type":"LineString","coordinates":[[-122.39,47.62],[-122.38,47.63]]}"#,
                r#"{"ID":"WS61-4","TrackType":"HELICOPTER"}"#,
            ),
        ]);

        let tracks = parse_tracks(&input).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, "T1");
        assert_eq!(tracks[0].track_type, "VEHICLE");
        assert_eq!(tracks[0].points.len(), 3);
        assert_eq!(tracks[0].point(1), Some(TrackPoint::new(1.0, 1.0)));
        assert_eq!(tracks[1].id, "WS61-4");
        assert_eq!(tracks[1].point(3), None);
    }

    #[test]
    fn multi_line_string_uses_first_part() {
        let input = collection(&[feature(
            r#"{"type":"MultiLineString","coordinates":[[[0.0,0.0],[1.0,0.0]],[[5.0,5.0],[6.0,5.0]]]}"#,
            r#"{"ID":"T1","TrackType":"VEHICLE"}"#,
        )]);

        let tracks = parse_tracks(&input).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].points.len(), 2);
        assert_eq!(tracks[0].point(0), Some(TrackPoint::new(0.0, 0.0)));
    }

    #[test]
    fn skips_non_line_geometry() {
        let input = collection(&[
            feature(
                r#"{"type":"Point","coordinates":[0.0,0.0]}"#,
                r#"{"ID":"P1","TrackType":"VEHICLE"}"#,
            ),
            feature(
                r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,0.0]]}"#,
                r#"{"ID":"T1","TrackType":"VEHICLE"}"#,
            ),
        ]);

        let tracks = parse_tracks(&input).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "T1");
    }

    #[test]
    fn missing_id_is_an_error() {
        let input = collection(&[feature(
            r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,0.0]]}"#,
            r#"{"TrackType":"VEHICLE"}"#,
        )]);

        match parse_tracks(&input) {
            Err(SourceError::MissingAttribute { feature: 0, name }) => assert_eq!(name, "ID"),
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn non_string_track_type_is_an_error() {
        let input = collection(&[feature(
            r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,0.0]]}"#,
            r#"{"ID":"T1","TrackType":7}"#,
        )]);

        match parse_tracks(&input) {
            Err(SourceError::MissingAttribute { feature: 0, name }) => {
                assert_eq!(name, "TrackType")
            }
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn empty_collection_yields_no_tracks() {
        let tracks = parse_tracks(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(tracks.is_empty());
    }
}
