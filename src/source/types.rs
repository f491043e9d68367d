/// A single vertex in the track's native reference frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub x: f64,
    pub y: f64,
}

impl TrackPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named, typed polyline representing one moving entity's recorded path.
/// Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub track_type: String,
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(id: impl Into<String>, track_type: impl Into<String>, points: Vec<TrackPoint>) -> Self {
        Self {
            id: id.into(),
            track_type: track_type.into(),
            points,
        }
    }

    /// Vertex at `index`, or `None` once the track is exhausted. Out-of-range
    /// lookup is the normal end-of-track signal, not an error.
    pub fn point(&self, index: usize) -> Option<TrackPoint> {
        self.points.get(index).copied()
    }
}
