mod error;
mod geojson;
mod types;

pub use error::SourceError;
pub use self::geojson::{parse_tracks, GeoJsonSource};
pub use types::{Track, TrackPoint};

/// Produces the set of tracks the emitter replays. Implementations own all
/// I/O; the emitter only ever sees materialized tracks.
pub trait TrackSource {
    fn load(&self) -> Result<Vec<Track>, SourceError>;
}
