use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("GeoJSON parse error: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("feature {feature}: missing or non-string attribute '{name}'")]
    MissingAttribute { feature: usize, name: &'static str },
    #[error("feature {feature}: coordinate position with fewer than two values")]
    BadCoordinate { feature: usize },
}
