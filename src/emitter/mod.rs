mod emitter;
mod error;
mod heading;
mod profile;
mod record;
mod sink;

pub use emitter::{ExhaustionPolicy, TrackEmitter};
pub use error::EmitterError;
pub use heading::heading_between;
pub use profile::{Profile, ProfileTable};
pub use record::{Attributes, Geometry, SpatialReference, TelemetryRecord};
pub use sink::{JsonLinesSink, Sink};
