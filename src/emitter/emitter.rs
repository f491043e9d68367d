use crate::emitter::{
    heading_between, Attributes, EmitterError, Geometry, ProfileTable, Sink, SpatialReference,
    TelemetryRecord,
};
use crate::project::Reprojector;
use crate::source::{Track, TrackPoint};

/// What happens to the stream when tracks of different lengths run dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustionPolicy {
    /// Every track plays out to its own last point; the stream ends once no
    /// track has data left.
    #[default]
    RunToLongest,
    /// The historical feed behavior: the tick in which any track comes up
    /// empty finishes, then the whole stream stops.
    StopAtFirstGap,
}

/// Replays a set of tracks in lock-step, one shared tick at a time, pushing
/// one record per track per tick into the sink.
pub struct TrackEmitter<'a> {
    tracks: &'a [Track],
    reprojector: &'a dyn Reprojector,
    profiles: &'a ProfileTable,
    policy: ExhaustionPolicy,
}

impl<'a> TrackEmitter<'a> {
    pub fn new(
        tracks: &'a [Track],
        reprojector: &'a dyn Reprojector,
        profiles: &'a ProfileTable,
    ) -> Self {
        Self {
            tracks,
            reprojector,
            profiles,
            policy: ExhaustionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the stream to completion and returns the number of records
    /// emitted. An out-of-range vertex lookup is the exhaustion signal for a
    /// track, never an error.
    pub fn emit_all(&self, sink: &mut dyn Sink) -> Result<usize, EmitterError> {
        let mut count = 0usize;
        let mut tick = 0usize;

        loop {
            let mut emitted = false;
            let mut gap = false;

            for track in self.tracks {
                match track.point(tick) {
                    Some(point) => {
                        sink.emit(&self.record_at(track, tick, point))?;
                        count += 1;
                        emitted = true;
                    }
                    None => gap = true,
                }
            }

            let done = match self.policy {
                ExhaustionPolicy::RunToLongest => !emitted,
                ExhaustionPolicy::StopAtFirstGap => gap || !emitted,
            };
            if done {
                break;
            }
            tick += 1;
        }

        log::debug!("emitted {} records, stopped at tick {}", count, tick);
        Ok(count)
    }

    fn record_at(&self, track: &Track, tick: usize, point: TrackPoint) -> TelemetryRecord {
        // Bearing needs two prior steps; ticks 0 and 1 report 0. It is
        // computed in the native frame, matching the feed this replaces.
        let heading = if tick > 1 {
            heading_between(point, track.points[tick - 1])
        } else {
            0.0
        };

        let profile = self.profiles.lookup(&track.id);
        let position = self.reprojector.to_wgs84(point);

        TelemetryRecord {
            geometry: Geometry {
                x: position.x,
                y: position.y,
                spatial_reference: SpatialReference::wgs84(),
            },
            attributes: Attributes {
                id: track.id.clone(),
                heading,
                altitude: profile.altitude,
                speed: profile.speed,
                call_sign: track.id.clone(),
                track_type: track.track_type.clone(),
            },
        }
    }
}
