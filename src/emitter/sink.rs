use std::io::Write;

use crate::emitter::{EmitterError, TelemetryRecord};

/// Receives emitted records. The stdout feed implements this, and so could a
/// renderer or a network publisher.
pub trait Sink {
    fn emit(&mut self, record: &TelemetryRecord) -> Result<(), EmitterError>;
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn emit(&mut self, record: &TelemetryRecord) -> Result<(), EmitterError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}
