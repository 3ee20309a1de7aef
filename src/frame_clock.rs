//! Delta-time bookkeeping for the display-driven frame loop.

/// Converts successive frame timestamps (milliseconds) into step lengths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick reports zero so the
    /// simulation never starts with a jump.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let previous = self.last_timestamp.unwrap_or(timestamp_ms);
        self.last_timestamp = Some(timestamp_ms);
        ((timestamp_ms - previous) / 1000.0) as f32
    }
}
