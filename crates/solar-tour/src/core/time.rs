/// Converts host frame timestamps into clamped per-tick deltas.
///
/// The first tick after a (re)start has no previous timestamp and gets a
/// zero delta, so time spent suspended is never simulated.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Record a frame timestamp (milliseconds). Returns the delta since the
    /// previous one in seconds, clamped to `[0, max_dt]`.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the previous timestamp.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(1000.0), 0.0);
    }

    #[test]
    fn measures_frame_gap() {
        let mut clock = FrameClock::new(0.1);
        clock.advance(1000.0);
        let dt = clock.advance(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn caps_long_gaps() {
        let mut clock = FrameClock::new(0.1);
        clock.advance(0.0);
        assert_eq!(clock.advance(5000.0), 0.1);
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new(0.1);
        clock.advance(2000.0);
        assert_eq!(clock.advance(1000.0), 0.0);
    }

    #[test]
    fn reset_skips_suspended_time() {
        let mut clock = FrameClock::new(0.1);
        clock.advance(0.0);
        clock.advance(16.0);
        clock.reset();
        assert_eq!(clock.advance(60_000.0), 0.0);
    }
}
