//! Button edge detection with a minimum dwell time.
//!
//! A level change is only reported once the new level has been sampled
//! continuously for `dwell_ms`.  Bouncing back to the debounced level
//! cancels the pending change.  With a dwell of zero the detector reports
//! an edge on the first differing sample.

use super::Edge;

/// Debounced edge detector for one digital input.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetector {
    /// Last committed (debounced) level.
    stable: bool,
    /// Level currently waiting out the dwell time.
    candidate: bool,
    /// Timestamp at which `candidate` was first seen.
    since_ms: u64,
    dwell_ms: u64,
}

impl EdgeDetector {
    /// Create a detector that starts released.
    pub const fn new(dwell_ms: u64) -> Self {
        Self {
            stable: false,
            candidate: false,
            since_ms: 0,
            dwell_ms,
        }
    }

    /// Feed one logical sample (`true` = pressed) taken at `now_ms`.
    pub fn sample(&mut self, pressed: bool, now_ms: u64) -> Edge {
        if pressed == self.stable {
            self.candidate = pressed;
            return Edge::None;
        }

        if pressed != self.candidate {
            self.candidate = pressed;
            self.since_ms = now_ms;
        }

        if now_ms.saturating_sub(self.since_ms) < self.dwell_ms {
            return Edge::None;
        }

        self.stable = pressed;
        if pressed {
            Edge::Pressed
        } else {
            Edge::Released
        }
    }

    /// Current debounced level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}

/// One physical button: wiring polarity and its edge detector.
#[derive(Clone, Copy, Debug)]
pub struct InputChannel {
    active_low: bool,
    detector: EdgeDetector,
}

impl InputChannel {
    pub const fn new(active_low: bool, dwell_ms: u64) -> Self {
        Self {
            active_low,
            detector: EdgeDetector::new(dwell_ms),
        }
    }

    /// Feed the electrical level of the pin (`true` = high).
    pub fn sample_level(&mut self, level_high: bool, now_ms: u64) -> Edge {
        let pressed = level_high != self.active_low;
        self.detector.sample(pressed, now_ms)
    }

    pub fn is_pressed(&self) -> bool {
        self.detector.is_pressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dwell_reports_first_differing_sample() {
        let mut det = EdgeDetector::new(0);
        assert_eq!(det.sample(false, 0), Edge::None);
        assert_eq!(det.sample(true, 1), Edge::Pressed);
        assert_eq!(det.sample(true, 2), Edge::None);
        assert_eq!(det.sample(false, 3), Edge::Released);
        assert!(!det.is_pressed());
    }

    #[test]
    fn press_commits_after_dwell() {
        let mut det = EdgeDetector::new(20);
        assert_eq!(det.sample(true, 100), Edge::None);
        assert_eq!(det.sample(true, 110), Edge::None);
        assert_eq!(det.sample(true, 119), Edge::None);
        assert_eq!(det.sample(true, 120), Edge::Pressed);
        assert!(det.is_pressed());
        assert_eq!(det.sample(true, 200), Edge::None);
    }

    #[test]
    fn bounce_shorter_than_dwell_is_ignored() {
        let mut det = EdgeDetector::new(20);
        assert_eq!(det.sample(true, 0), Edge::None);
        assert_eq!(det.sample(false, 5), Edge::None);
        assert_eq!(det.sample(true, 10), Edge::None);
        // Dwell restarts at 10 ms after the bounce.
        assert_eq!(det.sample(true, 25), Edge::None);
        assert_eq!(det.sample(true, 30), Edge::Pressed);
    }

    #[test]
    fn release_also_needs_dwell() {
        let mut det = EdgeDetector::new(10);
        det.sample(true, 0);
        assert_eq!(det.sample(true, 10), Edge::Pressed);
        assert_eq!(det.sample(false, 15), Edge::None);
        assert_eq!(det.sample(false, 25), Edge::Released);
    }

    #[test]
    fn active_low_channel_inverts_level() {
        let mut ch = InputChannel::new(true, 0);
        // Idle line is pulled up.
        assert_eq!(ch.sample_level(true, 0), Edge::None);
        assert_eq!(ch.sample_level(false, 1), Edge::Pressed);
        assert!(ch.is_pressed());
        assert_eq!(ch.sample_level(true, 2), Edge::Released);
    }

    #[test]
    fn active_high_channel_passes_level_through() {
        let mut ch = InputChannel::new(false, 0);
        assert_eq!(ch.sample_level(false, 0), Edge::None);
        assert_eq!(ch.sample_level(true, 1), Edge::Pressed);
    }
}
