//! Single-pole low-pass filter for the emitted pressure.
//!
//! `value = alpha * target + (1 - alpha) * value` once per tick.  With
//! `0 < alpha < 1` the value approaches a constant target monotonically and
//! never overshoots.  Once within `snap_epsilon` it is set to the target
//! exactly so the output comes to rest instead of creeping forever.

#[derive(Clone, Copy, Debug)]
pub struct PressureFilter {
    value: f32,
    alpha: f32,
    snap_epsilon: f32,
}

impl PressureFilter {
    pub const fn new(alpha: f32, snap_epsilon: f32) -> Self {
        Self {
            value: 0.0,
            alpha,
            snap_epsilon,
        }
    }

    /// Emitted value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance one step toward `target` and return the new value.
    pub fn tick(&mut self, target: f32) -> f32 {
        self.value = self.alpha * target + (1.0 - self.alpha) * self.value;

        let diff = self.value - target;
        if diff < self.snap_epsilon && diff > -self.snap_epsilon {
            self.value = target;
        }
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// True once the value rests exactly on `target`.
    #[cfg(test)]
    pub fn settled_at(&self, target: f32) -> bool {
        self.value == target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FILTER_ALPHA, SNAP_EPSILON};

    #[test]
    fn first_step_moves_alpha_of_the_gap() {
        let mut f = PressureFilter::new(FILTER_ALPHA, SNAP_EPSILON);
        let v = f.tick(50.0);
        assert!((v - 6.0).abs() < 1e-4);
    }

    #[test]
    fn snaps_inside_epsilon() {
        let mut f = PressureFilter::new(FILTER_ALPHA, SNAP_EPSILON);
        f.value = 39.995;
        assert_eq!(f.tick(40.0), 40.0);
        assert!(f.settled_at(40.0));
    }

    #[test]
    fn at_rest_stays_at_rest() {
        let mut f = PressureFilter::new(FILTER_ALPHA, SNAP_EPSILON);
        for _ in 0..10 {
            assert_eq!(f.tick(0.0), 0.0);
        }
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut f = PressureFilter::new(FILTER_ALPHA, SNAP_EPSILON);
        f.tick(-40.0);
        assert!(f.value() < 0.0);
        f.reset();
        assert_eq!(f.value(), 0.0);
    }
}
