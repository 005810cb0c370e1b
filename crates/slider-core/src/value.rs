//! Linear mapping between ring angle and slider value, with step snapping.

use crate::config::SliderConfig;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn from_config(config: &SliderConfig) -> Self {
        Self::new(config.min_value, config.max_value, config.step)
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Snap to the nearest multiple of `step` above `min`, clamped into
    /// `[min, max]`. Degenerate scales never panic: an empty range pins to
    /// `min` and a non-positive step only clamps.
    pub fn snap(&self, raw: f64) -> f64 {
        let range = self.range();
        if !(range > 0.0) || !raw.is_finite() {
            return self.min;
        }
        let clamped = raw.clamp(self.min, self.max);
        if !(self.step > 0.0) || !self.step.is_finite() {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Position of `value` along the range, in `[0, 1]`.
    #[inline]
    pub fn fraction_for_value(&self, value: f64) -> f64 {
        let range = self.range();
        if range > 0.0 {
            ((value - self.min) / range).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Angle for a value; `max` maps to a full turn so the indicator can
    /// close the ring.
    #[inline]
    pub fn angle_for_value(&self, value: f64) -> f64 {
        self.fraction_for_value(value) * TAU
    }

    /// Unsnapped value for an angle in `[0, 2π]`.
    #[inline]
    pub fn raw_value_for_angle(&self, angle: f64) -> f64 {
        self.min + (angle / TAU).clamp(0.0, 1.0) * self.range()
    }

    #[inline]
    pub fn value_for_angle(&self, angle: f64) -> f64 {
        self.snap(self.raw_value_for_angle(angle))
    }

    /// Decimal places needed to show any multiple of `step` (at most 6).
    pub fn decimals(&self) -> usize {
        if !self.step.is_finite() {
            return 0;
        }
        let mut scaled = self.step.abs();
        let mut decimals = 0;
        while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
            scaled *= 10.0;
            decimals += 1;
        }
        decimals
    }

    /// Legend readout for a value.
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_step() {
        let s = ValueScale::new(0.0, 100.0, 5.0);
        assert_eq!(s.snap(12.4), 10.0);
        assert_eq!(s.snap(12.6), 15.0);
        assert_eq!(s.snap(-3.0), 0.0);
        assert_eq!(s.snap(140.0), 100.0);
    }

    #[test]
    fn degenerate_scales_do_not_panic() {
        let empty = ValueScale::new(10.0, 10.0, 1.0);
        assert_eq!(empty.snap(42.0), 10.0);
        assert_eq!(empty.angle_for_value(42.0), 0.0);

        let no_step = ValueScale::new(0.0, 10.0, 0.0);
        assert_eq!(no_step.snap(3.3), 3.3);
    }

    #[test]
    fn format_uses_step_precision() {
        assert_eq!(ValueScale::new(0.0, 100.0, 1.0).format(25.0), "25");
        assert_eq!(ValueScale::new(0.0, 10.0, 0.25).format(2.5), "2.50");
        assert_eq!(ValueScale::new(0.0, 1.0, 0.1).format(0.30000000000000004), "0.3");
    }

    #[test]
    fn max_maps_to_full_turn() {
        let s = ValueScale::new(0.0, 100.0, 1.0);
        assert!((s.angle_for_value(100.0) - TAU).abs() < 1e-12);
        assert_eq!(s.value_for_angle(TAU), 100.0);
    }
}
