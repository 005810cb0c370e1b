//! Ring geometry derived from a `SliderConfig`.
//!
//! Angles are measured in radians clockwise from the top of the ring, which
//! matches how the rings are drawn (rotated by -90 degrees) and how a user
//! reads a dial. Positions are in surface user units with the origin at the
//! surface center and y pointing down.

use crate::config::SliderConfig;
use crate::constants::{HANDLE_STROKE_WIDTH, STROKE_WIDTH, TICK_DASH, TICK_GAP};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub radius: f64,
    pub circumference: f64,
    pub range: f64,
    /// Stretched dash length so the ticks tile the ring exactly.
    pub tick_dash: f64,
    pub tick_gap: f64,
    pub surface_size: f64,
}

impl Geometry {
    pub fn new(config: &SliderConfig) -> Self {
        let circumference = TAU * config.radius;
        Self {
            radius: config.radius,
            circumference,
            range: config.range(),
            tick_dash: tick_dash_length(circumference),
            tick_gap: TICK_GAP,
            surface_size: surface_size(config.radius),
        }
    }

    /// Handle center for an angle: `(r·sinθ, -r·cosθ)`.
    #[inline]
    pub fn handle_position(&self, angle: f64) -> DVec2 {
        DVec2::new(self.radius * angle.sin(), -self.radius * angle.cos())
    }

    /// Indicator `stroke-dasharray` pair: the swept arc, then enough gap to
    /// hide the rest of the ring.
    #[inline]
    pub fn indicator_dash(&self, angle: f64) -> (f64, f64) {
        let arc = (angle * self.radius).clamp(0.0, self.circumference.max(0.0));
        (arc, self.circumference)
    }

    #[inline]
    pub fn tick_dasharray(&self) -> String {
        format!("{} {}", self.tick_dash, self.tick_gap)
    }

    #[inline]
    pub fn indicator_dasharray(&self, angle: f64) -> String {
        let (arc, rest) = self.indicator_dash(angle);
        format!("{} {}", arc, rest)
    }
}

/// Side length of the square surface needed to show a ring of `radius`,
/// including the ring stroke and the handle border on both sides.
#[inline]
pub fn surface_size(radius: f64) -> f64 {
    radius * 2.0 + STROKE_WIDTH + 2.0 * HANDLE_STROKE_WIDTH
}

/// `[min_x, min_y, width, height]` for a surface centered on the origin.
#[inline]
pub fn view_box(size: f64) -> [f64; 4] {
    [-size / 2.0, -size / 2.0, size, size]
}

pub fn tick_dash_length(circumference: f64) -> f64 {
    let period = TICK_DASH + TICK_GAP;
    let count = (circumference / period).floor();
    if count >= 1.0 {
        TICK_DASH + (circumference % period) / count
    } else {
        TICK_DASH
    }
}

/// Angle of a point relative to the surface center, normalized to `[0, 2π)`.
#[inline]
pub fn angle_from_offset(offset: DVec2) -> f64 {
    (offset.y.atan2(offset.x) + FRAC_PI_2).rem_euclid(TAU)
}

/// Convert a pointer client position into surface user units relative to
/// the surface center. The surface keeps its aspect ratio, so the smaller
/// rendered side decides the scale.
pub fn surface_offset(
    client: DVec2,
    rect_origin: DVec2,
    rect_size: DVec2,
    surface_size: f64,
) -> DVec2 {
    let center = rect_origin + rect_size * 0.5;
    let rendered = rect_size.x.min(rect_size.y);
    let scale = if rendered > 0.0 {
        surface_size / rendered
    } else {
        1.0
    };
    (client - center) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_dash_tiles_the_ring() {
        let c = TAU * 100.0;
        let dash = tick_dash_length(c);
        let count = (c / (TICK_DASH + TICK_GAP)).floor();
        assert!(((dash + TICK_GAP) * count - c).abs() < 1e-9);
    }

    #[test]
    fn tiny_ring_falls_back_to_plain_dash() {
        assert_eq!(tick_dash_length(5.0), TICK_DASH);
        assert_eq!(tick_dash_length(0.0), TICK_DASH);
        assert_eq!(tick_dash_length(-10.0), TICK_DASH);
    }

    #[test]
    fn view_box_is_centered() {
        assert_eq!(view_box(164.0), [-82.0, -82.0, 164.0, 164.0]);
    }
}
