// Shared visual tuning constants used by the web frontend.

// Ring strokes (surface user units)
pub const STROKE_WIDTH: f64 = 30.0; // thickness of base and indicator rings
pub const HANDLE_STROKE_WIDTH: f64 = 2.0; // border around the handle

// Tick pattern along the base ring
pub const TICK_DASH: f64 = 10.0;
pub const TICK_GAP: f64 = 2.0;

// Palette
pub const BASE_STROKE_COLOR: &str = "#dadada";
pub const HANDLE_FILL_COLOR: &str = "#ffffff";
pub const HANDLE_STROKE_COLOR: &str = "#cccccc";
pub const INDICATOR_OPACITY: f64 = 0.6;

// Rings are drawn in a group rotated so that angle 0 is "up"
pub const RING_ROTATION_DEG: f64 = -90.0;

// Host/child class names that stylesheets may target
pub const CLASS_HOST: &str = "circular-slider-container";
pub const CLASS_INITIALIZED: &str = "circular-slider-initialized";
pub const CLASS_SVG: &str = "circular-slider-svg";
pub const CLASS_LEGEND_CONTAINER: &str = "legend-container";
pub const CLASS_SLIDER_CONTAINER: &str = "slider-container";
pub const CLASS_LEGEND_ITEM: &str = "legend-item";
pub const CLASS_LEGEND_SWATCH: &str = "legend-swatch";
pub const CLASS_LEGEND_LABEL: &str = "legend-label";
pub const CLASS_LEGEND_VALUE: &str = "legend-value";

#[inline]
pub fn handle_radius() -> f64 {
    STROKE_WIDTH / 2.0 + HANDLE_STROKE_WIDTH / 2.0
}
