//! Interaction state for one slider.
//!
//! The web frontend feeds pointer offsets (surface units, relative to the
//! surface center) into `SliderState` and applies whatever `ValueChange`
//! comes back to the DOM. Nothing here touches the DOM, so the whole
//! interaction protocol runs on the host in tests.

use crate::config::SliderConfig;
use crate::geometry::{angle_from_offset, Geometry};
use crate::value::ValueScale;
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// End of the range a drag is held at after sweeping past the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pin {
    Min,
    Max,
}

/// New slider position after an interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChange {
    pub value: f64,
    pub angle: f64,
    pub handle: DVec2,
}

#[derive(Clone, Debug)]
pub struct SliderState {
    pub geometry: Geometry,
    pub scale: ValueScale,
    value: f64,
    angle: f64,
    drag: DragState,
    // Last pointer position as a fraction of a turn, before snapping
    pointer_fraction: f64,
    pin: Option<Pin>,
}

impl SliderState {
    pub fn new(config: &SliderConfig) -> Self {
        let scale = ValueScale::from_config(config);
        let value = scale.snap(config.initial_value.unwrap_or(config.min_value));
        Self {
            geometry: Geometry::new(config),
            scale,
            value,
            angle: scale.angle_for_value(value),
            drag: DragState::Idle,
            pointer_fraction: scale.fraction_for_value(value),
            pin: None,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    #[inline]
    pub fn handle_position(&self) -> DVec2 {
        self.geometry.handle_position(self.angle)
    }

    /// Pointer-down on the ring: move straight to the pointed angle without
    /// entering drag mode.
    pub fn jump_to(&mut self, offset: DVec2) -> Option<ValueChange> {
        let angle = angle_from_offset(offset);
        self.pointer_fraction = angle / TAU;
        self.pin = None;
        let value = self.scale.value_for_angle(angle);
        self.apply(value)
    }

    /// Pointer-down on the handle. Returns true when this started a drag.
    pub fn begin_drag(&mut self) -> bool {
        let started = self.drag == DragState::Idle;
        if started {
            // The pointer is on the handle, which sits at the current value
            self.pointer_fraction = self.scale.fraction_for_value(self.value);
            self.pin = None;
        }
        self.drag = DragState::Dragging;
        started
    }

    /// Pointer-move. Ignored unless a drag is active.
    ///
    /// Crossing the top of the ring (a pointer step whose shortest path
    /// passes through angle 0) holds the value at the end the pointer came
    /// from, so sweeping past the top never flips between `min` and `max`.
    /// Crossing back releases the hold. Crossings are detected on raw
    /// pointer positions; snapping happens afterwards.
    pub fn drag_to(&mut self, offset: DVec2) -> Option<ValueChange> {
        if self.drag != DragState::Dragging {
            return None;
        }
        let angle = angle_from_offset(offset);
        let fraction = angle / TAU;
        let delta = fraction - self.pointer_fraction;
        self.pointer_fraction = fraction;

        if delta < -0.5 {
            // clockwise over the top
            self.pin = match self.pin {
                Some(Pin::Min) => None,
                _ => Some(Pin::Max),
            };
        } else if delta > 0.5 {
            // counter-clockwise over the top
            self.pin = match self.pin {
                Some(Pin::Max) => None,
                _ => Some(Pin::Min),
            };
        }

        let value = match self.pin {
            Some(Pin::Max) => self.scale.max,
            Some(Pin::Min) => self.scale.min,
            None => self.scale.value_for_angle(angle),
        };
        self.apply(value)
    }

    /// Pointer-up anywhere. Returns true when a drag was actually ended;
    /// releasing while idle is a no-op.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.drag == DragState::Dragging;
        self.drag = DragState::Idle;
        self.pin = None;
        was_dragging
    }

    /// Programmatic update; the value is snapped and clamped like pointer
    /// input.
    pub fn set_value(&mut self, value: f64) -> Option<ValueChange> {
        let value = self.scale.snap(value);
        self.pointer_fraction = self.scale.fraction_for_value(value);
        self.pin = None;
        self.apply(value)
    }

    pub fn snapshot(&self) -> ValueChange {
        ValueChange {
            value: self.value,
            angle: self.angle,
            handle: self.handle_position(),
        }
    }

    fn apply(&mut self, value: f64) -> Option<ValueChange> {
        if value == self.value {
            return None;
        }
        self.value = value;
        self.angle = self.scale.angle_for_value(value);
        Some(self.snapshot())
    }
}
