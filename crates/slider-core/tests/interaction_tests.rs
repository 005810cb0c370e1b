// Host-side tests for the pointer interaction protocol.

use glam::DVec2;
use slider_core::*;
use std::f64::consts::FRAC_PI_2;

fn make_state() -> SliderState {
    SliderState::new(&SliderConfig {
        radius: 100.0,
        min_value: 0.0,
        max_value: 100.0,
        step: 1.0,
        ..SliderConfig::default()
    })
}

/// Point on a circle of radius 100 at a clockwise-from-top angle.
fn offset_at(fraction: f64) -> DVec2 {
    let a = fraction * std::f64::consts::TAU;
    DVec2::new(100.0 * a.sin(), -100.0 * a.cos())
}

#[test]
fn starts_idle_at_min_and_top() {
    let s = make_state();
    assert_eq!(s.drag_state(), DragState::Idle);
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.angle(), 0.0);
    assert!((s.handle_position() - DVec2::new(0.0, -100.0)).length() < 1e-9);
}

#[test]
fn initial_value_is_snapped() {
    let s = SliderState::new(&SliderConfig {
        initial_value: Some(42.4),
        ..SliderConfig::default()
    });
    assert_eq!(s.value(), 42.0);
}

#[test]
fn click_on_rightmost_point_selects_quarter() {
    let mut s = make_state();
    let change = s.jump_to(DVec2::new(100.0, 0.0)).expect("value changes");
    assert_eq!(change.value, 25.0);
    assert!((change.angle - FRAC_PI_2).abs() < 1e-12);
    assert!((change.handle - DVec2::new(100.0, 0.0)).length() < 1e-9);
    // Jumping never enters drag mode
    assert!(!s.is_dragging());
}

#[test]
fn jump_to_same_value_reports_nothing() {
    let mut s = make_state();
    assert!(s.jump_to(offset_at(0.5)).is_some());
    assert!(s.jump_to(offset_at(0.501)).is_none());
    assert_eq!(s.value(), 50.0);
}

#[test]
fn move_without_drag_is_ignored() {
    let mut s = make_state();
    assert!(s.drag_to(offset_at(0.3)).is_none());
    assert_eq!(s.value(), 0.0);
}

#[test]
fn drag_then_release_returns_to_idle() {
    let mut s = make_state();
    assert!(s.begin_drag());
    assert_eq!(s.drag_state(), DragState::Dragging);

    let change = s.drag_to(offset_at(0.1)).expect("moved");
    assert_eq!(change.value, 10.0);
    let change = s.drag_to(offset_at(0.2)).expect("moved");
    assert_eq!(change.value, 20.0);

    assert!(s.end_drag());
    assert_eq!(s.drag_state(), DragState::Idle);
    // Second release is a no-op
    assert!(!s.end_drag());
    assert_eq!(s.drag_state(), DragState::Idle);
    assert!(s.drag_to(offset_at(0.4)).is_none());
    assert_eq!(s.value(), 20.0);
}

#[test]
fn begin_drag_twice_only_starts_once() {
    let mut s = make_state();
    assert!(s.begin_drag());
    assert!(!s.begin_drag());
    assert!(s.is_dragging());
}

#[test]
fn dragging_past_top_clockwise_pins_to_max() {
    let mut s = make_state();
    s.begin_drag();
    for f in [0.25, 0.5, 0.75, 0.9, 0.97, 0.998] {
        s.drag_to(offset_at(f));
    }
    assert_eq!(s.value(), 100.0);
    // Crossing the top does not wrap to min
    assert!(s.drag_to(offset_at(0.02)).is_none());
    assert_eq!(s.value(), 100.0);
    assert!(s.drag_to(offset_at(0.1)).is_none());
    assert_eq!(s.value(), 100.0);
    // Coming back releases the pin
    let change = s.drag_to(offset_at(0.9)).expect("moved back");
    assert_eq!(change.value, 90.0);
}

#[test]
fn dragging_past_top_counter_clockwise_pins_to_min() {
    let mut s = make_state();
    s.set_value(5.0);
    s.begin_drag();
    s.drag_to(offset_at(0.01));
    assert_eq!(s.value(), 1.0);
    s.drag_to(offset_at(0.98));
    assert_eq!(s.value(), 0.0);
    s.drag_to(offset_at(0.8));
    assert_eq!(s.value(), 0.0);
}

#[test]
fn max_value_draws_full_indicator() {
    let mut s = make_state();
    let change = s.set_value(100.0).expect("changed");
    let (arc, rest) = s.geometry.indicator_dash(change.angle);
    assert!((arc - rest).abs() < 1e-9);
    // Handle sits back at the top
    assert!((change.handle - DVec2::new(0.0, -100.0)).length() < 1e-9);
}

#[test]
fn set_value_clamps_and_snaps() {
    let mut s = make_state();
    assert_eq!(s.set_value(250.0).map(|c| c.value), Some(100.0));
    assert_eq!(s.set_value(-4.0).map(|c| c.value), Some(0.0));
    assert_eq!(s.set_value(12.7).map(|c| c.value), Some(13.0));
    assert!(s.set_value(13.2).is_none());
}

#[test]
fn coarse_step_quantizes_pointer_angle() {
    let mut s = SliderState::new(&SliderConfig {
        radius: 80.0,
        min_value: 0.0,
        max_value: 10.0,
        step: 2.5,
        ..SliderConfig::default()
    });
    let change = s.jump_to(DVec2::new(80.0, 10.0)).expect("changed");
    assert_eq!(change.value, 2.5);
    assert!((change.angle - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn degenerate_config_still_renders() {
    let mut s = SliderState::new(&SliderConfig {
        radius: 0.0,
        min_value: 5.0,
        max_value: 5.0,
        step: 0.0,
        ..SliderConfig::default()
    });
    assert_eq!(s.value(), 5.0);
    assert!(s.jump_to(DVec2::new(1.0, 0.0)).is_none());
    assert!(s.handle_position().is_finite());
}

fn coarse_state(step: f64) -> SliderState {
    SliderState::new(&SliderConfig {
        radius: 100.0,
        min_value: 0.0,
        max_value: 100.0,
        step,
        ..SliderConfig::default()
    })
}

#[test]
fn step_equal_to_range_reaches_max_when_dragged_past_half() {
    let mut s = coarse_state(100.0);
    s.begin_drag();
    for f in [0.1, 0.3, 0.49] {
        s.drag_to(offset_at(f));
        assert_eq!(s.value(), 0.0, "pointer fraction {f}");
    }
    for f in [0.52, 0.6, 0.75, 0.9] {
        s.drag_to(offset_at(f));
        assert_eq!(s.value(), 100.0, "pointer fraction {f}");
    }
    // Past the top it stays at max, and coming back is free again
    s.drag_to(offset_at(0.05));
    assert_eq!(s.value(), 100.0);
    s.drag_to(offset_at(0.95));
    s.drag_to(offset_at(0.7));
    assert_eq!(s.value(), 100.0);
    s.drag_to(offset_at(0.3));
    assert_eq!(s.value(), 0.0);
}

#[test]
fn half_range_step_follows_pointer_across_midpoint() {
    let mut s = coarse_state(50.0);
    s.begin_drag();
    s.drag_to(offset_at(0.1));
    assert_eq!(s.value(), 0.0);
    s.drag_to(offset_at(0.3));
    assert_eq!(s.value(), 50.0);
    // One sample jumps over the midpoint
    s.drag_to(offset_at(0.62));
    assert_eq!(s.value(), 50.0);
    s.drag_to(offset_at(0.8));
    assert_eq!(s.value(), 100.0);
    s.drag_to(offset_at(0.95));
    assert_eq!(s.value(), 100.0);
    // Clockwise over the top holds max
    s.drag_to(offset_at(0.1));
    assert_eq!(s.value(), 100.0);
}

#[test]
fn release_clears_hold_at_top() {
    let mut s = make_state();
    s.begin_drag();
    for f in [0.3, 0.6, 0.9, 0.99] {
        s.drag_to(offset_at(f));
    }
    s.drag_to(offset_at(0.05));
    assert_eq!(s.value(), 100.0);
    assert!(s.end_drag());

    // A fresh click anywhere is not held
    let change = s.jump_to(offset_at(0.25)).expect("moved");
    assert_eq!(change.value, 25.0);
}
