// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom range limits and boundary containment.

use kurbo::{Point, Rect, Size, Vec2};

use crate::delta::Delta;

/// Tolerance used when comparing scales.
pub const SCALE_EPSILON: f64 = 1e-9;

/// How far, in pixels, a pinned edge may drift inward before it is corrected.
pub const EDGE_PIN_MARGIN: f64 = 0.5;

/// Allowed range of the uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: 1.0, max: 4.0 }
    }
}

impl ZoomRange {
    /// A range from `min` to `max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `scale` lies within the range, allowing for rounding error.
    #[must_use]
    pub fn admits(&self, scale: f64) -> bool {
        scale.is_finite() && scale >= self.min - SCALE_EPSILON && scale <= self.max + SCALE_EPSILON
    }
}

/// Reject zoom steps that would leave `range`.
///
/// A rejected step is discarded entirely, translation included, rather than
/// saturated at the bound.
#[must_use]
pub fn clamp_zoom(delta: Delta, current_scale: f64, range: ZoomRange) -> Delta {
    if delta.scale == 0.0 {
        return delta;
    }
    let new_scale = current_scale + delta.scale;
    if range.admits(new_scale) {
        delta
    } else {
        log::debug!(
            "rejecting zoom to {new_scale} outside [{}, {}]",
            range.min,
            range.max
        );
        Delta::ZERO
    }
}

/// Whether an element spanning `old_min..old_max` may move by `delta` along one
/// axis of a container spanning `box_min..box_max`.
///
/// The element may only move while it overflows the container or sits at
/// least partly outside it. Even then a move is refused when it would carry an
/// edge past a container wall in the direction of travel while the opposite
/// edge is already visible.
#[must_use]
pub fn axis_is_free(old_min: f64, old_max: f64, delta: f64, box_min: f64, box_max: f64) -> bool {
    let overflows = old_max - old_min > box_max - box_min;
    let inside = old_min >= box_min && old_max <= box_max;
    if !overflows && inside {
        return false;
    }
    let new_min = old_min + delta;
    let new_max = old_max + delta;
    let min_wall = new_min < box_min && new_min <= old_min && new_max <= box_max;
    let max_wall = new_max > box_max && new_max >= old_max && new_min >= box_min;
    !(min_wall || max_wall)
}

/// Zero the components of a drag delta that [`axis_is_free`] refuses.
///
/// The axes are evaluated independently; the scale component is untouched.
#[must_use]
pub fn clamp_drag(delta: Delta, element: Rect, container: Rect) -> Delta {
    let mut translation = delta.translation;
    if translation.x != 0.0
        && !axis_is_free(element.x0, element.x1, translation.x, container.x0, container.x1)
    {
        log::trace!("horizontal move {} blocked by container", translation.x);
        translation.x = 0.0;
    }
    if translation.y != 0.0
        && !axis_is_free(element.y0, element.y1, translation.y, container.y0, container.y1)
    {
        log::trace!("vertical move {} blocked by container", translation.y);
        translation.y = 0.0;
    }
    Delta::new(translation, delta.scale)
}

/// Keep edges that sat on or beyond the container walls from snapping inward
/// while the element shrinks.
///
/// The element is assumed to scale about its own center to `new_scale` times
/// its `native` size. For each axis, an edge that was flush with or outside its
/// wall and would end up more than [`EDGE_PIN_MARGIN`] inside it is pinned back
/// to the wall. When both edges of an axis would be pulled in, the element now
/// fits on that axis and is left alone.
#[must_use]
pub fn pin_shrinking_edges(
    delta: Delta,
    element: Rect,
    container: Rect,
    native: Size,
    new_scale: f64,
) -> Delta {
    if delta.scale >= 0.0 {
        return delta;
    }
    let new_center: Point = element.center() + delta.translation;
    let next = Rect::from_center_size(
        new_center,
        Size::new(native.width * new_scale, native.height * new_scale),
    );
    let correction = Vec2::new(
        pin_axis(element.x0, element.x1, next.x0, next.x1, container.x0, container.x1),
        pin_axis(element.y0, element.y1, next.y0, next.y1, container.y0, container.y1),
    );
    if correction != Vec2::ZERO {
        log::trace!("pinning shrinking edges by {correction:?}");
    }
    Delta::new(delta.translation + correction, delta.scale)
}

fn pin_axis(
    old_min: f64,
    old_max: f64,
    new_min: f64,
    new_max: f64,
    box_min: f64,
    box_max: f64,
) -> f64 {
    let min_pulled = old_min <= box_min + EDGE_PIN_MARGIN && new_min > box_min + EDGE_PIN_MARGIN;
    let max_pulled = old_max >= box_max - EDGE_PIN_MARGIN && new_max < box_max - EDGE_PIN_MARGIN;
    match (min_pulled, max_pulled) {
        (true, false) => box_min - new_min,
        (false, true) => box_max - new_max,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ZoomRange, axis_is_free, clamp_drag, clamp_zoom, pin_shrinking_edges};
    use crate::delta::Delta;

    #[test]
    fn zoom_range_is_a_hard_floor_and_ceiling() {
        let range = ZoomRange::default();
        let step_in = Delta::new(Vec2::new(3.0, 4.0), 0.4);
        assert_eq!(clamp_zoom(step_in, 3.6, range), step_in);
        // Overshooting is discarded, not saturated, and the pan goes with it.
        assert_eq!(clamp_zoom(step_in, 3.7, range), Delta::ZERO);

        let step_out = Delta::new(Vec2::new(1.0, 1.0), -0.1);
        assert_eq!(clamp_zoom(step_out, 1.1, range), step_out);
        assert_eq!(clamp_zoom(step_out, 1.0, range), Delta::ZERO);
    }

    #[test]
    fn zoom_range_tolerates_rounding() {
        let range = ZoomRange::new(1.0, 4.0);
        assert!(range.admits(1.0 - 1e-12));
        assert!(range.admits(4.0 + 1e-12));
        assert!(!range.admits(f64::NAN));
    }

    #[test]
    fn drags_pass_through_clamp_zoom() {
        let pan = Delta::pan(Vec2::new(10.0, 0.0));
        assert_eq!(clamp_zoom(pan, 100.0, ZoomRange::default()), pan);
    }

    #[test]
    fn fitting_element_inside_container_is_locked() {
        // 200 wide inside 0..400.
        assert!(!axis_is_free(0.0, 200.0, -10.0, 0.0, 400.0));
        assert!(!axis_is_free(0.0, 200.0, 10.0, 0.0, 400.0));
    }

    #[test]
    fn oversized_element_pans_until_the_far_edge_would_show() {
        // 600 wide in a 400 container, left edge at the left wall.
        assert!(axis_is_free(0.0, 600.0, -50.0, 0.0, 400.0));
        // Moving left far enough to expose the right edge is refused.
        assert!(!axis_is_free(-150.0, 450.0, -60.0, 0.0, 400.0));
        // Moving right while the left edge is on the wall would expose a gap.
        assert!(!axis_is_free(0.0, 600.0, 10.0, 0.0, 400.0));
        // Moving away from a wall is always allowed.
        assert!(axis_is_free(-200.0, 400.0, 10.0, 0.0, 400.0));
    }

    #[test]
    fn element_outside_the_container_can_only_come_back() {
        // Entirely left of the container.
        assert!(!axis_is_free(-300.0, -100.0, -10.0, 0.0, 400.0));
        assert!(axis_is_free(-300.0, -100.0, 10.0, 0.0, 400.0));
    }

    #[test]
    fn drag_axes_are_clamped_independently() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        // Fits horizontally at the left wall, overflows vertically.
        let element = Rect::new(0.0, -100.0, 200.0, 500.0);
        let clamped = clamp_drag(Delta::pan(Vec2::new(-10.0, 20.0)), element, container);
        assert_eq!(clamped.translation, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn pinning_keeps_a_covering_element_flush() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        // 600x600 (scale 2 of 300) with the left/top edges on the walls.
        let element = Rect::new(0.0, 0.0, 600.0, 600.0);
        let native = Size::new(300.0, 300.0);
        // Shrinking to 1.8 about the center would pull the left/top edges in by 30.
        let raw = Delta::new(Vec2::ZERO, -0.2);
        let pinned = pin_shrinking_edges(raw, element, container, native, 1.8);
        assert!((pinned.translation.x + 30.0).abs() < 1e-9);
        assert!((pinned.translation.y + 30.0).abs() < 1e-9);
        assert_eq!(pinned.scale, -0.2);

        let center = element.center() + pinned.translation;
        let next = Rect::from_center_size(center, Size::new(540.0, 540.0));
        assert!(next.x0.abs() < 1e-9);
        assert!(next.y0.abs() < 1e-9);
    }

    #[test]
    fn pinning_ignores_growth_and_axes_that_come_to_fit() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        let native = Size::new(200.0, 200.0);
        let grow = Delta::new(Vec2::new(1.0, 1.0), 0.1);
        let element = Rect::from_center_size(Point::new(200.0, 200.0), Size::new(420.0, 420.0));
        assert_eq!(pin_shrinking_edges(grow, element, container, native, 2.2), grow);

        // Covering on both sides, shrinking to fit: both edges come in, no pin.
        let shrink = Delta::new(Vec2::ZERO, -0.2);
        let pinned = pin_shrinking_edges(shrink, element, container, native, 1.9);
        assert_eq!(pinned, shrink);
    }
}
