// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::constrain::SCALE_EPSILON;
use crate::modes::{Anchor, ZoomDirection};

/// An incremental change to a [`crate::TransformMatrix`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delta {
    /// Translation to add, in the host's pixel space.
    pub translation: Vec2,
    /// Amount added to both scale components.
    pub scale: f64,
}

impl Default for Delta {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Delta {
    /// No movement, no scaling.
    pub const ZERO: Self = Self {
        translation: Vec2::ZERO,
        scale: 0.0,
    };

    /// A delta with both a translation and a scale change.
    #[must_use]
    pub const fn new(translation: Vec2, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// A pure translation.
    #[must_use]
    pub const fn pan(translation: Vec2) -> Self {
        Self::new(translation, 0.0)
    }

    /// Returns `true` if the delta changes nothing.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.translation == Vec2::ZERO && self.scale == 0.0
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.scale.is_finite()
    }
}

/// Rectangles and sizes measured by the host for one event.
///
/// Measurements are taken fresh for every event because each transform
/// update changes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// On-screen bounds of the transformed element.
    pub element: Rect,
    /// On-screen bounds of the bounding container, if any.
    pub container: Option<Rect>,
    /// Unscaled intrinsic size of the element.
    pub native: Size,
}

/// The element's current scale, measured as rendered width over native width.
///
/// Returns `None` when the native width is zero, negative or not finite, so a
/// zero-size measurement never turns into a non-finite scale.
#[must_use]
pub fn current_scale(element: Rect, native: Size) -> Option<f64> {
    if !(native.width.is_finite() && native.width > 0.0) {
        return None;
    }
    let scale = element.width() / native.width;
    scale.is_finite().then_some(scale)
}

/// Pan that follows the pointer 1:1.
#[must_use]
pub fn drag_delta(pointer: Point, last_pointer: Point) -> Delta {
    Delta::pan(pointer - last_pointer)
}

/// Tuning for wheel zoom steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSettings {
    /// Relative scale change per wheel step.
    pub step: f64,
    /// Round the measured scale and the scale delta to multiples of `step`.
    ///
    /// Keeps repeated in/out steps on one grid so the lower bound stays
    /// reachable.
    pub quantize: bool,
    /// With a container, ignore the pointer offset on axes where the element
    /// fits in or lies inside the container.
    pub center_fitting_axes: bool,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: 0.1,
            quantize: true,
            center_fitting_axes: false,
        }
    }
}

impl ZoomSettings {
    fn quantize(&self, value: f64) -> f64 {
        if self.quantize && self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        }
    }
}

/// The unclamped result of one wheel step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomDelta {
    /// Raw delta, before zoom range and boundary constraints.
    pub delta: Delta,
    /// The scale the delta was derived from, quantized when
    /// [`ZoomSettings::quantize`] is set.
    pub current_scale: f64,
    /// Zoom direction.
    pub direction: ZoomDirection,
    /// The point the step keeps fixed.
    pub anchor: Anchor,
}

/// Compute the raw delta for one wheel step.
///
/// The scale changes by `step * current_scale`, growing on negative
/// `delta_y`. The compensating pan depends on where the pointer is:
/// - over the element, the point under the cursor stays fixed;
/// - outside the element while shrinking inside a container, the element
///   glides toward the container center and arrives there as it returns to
///   scale 1;
/// - otherwise there is no pan and the element scales about its center.
///
/// Returns `None` when `delta_y` is zero or the scale cannot be measured.
#[must_use]
pub fn zoom_delta(
    geometry: &Geometry,
    pointer: Point,
    delta_y: f64,
    over_element: bool,
    settings: &ZoomSettings,
) -> Option<ZoomDelta> {
    let direction = ZoomDirection::from_wheel(delta_y)?;
    let scale = settings.quantize(current_scale(geometry.element, geometry.native)?);
    if scale <= 0.0 {
        return None;
    }
    let scale_delta = settings.quantize(direction.sign() * settings.step * scale);
    let element_center = geometry.element.center();

    let (anchor, translation) = if over_element {
        let mut offset = pointer - element_center;
        if settings.center_fitting_axes
            && let Some(container) = geometry.container
        {
            let element = geometry.element;
            if fits_or_inside(element.x0, element.x1, container.x0, container.x1) {
                offset.x = 0.0;
            }
            if fits_or_inside(element.y0, element.y1, container.y0, container.y1) {
                offset.y = 0.0;
            }
        }
        (Anchor::Pointer, -(offset / scale) * scale_delta)
    } else {
        match (direction, geometry.container) {
            (ZoomDirection::Out, Some(container)) => {
                // Divides by `1 - scale` (negative while enlarged) so that the
                // pan points from the element center toward the container center.
                let divisor = 1.0 - scale;
                if divisor.abs() < SCALE_EPSILON {
                    (Anchor::ElementCenter, Vec2::ZERO)
                } else {
                    let diff = element_center - container.center();
                    (Anchor::ContainerCenter, -(diff / divisor) * scale_delta)
                }
            }
            _ => (Anchor::ElementCenter, Vec2::ZERO),
        }
    };

    Some(ZoomDelta {
        delta: Delta::new(translation, scale_delta),
        current_scale: scale,
        direction,
        anchor,
    })
}

fn fits_or_inside(min: f64, max: f64, box_min: f64, box_max: f64) -> bool {
    max - min <= box_max - box_min || (min >= box_min && max <= box_max)
}
