// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::string::String;

use thiserror::Error;
use zoomy_view2d::{ZoomRange, ZoomSettings};

/// Which rectangle, if any, bounds the controlled element's movement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Unbounded: only the zoom range applies.
    #[default]
    None,
    /// The host's viewport, as reported by [`crate::Layout::viewport_rect`].
    Viewport,
    /// An element looked up by id through [`crate::Layout::element_by_id`].
    Element(String),
}

/// Per-controller configuration, fixed at attach time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    /// Bounding rectangle for drag and zoom movement.
    pub boundary: Boundary,
    /// Largest allowed scale. Defaults to `4.0`.
    pub zoom_upper_bound: f64,
    /// Smallest allowed scale. Defaults to `1.0`, never shrinking below the
    /// original size.
    pub zoom_lower_bound: f64,
    /// Relative scale change per wheel step. Defaults to `0.1`.
    pub zoom_step: f64,
    /// Round scales and scale steps to multiples of `zoom_step`. Defaults to `true`.
    pub quantize_scale: bool,
    /// Ignore the pointer offset on axes where the element fits in its
    /// container. Defaults to `false`.
    pub center_fitting_axes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            boundary: Boundary::None,
            zoom_upper_bound: 4.0,
            zoom_lower_bound: 1.0,
            zoom_step: 0.1,
            quantize_scale: true,
            center_fitting_axes: false,
        }
    }
}

/// Invalid [`Options`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OptionsError {
    /// The upper zoom bound is not a finite number greater than 1.
    #[error("zoom upper bound must be a finite number greater than 1, got {0}")]
    InvalidUpperBound(f64),
    /// The lower zoom bound is not a finite positive number.
    #[error("zoom lower bound must be a finite positive number, got {0}")]
    InvalidLowerBound(f64),
    /// The lower zoom bound is not below the upper one.
    #[error("zoom lower bound {lower} is not below the upper bound {upper}")]
    EmptyZoomRange {
        /// Configured lower bound.
        lower: f64,
        /// Configured upper bound.
        upper: f64,
    },
    /// The zoom step is not strictly between 0 and 1.
    #[error("zoom step must lie strictly between 0 and 1, got {0}")]
    InvalidZoomStep(f64),
    /// A boundary element was requested with an empty id.
    #[error("boundary element id is empty")]
    EmptyBoundaryId,
}

impl Options {
    /// Default options: unbounded, zoom between 1 and 4 in steps of 0.1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound movement by the element with the given id.
    #[must_use]
    pub fn with_boundary_element(mut self, id: impl Into<String>) -> Self {
        self.boundary = Boundary::Element(id.into());
        self
    }

    /// Bound movement by the host viewport.
    #[must_use]
    pub fn with_viewport_boundary(mut self) -> Self {
        self.boundary = Boundary::Viewport;
        self
    }

    /// Set the largest allowed scale.
    #[must_use]
    pub fn with_zoom_upper_bound(mut self, upper: f64) -> Self {
        self.zoom_upper_bound = upper;
        self
    }

    /// Set the smallest allowed scale.
    #[must_use]
    pub fn with_zoom_lower_bound(mut self, lower: f64) -> Self {
        self.zoom_lower_bound = lower;
        self
    }

    /// Set the relative scale change per wheel step.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }

    /// Turn scale quantization on or off.
    #[must_use]
    pub fn with_quantized_scale(mut self, quantize: bool) -> Self {
        self.quantize_scale = quantize;
        self
    }

    /// Turn centering on fitting axes on or off.
    #[must_use]
    pub fn with_center_fitting_axes(mut self, center: bool) -> Self {
        self.center_fitting_axes = center;
        self
    }

    /// Check the options for values the controller cannot work with.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let upper = self.zoom_upper_bound;
        let lower = self.zoom_lower_bound;
        if !(upper.is_finite() && upper > 1.0) {
            return Err(OptionsError::InvalidUpperBound(upper));
        }
        if !(lower.is_finite() && lower > 0.0) {
            return Err(OptionsError::InvalidLowerBound(lower));
        }
        if lower >= upper {
            return Err(OptionsError::EmptyZoomRange { lower, upper });
        }
        let step = self.zoom_step;
        if !(step.is_finite() && step > 0.0 && step < 1.0) {
            return Err(OptionsError::InvalidZoomStep(step));
        }
        if matches!(&self.boundary, Boundary::Element(id) if id.is_empty()) {
            return Err(OptionsError::EmptyBoundaryId);
        }
        Ok(())
    }

    /// The allowed scale range.
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        ZoomRange::new(self.zoom_lower_bound, self.zoom_upper_bound)
    }

    /// Wheel step tuning derived from these options.
    #[must_use]
    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            step: self.zoom_step,
            quantize: self.quantize_scale,
            center_fitting_axes: self.center_fitting_axes,
        }
    }
}
