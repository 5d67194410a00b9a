// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomy View 2D: transform matrix and pan/zoom geometry.
//!
//! This crate holds the pure, headless parts of a pan/zoom controller:
//! - [`TransformMatrix`]: the CSS-style six component matrix applied to the
//!   controlled element, with fail-soft parsing and additive folding.
//! - Delta calculation: [`drag_delta`] and [`zoom_delta`] turn pointer input and
//!   measured rectangles into an unclamped [`Delta`].
//! - Constraints: [`clamp_zoom`], [`clamp_drag`] and [`pin_shrinking_edges`]
//!   enforce the zoom range and keep the element inside its container.
//!
//! It does **not** measure anything or talk to an event system. Callers
//! measure the element and container rectangles for each event and pass them
//! in as a [`Geometry`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use zoomy_view2d::{Geometry, TransformMatrix, ZoomRange, ZoomSettings, clamp_zoom, zoom_delta};
//!
//! // A 200x200 element centered in a 400x400 container, not yet transformed.
//! let geometry = Geometry {
//!     element: Rect::new(100.0, 100.0, 300.0, 300.0),
//!     container: Some(Rect::new(0.0, 0.0, 400.0, 400.0)),
//!     native: Size::new(200.0, 200.0),
//! };
//!
//! // Scroll up with the pointer on the element center.
//! let settings = ZoomSettings::default();
//! let step = zoom_delta(&geometry, Point::new(200.0, 200.0), -100.0, true, &settings).unwrap();
//! let delta = clamp_zoom(step.delta, step.current_scale, ZoomRange::default());
//!
//! let mut matrix = TransformMatrix::IDENTITY;
//! matrix.fold(&delta);
//! assert!((matrix.scale() - 1.1).abs() < 1e-9);
//! assert_eq!(matrix.translation(), kurbo::Vec2::ZERO);
//! assert!(matrix.to_string().starts_with("matrix(1.1"));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and there is no rotation; skew components are only
//!   carried through from parsed input.
//! - Scaling is assumed to happen about the element's center, which is the
//!   default transform origin of CSS and of most retained-mode toolkits.
//! - The matrix is only ever changed by adding deltas to it.
//!
//! This crate is `no_std`.

#![no_std]

mod constrain;
mod delta;
mod matrix;
mod modes;

pub use constrain::{
    EDGE_PIN_MARGIN, SCALE_EPSILON, ZoomRange, axis_is_free, clamp_drag, clamp_zoom,
    pin_shrinking_edges,
};
pub use delta::{Delta, Geometry, ZoomDelta, ZoomSettings, current_scale, drag_delta, zoom_delta};
pub use matrix::{ParseMatrixError, TransformMatrix};
pub use modes::{Anchor, ZoomDirection};
