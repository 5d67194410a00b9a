// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomy: a headless pan/zoom controller.
//!
//! A [`Zoomy`] controller takes control of one element. The host feeds it
//! pointer and wheel events; for each one the controller measures the element
//! (and its boundary, if configured) through the host's [`Layout`], derives a
//! drag or zoom delta, constrains it, and folds it into the element's
//! [`TransformMatrix`]. The host renders the element with the reported matrix.
//!
//! Hosts provide two capabilities:
//! - [`Layout`]: element lookup by id and on-screen measurements.
//! - [`EventSource`]: listener registration. [`ListenerRegistry`] is a ready
//!   made implementation for hosts that dispatch events themselves.
//!
//! [`Scene`] is a minimal headless [`Layout`], useful for tests and for
//! hosts that only need to track one rectangle.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use zoomy::{InputEvent, ListenerRegistry, Options, Scene, SceneElement, Zoomy};
//!
//! let mut scene = Scene::new(Rect::new(100.0, 100.0, 300.0, 300.0))
//!     .with_container("box", Rect::new(0.0, 0.0, 400.0, 400.0));
//! let mut listeners = ListenerRegistry::new();
//!
//! let mut zoomy = Zoomy::attach(
//!     &scene,
//!     &mut listeners,
//!     SceneElement::Target,
//!     Options::new().with_boundary_element("box"),
//! )?;
//! assert_eq!(listeners.len(), 5);
//!
//! // Scroll up over the element center.
//! let wheel = InputEvent::Wheel { pos: Point::new(200.0, 200.0), delta_y: -100.0 };
//! let outcome = zoomy.handle(&scene, &wheel);
//! assert!(outcome.consumed);
//! if let Some(matrix) = outcome.matrix {
//!     scene.apply(matrix);
//! }
//! assert!((scene.matrix().scale() - 1.1).abs() < 1e-9);
//!
//! let last = zoomy.detach(&mut listeners);
//! assert!(listeners.is_empty());
//! assert_eq!(last, scene.matrix());
//! # Ok::<(), zoomy::AttachError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to Kurbo.
//! - `libm`: floating point support for `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`Options`] and [`Boundary`].
//! - `ui_events_adapter`: `Zoomy::handle_pointer_event` for `ui-events`
//!   pointer events, with `ScrollUnits` for line and page scrolling.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod host;
mod options;
mod scene;

pub use controller::{AttachError, Outcome, Zoomy};
pub use host::{EventSource, Layout, ListenerId, ListenerRegistry, Scope};
pub use options::{Boundary, Options, OptionsError};
pub use scene::{Scene, SceneElement};

pub use zoomy_event_state::session::{InputEvent, InputKind, Interaction, SessionState};
#[cfg(feature = "ui_events_adapter")]
pub use zoomy_event_state::ui_events_adapter::ScrollUnits;
pub use zoomy_view2d::{Anchor, Delta, ParseMatrixError, TransformMatrix, ZoomRange};
