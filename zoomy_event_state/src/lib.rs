// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomy Event State: pointer session tracking for pan/zoom controllers.
//!
//! This crate holds the small amount of state a pan/zoom controller needs to
//! carry from one input event to the next, and classifies each event as one of
//! drag start, drag move, drag end, zoom or idle:
//!
//! - [`session::SessionState`]: button/drag flags, the last pointer position and
//!   the enabled gate.
//! - [`session::InputEvent`]: the host-facing event vocabulary.
//! - [`session::Interaction`]: the classification result.
//!
//! The crate does not assume any particular event system. Hosts translate their
//! native events into [`session::InputEvent`]; with the `ui_events_adapter`
//! feature, `ui_events_adapter::input_from_pointer_event` does that for
//! `ui-events` pointer events.
//!
//! ## Ordering
//!
//! Deltas for an event must be computed against the pointer position committed
//! by the previous event. Call [`session::SessionState::commit_pointer`] only
//! after the event's deltas have been derived:
//!
//! ```rust
//! use kurbo::Point;
//! use zoomy_event_state::session::{InputEvent, Interaction, SessionState};
//!
//! let mut session = SessionState::new();
//! session.classify(&InputEvent::PointerDown { pos: Point::new(10.0, 10.0) }, true);
//! session.commit_pointer(Point::new(10.0, 10.0));
//!
//! let pos = Point::new(15.0, 12.0);
//! let kind = session.classify(&InputEvent::PointerMove { pos }, true);
//! assert_eq!(kind, Interaction::DragMove);
//! let delta = session.drag_delta(pos);
//! session.commit_pointer(pos);
//! assert_eq!((delta.x, delta.y), (5.0, 2.0));
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: translate `ui_events::pointer::PointerEvent`.
//!
//! This crate is `no_std`.

#![no_std]

pub mod session;

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events_adapter;
