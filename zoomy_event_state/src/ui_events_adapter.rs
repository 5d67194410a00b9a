// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from [`ui_events`] pointer events to [`InputEvent`].

use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerScrollEvent};

use crate::session::InputEvent;

/// How to turn line and page scroll deltas into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUnits {
    /// Pixels per scrolled line.
    pub line_height: f64,
    /// Pixels per scrolled page.
    pub page_height: f64,
}

impl Default for ScrollUnits {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            page_height: 600.0,
        }
    }
}

/// Translate a `ui-events` pointer event.
///
/// Returns `None` for events the controller has no use for (enter, gestures).
/// `Cancel` is treated like the pointer leaving the document.
#[must_use]
pub fn input_from_pointer_event(event: &PointerEvent, units: ScrollUnits) -> Option<InputEvent> {
    match event {
        PointerEvent::Down(e) => Some(InputEvent::PointerDown {
            pos: e.state.logical_point(),
        }),
        PointerEvent::Move(e) => Some(InputEvent::PointerMove {
            pos: e.current.logical_point(),
        }),
        PointerEvent::Up(e) => Some(InputEvent::PointerUp {
            pos: e.state.logical_point(),
        }),
        PointerEvent::Scroll(e) => Some(InputEvent::Wheel {
            pos: e.state.logical_point(),
            delta_y: vertical_scroll(e, units),
        }),
        PointerEvent::Leave(_) | PointerEvent::Cancel(_) => Some(InputEvent::PointerLeave),
        PointerEvent::Enter(_) | PointerEvent::Gesture(_) => None,
    }
}

fn vertical_scroll(event: &PointerScrollEvent, units: ScrollUnits) -> f64 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => pos.to_logical::<f64>(event.state.scale_factor).y,
        ScrollDelta::LineDelta(_, y) => f64::from(*y) * units.line_height,
        ScrollDelta::PageDelta(_, y) => f64::from(*y) * units.page_height,
    }
}
