// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session state: track the pointer button and classify each input event.
//!
//! ## Usage
//!
//! 1) Build a [`SessionState`] when the controller is attached.
//! 2) For every delivered event, call [`SessionState::classify`] to update the
//!    button/drag flags and learn what kind of interaction the event is.
//! 3) Compute deltas. Drag deltas come from [`SessionState::drag_delta`], which
//!    reads the pointer position committed by the *previous* event.
//! 4) Finish the event with [`SessionState::commit_pointer`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoomy_event_state::session::{InputEvent, Interaction, SessionState};
//!
//! let mut session = SessionState::new();
//!
//! let down = InputEvent::PointerDown { pos: Point::new(100.0, 100.0) };
//! assert_eq!(session.classify(&down, true), Interaction::DragStart);
//! session.commit_pointer(Point::new(100.0, 100.0));
//!
//! let pos = Point::new(130.0, 115.0);
//! let mv = InputEvent::PointerMove { pos };
//! assert_eq!(session.classify(&mv, true), Interaction::DragMove);
//! let delta = session.drag_delta(pos);
//! assert_eq!((delta.x, delta.y), (30.0, 15.0));
//! session.commit_pointer(pos);
//! ```

use kurbo::{Point, Vec2};

/// The kinds of input a controller listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Primary button pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Primary button released.
    PointerUp,
    /// Pointer left the document.
    PointerLeave,
    /// Wheel scrolled.
    Wheel,
}

impl InputKind {
    /// Every input kind, in subscription order.
    pub const ALL: [Self; 5] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::PointerLeave,
        Self::Wheel,
    ];
}

/// An input event delivered by the host.
///
/// Positions are in the same coordinate space as the rectangles the host
/// measures (typically viewport pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed at `pos`.
    PointerDown {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer moved to `pos`.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Primary button released at `pos`.
    PointerUp {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer left the document. Carries no position.
    PointerLeave,
    /// Wheel scrolled with the pointer at `pos`.
    ///
    /// Negative `delta_y` scrolls up (zoom in), positive scrolls down (zoom out).
    Wheel {
        /// Pointer position.
        pos: Point,
        /// Vertical scroll amount.
        delta_y: f64,
    },
}

impl InputEvent {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::PointerDown { .. } => InputKind::PointerDown,
            Self::PointerMove { .. } => InputKind::PointerMove,
            Self::PointerUp { .. } => InputKind::PointerUp,
            Self::PointerLeave => InputKind::PointerLeave,
            Self::Wheel { .. } => InputKind::Wheel,
        }
    }

    /// The pointer position carried by this event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { pos }
            | Self::PointerMove { pos }
            | Self::PointerUp { pos }
            | Self::Wheel { pos, .. } => Some(pos),
            Self::PointerLeave => None,
        }
    }
}

/// What an event means for the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// The button went down over the element. Arms dragging; no movement yet.
    DragStart,
    /// The pointer moved with the button held: pan by the pointer delta.
    DragMove,
    /// The button was released (or the pointer left) while armed.
    DragEnd,
    /// A wheel step with a non-zero vertical delta.
    Zoom {
        /// Vertical scroll amount.
        delta_y: f64,
    },
    /// Nothing to do.
    Idle,
}

impl Interaction {
    /// Returns `true` for interactions whose default host handling should be
    /// suppressed (page scrolling, text selection while dragging).
    #[must_use]
    pub fn consumes_event(&self) -> bool {
        matches!(self, Self::DragStart | Self::DragMove | Self::Zoom { .. })
    }
}

/// Per-controller session state.
///
/// `dragging` is not sticky: it is cleared at the start of every
/// [`classify`](Self::classify) call and only set again by a move event while
/// the button is down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    button_down: bool,
    dragging: bool,
    last_pointer: Point,
    enabled: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh, enabled session with the button up and the last pointer at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            button_down: false,
            dragging: false,
            last_pointer: Point::ZERO,
            enabled: true,
        }
    }

    /// Update the button/drag flags for `event` and classify it.
    ///
    /// `over_element` tells whether the pointer is over the controlled element;
    /// only a press over the element arms dragging. The enabled gate is not
    /// consulted here, callers check [`is_enabled`](Self::is_enabled) first.
    pub fn classify(&mut self, event: &InputEvent, over_element: bool) -> Interaction {
        self.dragging = false;
        match *event {
            InputEvent::PointerDown { .. } => {
                if over_element {
                    self.button_down = true;
                    Interaction::DragStart
                } else {
                    Interaction::Idle
                }
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                let was_down = self.button_down;
                self.button_down = false;
                if was_down {
                    Interaction::DragEnd
                } else {
                    Interaction::Idle
                }
            }
            InputEvent::PointerMove { .. } => {
                if self.button_down {
                    self.dragging = true;
                    Interaction::DragMove
                } else {
                    Interaction::Idle
                }
            }
            InputEvent::Wheel { delta_y, .. } => {
                if delta_y != 0.0 && delta_y.is_finite() {
                    Interaction::Zoom { delta_y }
                } else {
                    Interaction::Idle
                }
            }
        }
    }

    /// Movement of `pos` relative to the last committed pointer position.
    #[must_use]
    pub fn drag_delta(&self, pos: Point) -> Vec2 {
        pos - self.last_pointer
    }

    /// Record `pos` as the baseline for the next event's delta.
    pub fn commit_pointer(&mut self, pos: Point) {
        self.last_pointer = pos;
    }

    /// Last committed pointer position.
    #[must_use]
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Returns `true` while the primary button is held after a press on the element.
    #[must_use]
    pub fn is_button_down(&self) -> bool {
        self.button_down
    }

    /// Returns `true` if the most recently classified event was a drag move.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` when events should be processed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resume processing events.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop processing events. Session flags are left as they are.
    pub fn disable(&mut self) {
        self.enabled = false;
    }
}
