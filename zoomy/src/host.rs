// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the host provides: measuring elements and routing events.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use zoomy_event_state::session::InputKind;

/// Geometry queries answered by the host.
///
/// Rectangles are on-screen bounds after any transform has been applied, in
/// the same coordinate space as pointer positions.
pub trait Layout {
    /// Handle identifying an element.
    type Element;

    /// Look up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Current on-screen bounds of `element`.
    fn measure_rect(&self, element: &Self::Element) -> Rect;

    /// Unscaled intrinsic size of `element`.
    fn native_size(&self, element: &Self::Element) -> Size;

    /// Bounds of the host viewport, if there is one.
    fn viewport_rect(&self) -> Option<Rect> {
        None
    }

    /// A transform the host had already applied to `element`, in CSS
    /// `matrix(...)` form.
    fn applied_transform(&self, _element: &Self::Element) -> Option<String> {
        None
    }
}

/// Where a listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The controlled element.
    Element,
    /// The boundary element.
    Boundary,
    /// The whole document.
    Document,
}

/// Listener registration offered by the host's event system.
///
/// A controller subscribes once per [`InputKind`] on attach and hands every
/// token back on detach. The host routes matching events to the controller
/// while the subscription is live.
pub trait EventSource {
    /// Identifies one subscription.
    type Token;

    /// Start delivering `kind` events from `scope`.
    fn subscribe(&mut self, kind: InputKind, scope: Scope) -> Self::Token;

    /// Stop delivering the events registered under `token`.
    fn unsubscribe(&mut self, token: Self::Token);
}

/// Token handed out by [`ListenerRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// An [`EventSource`] that only records live subscriptions.
///
/// Hosts that dispatch events themselves can consult
/// [`is_listening`](Self::is_listening) before forwarding an event.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    next: u32,
    live: Vec<(ListenerId, InputKind, Scope)>,
}

impl ListenerRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if some subscription covers `kind` events from `scope`.
    #[must_use]
    pub fn is_listening(&self, kind: InputKind, scope: Scope) -> bool {
        self.live.iter().any(|&(_, k, s)| k == kind && s == scope)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl EventSource for ListenerRegistry {
    type Token = ListenerId;

    fn subscribe(&mut self, kind: InputKind, scope: Scope) -> ListenerId {
        let id = ListenerId(self.next);
        self.next = self.next.wrapping_add(1);
        self.live.push((id, kind, scope));
        id
    }

    fn unsubscribe(&mut self, token: ListenerId) {
        self.live.retain(|&(id, _, _)| id != token);
    }
}

#[cfg(test)]
mod tests {
    use zoomy_event_state::session::InputKind;

    use super::{EventSource, ListenerRegistry, Scope};

    #[test]
    fn registry_tracks_live_subscriptions() {
        let mut registry = ListenerRegistry::new();
        assert!(registry.is_empty());

        let wheel = registry.subscribe(InputKind::Wheel, Scope::Boundary);
        let down = registry.subscribe(InputKind::PointerDown, Scope::Element);
        assert_ne!(wheel, down);
        assert_eq!(registry.len(), 2);
        assert!(registry.is_listening(InputKind::Wheel, Scope::Boundary));
        assert!(!registry.is_listening(InputKind::Wheel, Scope::Element));

        registry.unsubscribe(wheel);
        assert!(!registry.is_listening(InputKind::Wheel, Scope::Boundary));
        assert!(registry.is_listening(InputKind::PointerDown, Scope::Element));

        // Unsubscribing twice is harmless.
        registry.unsubscribe(wheel);
        registry.unsubscribe(down);
        assert!(registry.is_empty());
    }
}
