// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect};
use thiserror::Error;
use zoomy_event_state::session::{InputEvent, InputKind, Interaction, SessionState};
use zoomy_view2d::{
    Delta, Geometry, TransformMatrix, clamp_drag, clamp_zoom, current_scale, drag_delta,
    pin_shrinking_edges, zoom_delta,
};

use crate::host::{EventSource, Layout, Scope};
use crate::options::{Boundary, Options, OptionsError};

/// Errors raised by [`Zoomy::attach`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AttachError {
    /// The options are out of range.
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// The configured boundary element does not exist.
    #[error("boundary element {0:?} not found")]
    BoundaryNotFound(String),
    /// A viewport boundary was requested but the host has no viewport.
    #[error("viewport boundary requested but the host reports no viewport")]
    NoViewport,
}

/// Result of handling one input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    /// The host should suppress its default handling of the event
    /// (page scroll, text selection).
    pub consumed: bool,
    /// The new matrix, if the event changed it.
    pub matrix: Option<TransformMatrix>,
}

impl Outcome {
    /// The event was not looked at.
    pub const IGNORED: Self = Self {
        consumed: false,
        matrix: None,
    };
}

#[derive(Clone, Debug)]
enum BoundaryTarget<E> {
    None,
    Viewport,
    Element(E),
}

/// Pan/zoom controller for one element.
///
/// `E` is the host's element handle and `T` the token type of its
/// [`EventSource`]. The controller owns the element's [`TransformMatrix`] and
/// [`SessionState`]; nothing is shared between controllers.
///
/// Every event is handled to completion by [`handle`](Self::handle): the
/// session is updated, a delta is derived from the previous pointer position
/// and fresh measurements, constrained, and folded into the matrix.
pub struct Zoomy<E, T> {
    element: E,
    boundary: BoundaryTarget<E>,
    options: Options,
    session: SessionState,
    matrix: TransformMatrix,
    listeners: [T; 5],
    on_transform: Option<Box<dyn FnMut(&TransformMatrix)>>,
}

impl<E: fmt::Debug, T: fmt::Debug> fmt::Debug for Zoomy<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zoomy")
            .field("element", &self.element)
            .field("boundary", &self.boundary)
            .field("options", &self.options)
            .field("session", &self.session)
            .field("matrix", &self.matrix)
            .field("listeners", &self.listeners)
            .field("on_transform", &self.on_transform.is_some())
            .finish()
    }
}

impl<E, T> Zoomy<E, T> {
    /// Take control of `element`.
    ///
    /// The options are validated and the boundary resolved here, so
    /// configuration mistakes surface before the first event. A transform the
    /// host had already applied becomes the starting matrix; if it does not
    /// parse, the controller starts from identity. Listeners are registered
    /// for pointer-down on the element, wheel on the boundary element (or the
    /// element when there is none) and everything else on the document.
    pub fn attach<L, S>(
        layout: &L,
        source: &mut S,
        element: E,
        options: Options,
    ) -> Result<Self, AttachError>
    where
        L: Layout<Element = E>,
        S: EventSource<Token = T>,
    {
        options.validate()?;
        let boundary = match &options.boundary {
            Boundary::None => BoundaryTarget::None,
            Boundary::Viewport => {
                if layout.viewport_rect().is_none() {
                    return Err(AttachError::NoViewport);
                }
                BoundaryTarget::Viewport
            }
            Boundary::Element(id) => BoundaryTarget::Element(
                layout
                    .element_by_id(id)
                    .ok_or_else(|| AttachError::BoundaryNotFound(id.clone()))?,
            ),
        };
        let matrix = layout
            .applied_transform(&element)
            .map_or(TransformMatrix::IDENTITY, |css| {
                TransformMatrix::parse_or_identity(&css)
            });

        let wheel_scope = match boundary {
            BoundaryTarget::None => Scope::Element,
            BoundaryTarget::Viewport => Scope::Document,
            BoundaryTarget::Element(_) => Scope::Boundary,
        };
        let listeners = InputKind::ALL.map(|kind| {
            let scope = match kind {
                InputKind::PointerDown => Scope::Element,
                InputKind::Wheel => wheel_scope,
                InputKind::PointerMove | InputKind::PointerUp | InputKind::PointerLeave => {
                    Scope::Document
                }
            };
            source.subscribe(kind, scope)
        });

        log::debug!("attached with {options:?}, starting from {matrix}");
        Ok(Self {
            element,
            boundary,
            options,
            session: SessionState::new(),
            matrix,
            listeners,
            on_transform: None,
        })
    }

    /// Handle one input event.
    ///
    /// A disabled controller returns [`Outcome::IGNORED`] without touching
    /// any state.
    pub fn handle<L>(&mut self, layout: &L, event: &InputEvent) -> Outcome
    where
        L: Layout<Element = E>,
    {
        if !self.session.is_enabled() {
            return Outcome::IGNORED;
        }

        let geometry = Geometry {
            element: layout.measure_rect(&self.element),
            container: self.container_rect(layout),
            native: layout.native_size(&self.element),
        };
        let pointer = event.position();
        let over_element = pointer.is_some_and(|p| geometry.element.contains(p));
        let interaction = self.session.classify(event, over_element);

        let delta = match (interaction, pointer) {
            (Interaction::DragMove, Some(pos)) => self.drag_step(&geometry, pos),
            (Interaction::Zoom { delta_y }, Some(pos)) => {
                self.zoom_step(&geometry, pos, delta_y, over_element)
            }
            _ => Delta::ZERO,
        };
        let changed = self.matrix.fold(&delta);

        // Only now may the next event's baseline move.
        if let Some(pos) = pointer {
            self.session.commit_pointer(pos);
        }

        if changed && let Some(callback) = &mut self.on_transform {
            callback(&self.matrix);
        }
        Outcome {
            consumed: interaction.consumes_event(),
            matrix: changed.then_some(self.matrix),
        }
    }

    /// Handle a `ui-events` pointer event.
    ///
    /// Events without a counterpart in [`InputEvent`] are ignored.
    #[cfg(feature = "ui_events_adapter")]
    pub fn handle_pointer_event<L>(
        &mut self,
        layout: &L,
        event: &ui_events::pointer::PointerEvent,
        units: zoomy_event_state::ui_events_adapter::ScrollUnits,
    ) -> Outcome
    where
        L: Layout<Element = E>,
    {
        match zoomy_event_state::ui_events_adapter::input_from_pointer_event(event, units) {
            Some(input) => self.handle(layout, &input),
            None => Outcome::IGNORED,
        }
    }

    fn container_rect<L>(&self, layout: &L) -> Option<Rect>
    where
        L: Layout<Element = E>,
    {
        match &self.boundary {
            BoundaryTarget::None => None,
            BoundaryTarget::Viewport => layout.viewport_rect(),
            BoundaryTarget::Element(container) => Some(layout.measure_rect(container)),
        }
    }

    fn drag_step(&self, geometry: &Geometry, pos: Point) -> Delta {
        let raw = drag_delta(pos, self.session.last_pointer());
        match geometry.container {
            Some(container) => clamp_drag(raw, geometry.element, container),
            None => raw,
        }
    }

    fn zoom_step(
        &self,
        geometry: &Geometry,
        pos: Point,
        delta_y: f64,
        over_element: bool,
    ) -> Delta {
        let settings = self.options.zoom_settings();
        let Some(step) = zoom_delta(geometry, pos, delta_y, over_element, &settings) else {
            log::debug!("skipping zoom: element size cannot be measured");
            return Delta::ZERO;
        };
        // The range bounds the committed scale, not the quantized one.
        let delta = clamp_zoom(step.delta, self.matrix.scale(), self.options.zoom_range());
        if delta.is_zero() {
            return delta;
        }
        let rendered =
            current_scale(geometry.element, geometry.native).unwrap_or(step.current_scale);
        match geometry.container {
            Some(container) => pin_shrinking_edges(
                delta,
                geometry.element,
                container,
                geometry.native,
                rendered + delta.scale,
            ),
            None => delta,
        }
    }

    /// The matrix the host should render the element with.
    #[must_use]
    pub fn current_matrix(&self) -> TransformMatrix {
        self.matrix
    }

    /// Session state, for inspection.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The options this controller was attached with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The controlled element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Call `callback` with the new matrix after every event that changed it.
    ///
    /// Replaces any previously registered callback.
    pub fn on_transform(&mut self, callback: impl FnMut(&TransformMatrix) + 'static) {
        self.on_transform = Some(Box::new(callback));
    }

    /// Resume handling events.
    pub fn enable(&mut self) {
        log::debug!("enabled");
        self.session.enable();
    }

    /// Keep receiving events but discard them until [`enable`](Self::enable).
    pub fn disable(&mut self) {
        log::debug!("disabled");
        self.session.disable();
    }

    /// Returns `true` while events are being handled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.session.is_enabled()
    }

    /// Remove every listener and give up control of the element.
    ///
    /// Returns the final matrix so the host can persist it.
    pub fn detach<S>(self, source: &mut S) -> TransformMatrix
    where
        S: EventSource<Token = T>,
    {
        let Self {
            listeners, matrix, ..
        } = self;
        for token in listeners {
            source.unsubscribe(token);
        }
        log::debug!("detached at {matrix}");
        matrix
    }
}
