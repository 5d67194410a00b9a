// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless [`Layout`] for hosts without a layout engine of their own.

use alloc::string::String;

use kurbo::{Affine, Rect, Size};
use zoomy_view2d::TransformMatrix;

use crate::host::Layout;

/// Elements of a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneElement {
    /// The controlled element.
    Target,
    /// The named container, if the scene has one.
    Container,
}

/// One transformed element, optionally inside a named container.
///
/// The element is laid out in `layout_box` and rendered with the current
/// matrix applied about the box center, the way a CSS `transform` with the
/// default origin behaves. Feed every matrix the controller reports into
/// [`apply`](Self::apply) to keep measurements in step.
#[derive(Clone, Debug)]
pub struct Scene {
    layout_box: Rect,
    native: Size,
    container: Option<(String, Rect)>,
    viewport: Option<Rect>,
    persisted: Option<String>,
    matrix: TransformMatrix,
}

impl Scene {
    /// A scene whose element occupies `layout_box` untransformed.
    ///
    /// The native size defaults to the size of the layout box.
    #[must_use]
    pub fn new(layout_box: Rect) -> Self {
        Self {
            layout_box,
            native: layout_box.size(),
            container: None,
            viewport: None,
            persisted: None,
            matrix: TransformMatrix::IDENTITY,
        }
    }

    /// Override the element's intrinsic size.
    #[must_use]
    pub fn with_native_size(mut self, native: Size) -> Self {
        self.native = native;
        self
    }

    /// Add a container reachable through [`Layout::element_by_id`] as `id`.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.container = Some((id.into(), rect));
        self
    }

    /// Give the scene a viewport.
    #[must_use]
    pub fn with_viewport(mut self, rect: Rect) -> Self {
        self.viewport = Some(rect);
        self
    }

    /// Start from a previously persisted CSS transform.
    ///
    /// The rendered matrix falls back to identity if `css` does not parse.
    #[must_use]
    pub fn with_persisted_transform(mut self, css: impl Into<String>) -> Self {
        let css = css.into();
        self.matrix = TransformMatrix::parse_or_identity(&css);
        self.persisted = Some(css);
        self
    }

    /// Render the element with `matrix` from now on.
    pub fn apply(&mut self, matrix: TransformMatrix) {
        self.matrix = matrix;
    }

    /// The matrix the element is currently rendered with.
    #[must_use]
    pub fn matrix(&self) -> TransformMatrix {
        self.matrix
    }

    /// On-screen bounds of the transformed element.
    #[must_use]
    pub fn element_rect(&self) -> Rect {
        let origin = self.layout_box.center().to_vec2();
        let transform =
            Affine::translate(origin) * self.matrix.to_affine() * Affine::translate(-origin);
        transform.transform_rect_bbox(self.layout_box)
    }

    /// Bounds of the container, if any.
    #[must_use]
    pub fn container_rect(&self) -> Option<Rect> {
        self.container.as_ref().map(|(_, rect)| *rect)
    }
}

impl Layout for Scene {
    type Element = SceneElement;

    fn element_by_id(&self, id: &str) -> Option<SceneElement> {
        match &self.container {
            Some((name, _)) if name == id => Some(SceneElement::Container),
            _ => None,
        }
    }

    fn measure_rect(&self, element: &SceneElement) -> Rect {
        match element {
            SceneElement::Target => self.element_rect(),
            SceneElement::Container => self.container_rect().unwrap_or(Rect::ZERO),
        }
    }

    fn native_size(&self, element: &SceneElement) -> Size {
        match element {
            SceneElement::Target => self.native,
            SceneElement::Container => self.container_rect().map_or(Size::ZERO, |r| r.size()),
        }
    }

    fn viewport_rect(&self) -> Option<Rect> {
        self.viewport
    }

    fn applied_transform(&self, element: &SceneElement) -> Option<String> {
        match element {
            SceneElement::Target => self.persisted.clone(),
            SceneElement::Container => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};
    use zoomy_view2d::TransformMatrix;

    use super::{Scene, SceneElement};
    use crate::host::Layout;

    #[test]
    fn identity_measures_the_layout_box() {
        let scene = Scene::new(Rect::new(100.0, 100.0, 300.0, 200.0));
        assert_eq!(scene.element_rect(), Rect::new(100.0, 100.0, 300.0, 200.0));
        assert_eq!(
            scene.native_size(&SceneElement::Target),
            Size::new(200.0, 100.0)
        );
    }

    #[test]
    fn scaling_happens_about_the_box_center() {
        let mut scene = Scene::new(Rect::new(100.0, 100.0, 300.0, 300.0));
        scene.apply(TransformMatrix::from_scale_translate(2.0, Vec2::new(10.0, -20.0)));
        let rect = scene.element_rect();
        assert_eq!(rect, Rect::new(10.0, -20.0, 410.0, 380.0));
        assert_eq!(scene.matrix().scale(), 2.0);
    }

    #[test]
    fn container_is_found_by_id() {
        let scene = Scene::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_container("box", Rect::new(-5.0, -5.0, 15.0, 15.0));
        assert_eq!(scene.element_by_id("box"), Some(SceneElement::Container));
        assert_eq!(scene.element_by_id("other"), None);
        assert_eq!(
            scene.measure_rect(&SceneElement::Container),
            Rect::new(-5.0, -5.0, 15.0, 15.0)
        );
        assert_eq!(scene.viewport_rect(), None);
    }

    #[test]
    fn persisted_transform_is_parsed_fail_soft() {
        let scene = Scene::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_persisted_transform("matrix(2, 0, 0, 2, 5, 5)");
        assert_eq!(scene.matrix().scale(), 2.0);
        assert_eq!(
            scene.applied_transform(&SceneElement::Target).as_deref(),
            Some("matrix(2, 0, 0, 2, 5, 5)")
        );

        let broken = Scene::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_persisted_transform("matrix(2, 0)");
        assert_eq!(broken.matrix(), TransformMatrix::IDENTITY);
    }
}
