// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a wheel zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Enlarge. Produced by scrolling up (negative wheel delta).
    In,
    /// Shrink. Produced by scrolling down (positive wheel delta).
    Out,
}

impl ZoomDirection {
    /// Direction for a vertical wheel delta, or `None` when there is no zoom.
    #[must_use]
    pub fn from_wheel(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// `1.0` for [`ZoomDirection::In`], `-1.0` for [`ZoomDirection::Out`].
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// The point a zoom step keeps visually fixed.
///
/// Reported by [`crate::zoom_delta`] so hosts can tell how a step was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// The point under the cursor stays put.
    Pointer,
    /// The element glides toward the container center while it shrinks.
    ContainerCenter,
    /// No compensating pan; scaling happens about the element's own center.
    ElementCenter,
}
