// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Affine, Vec2};
use thiserror::Error;

use crate::delta::Delta;

/// Six-component 2D affine transform applied to the controlled element.
///
/// Components are stored in CSS `matrix(a, b, c, d, e, f)` order. Zoom is
/// uniform, so `scale_x == scale_y` for every matrix this crate produces, and
/// the skew components are only carried through from parsed input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformMatrix {
    /// `a`: horizontal scale.
    pub scale_x: f64,
    /// `b`: vertical skew.
    pub skew_y: f64,
    /// `c`: horizontal skew.
    pub skew_x: f64,
    /// `d`: vertical scale.
    pub scale_y: f64,
    /// `e`: horizontal translation.
    pub translate_x: f64,
    /// `f`: vertical translation.
    pub translate_y: f64,
}

/// Errors from [`TransformMatrix::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseMatrixError {
    /// The input is not wrapped in `matrix(` ... `)`.
    #[error("expected `matrix(a, b, c, d, e, f)`")]
    MissingWrapper,
    /// The wrapper holds the wrong number of components.
    #[error("expected 6 matrix components, found {found}")]
    WrongArity {
        /// Number of comma separated components found.
        found: usize,
    },
    /// A component is not a number.
    #[error("matrix component {index} is not a number")]
    InvalidNumber {
        /// Zero-based component index.
        index: usize,
    },
    /// A component parsed to NaN or an infinity.
    #[error("matrix component {index} is not finite")]
    NonFinite {
        /// Zero-based component index.
        index: usize,
    },
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformMatrix {
    /// `matrix(1, 0, 0, 1, 0, 0)`.
    pub const IDENTITY: Self = Self::from_coeffs([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Build a matrix from CSS-ordered coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn from_coeffs(c: [f64; 6]) -> Self {
        Self {
            scale_x: c[0],
            skew_y: c[1],
            skew_x: c[2],
            scale_y: c[3],
            translate_x: c[4],
            translate_y: c[5],
        }
    }

    /// Uniform scale with a translation and no skew.
    #[must_use]
    pub const fn from_scale_translate(scale: f64, translation: Vec2) -> Self {
        Self::from_coeffs([scale, 0.0, 0.0, scale, translation.x, translation.y])
    }

    /// CSS-ordered coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn coeffs(&self) -> [f64; 6] {
        [
            self.scale_x,
            self.skew_y,
            self.skew_x,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ]
    }

    /// The uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale_x
    }

    /// The translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }

    /// Convert to a [`kurbo::Affine`] with the same coefficients.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new(self.coeffs())
    }

    /// Parse a CSS `matrix(a, b, c, d, e, f)` value.
    ///
    /// An empty string and `none` mean no transform has been applied yet and
    /// parse as [`TransformMatrix::IDENTITY`].
    pub fn parse(s: &str) -> Result<Self, ParseMatrixError> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::IDENTITY);
        }
        let inner = s
            .strip_prefix("matrix(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseMatrixError::MissingWrapper)?;

        let found = inner.split(',').count();
        if found != 6 {
            return Err(ParseMatrixError::WrongArity { found });
        }

        let mut coeffs = [0.0; 6];
        for (index, (slot, part)) in coeffs.iter_mut().zip(inner.split(',')).enumerate() {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| ParseMatrixError::InvalidNumber { index })?;
            if !value.is_finite() {
                return Err(ParseMatrixError::NonFinite { index });
            }
            *slot = value;
        }
        Ok(Self::from_coeffs(coeffs))
    }

    /// Parse like [`parse`](Self::parse), falling back to the identity matrix
    /// when the input is malformed.
    #[must_use]
    pub fn parse_or_identity(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|err| {
            log::warn!("ignoring malformed transform {s:?}: {err}");
            Self::IDENTITY
        })
    }

    /// Fold `delta` into this matrix.
    ///
    /// Translation and both scale components are increased by the delta. The
    /// matrix is left untouched, and `false` returned, when the delta is zero or
    /// when the result would not be finite.
    pub fn fold(&mut self, delta: &Delta) -> bool {
        if delta.is_zero() {
            return false;
        }
        let next = Self {
            scale_x: self.scale_x + delta.scale,
            scale_y: self.scale_y + delta.scale,
            translate_x: self.translate_x + delta.translation.x,
            translate_y: self.translate_y + delta.translation.y,
            ..*self
        };
        if !next.is_finite() {
            log::warn!("refusing non-finite transform update {delta:?}");
            return false;
        }
        *self = next;
        true
    }
}

impl fmt::Display for TransformMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.coeffs();
        write!(f, "matrix({a}, {b}, {c}, {d}, {e}, {g})")
    }
}

impl FromStr for TransformMatrix {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::{Affine, Vec2};

    use super::{ParseMatrixError, TransformMatrix};
    use crate::delta::Delta;

    #[test]
    fn empty_and_none_parse_as_identity() {
        assert_eq!(TransformMatrix::parse(""), Ok(TransformMatrix::IDENTITY));
        assert_eq!(TransformMatrix::parse("  none "), Ok(TransformMatrix::IDENTITY));
        assert_eq!(TransformMatrix::default(), TransformMatrix::IDENTITY);
    }

    #[test]
    fn parses_css_matrix_with_loose_whitespace() {
        let m = TransformMatrix::parse("matrix(1.5,0, 0 ,1.5,  -20.25, 7)").unwrap();
        assert_eq!(m.scale_x, 1.5);
        assert_eq!(m.scale_y, 1.5);
        assert_eq!(m.translate_x, -20.25);
        assert_eq!(m.translate_y, 7.0);
        assert_eq!(m.scale(), 1.5);
        assert_eq!(m.translation(), Vec2::new(-20.25, 7.0));
    }

    #[test]
    fn display_is_a_css_matrix_that_parses_back() {
        let m = TransformMatrix::from_scale_translate(2.0, Vec2::new(-10.5, 3.0));
        let css = m.to_string();
        assert_eq!(css, "matrix(2, 0, 0, 2, -10.5, 3)");
        assert_eq!(css.parse::<TransformMatrix>(), Ok(m));
    }

    #[test]
    fn malformed_input_is_reported() {
        assert_eq!(
            TransformMatrix::parse("scale(2)"),
            Err(ParseMatrixError::MissingWrapper)
        );
        assert_eq!(
            TransformMatrix::parse("matrix(1, 0, 0, 1"),
            Err(ParseMatrixError::MissingWrapper)
        );
        assert_eq!(
            TransformMatrix::parse("matrix(1, 0, 0, 1, 0)"),
            Err(ParseMatrixError::WrongArity { found: 5 })
        );
        assert_eq!(
            TransformMatrix::parse("matrix(1, 0, 0, 1, 0, px)"),
            Err(ParseMatrixError::InvalidNumber { index: 5 })
        );
        assert_eq!(
            TransformMatrix::parse("matrix(NaN, 0, 0, 1, 0, 0)"),
            Err(ParseMatrixError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn parse_or_identity_fails_soft() {
        assert_eq!(
            TransformMatrix::parse_or_identity("matrix(oops)"),
            TransformMatrix::IDENTITY
        );
        assert_eq!(
            TransformMatrix::parse_or_identity("matrix(2, 0, 0, 2, 1, 1)"),
            TransformMatrix::from_scale_translate(2.0, Vec2::new(1.0, 1.0))
        );
    }

    #[test]
    fn fold_is_additive() {
        let mut m = TransformMatrix::IDENTITY;
        assert!(m.fold(&Delta::new(Vec2::new(10.0, -5.0), 0.5)));
        assert!(m.fold(&Delta::new(Vec2::new(2.0, 1.0), -0.25)));
        assert_eq!(m.translation(), Vec2::new(12.0, -4.0));
        assert_eq!(m.scale_x, 1.25);
        assert_eq!(m.scale_y, 1.25);
        assert_eq!(m.skew_x, 0.0);
        assert_eq!(m.skew_y, 0.0);
    }

    #[test]
    fn fold_ignores_zero_and_refuses_non_finite() {
        let mut m = TransformMatrix::from_scale_translate(1.5, Vec2::new(3.0, 4.0));
        let before = m;
        assert!(!m.fold(&Delta::ZERO));
        assert!(!m.fold(&Delta::new(Vec2::new(f64::NAN, 0.0), 0.0)));
        assert!(!m.fold(&Delta::new(Vec2::ZERO, f64::INFINITY)));
        assert_eq!(m, before);
    }

    #[test]
    fn fold_round_trips_skew() {
        let mut m = TransformMatrix::from_coeffs([1.0, 0.25, -0.5, 1.0, 0.0, 0.0]);
        m.fold(&Delta::new(Vec2::new(1.0, 1.0), 0.1));
        assert_eq!(m.skew_y, 0.25);
        assert_eq!(m.skew_x, -0.5);
    }

    #[test]
    fn to_affine_keeps_coefficients() {
        let m = TransformMatrix::from_scale_translate(2.0, Vec2::new(5.0, 6.0));
        assert_eq!(
            m.to_affine(),
            Affine::translate((5.0, 6.0)) * Affine::scale(2.0)
        );
        assert_eq!(m.to_affine().as_coeffs(), m.coeffs());
    }
}
