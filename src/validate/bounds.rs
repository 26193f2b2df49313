//! Effective length bounds resolution.

use super::length::LengthOptions;

/// A resolved `(lower, upper)` pair of inclusive length bounds.
///
/// Both sides absent means the caller never declared a usable constraint;
/// downstream code must treat that as a fatal misconfiguration, not a
/// validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: Option<usize>,
    pub upper: Option<usize>,
}

impl Bounds {
    /// Computes the single effective bounds pair for a set of overlapping
    /// constraint options.
    ///
    /// Precedence: an exact-size option wins outright and pins both sides.
    /// Otherwise `min` (with `max` if present), otherwise `max` alone,
    /// otherwise an inclusive range, otherwise unconstrained.
    pub fn resolve(options: &LengthOptions) -> Self {
        if let Some(exact) = options.is {
            return Self {
                lower: Some(exact),
                upper: Some(exact),
            };
        }
        if let Some(min) = options.min {
            return Self {
                lower: Some(min),
                upper: options.max,
            };
        }
        if let Some(max) = options.max {
            return Self {
                lower: None,
                upper: Some(max),
            };
        }
        if let Some(range) = &options.within {
            return Self {
                lower: Some(*range.start()),
                upper: Some(*range.end()),
            };
        }
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Returns true when neither side is bounded.
    pub fn is_unconstrained(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}
