//! CSS color-expression resolver used by the design-token sync tool.
//!
//! This crate owns the conversion from the color syntaxes found in the
//! component stylesheets (hex, `oklch()`, `transparent`, and `var()` references
//! with fallbacks) into a normalized RGB value in the unit interval. It never
//! consults a live stylesheet: `var()` references resolve to their fallback.

pub mod args;
mod hex;
mod oklch;
mod var;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum nesting of `var()` fallbacks before resolution gives up.
pub const MAX_VAR_DEPTH: usize = 32;

/// Error returned by [`resolve`].
///
/// Every variant carries the offending input so callers can report which
/// token was malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The input matches none of the recognized color syntaxes.
    #[error("unsupported color format: {0}")]
    UnsupportedFormat(String),
    /// A `var()` reference cannot be resolved statically.
    #[error("invalid color expression `{expression}`: {reason}")]
    InvalidExpression {
        expression: String,
        reason: &'static str,
    },
    /// The input starts with `oklch(` but its arguments are malformed.
    #[error("invalid oklch color: {0}")]
    InvalidOklch(String),
    /// The input starts with `#` but the body is not 3 or 6 hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// An sRGB color with every channel in `[0, 1]`.
///
/// `a` is only present when the source expression carried an explicit alpha;
/// `None` means fully opaque with default compositing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl NormalizedColor {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: Some(0.0),
    };

    /// Build an opaque color, clamping each channel into `[0, 1]`.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: None,
        }
    }

    /// Attach an explicit alpha, clamped into `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: Some(clamp_unit(alpha)),
            ..self
        }
    }

    /// Alpha to use when the consumer requires one; absent alpha is opaque.
    #[must_use]
    pub fn alpha_or_opaque(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }
}

impl FromStr for NormalizedColor {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

/// Resolve a CSS color expression into a [`NormalizedColor`].
///
/// Supported forms, checked in order: `transparent`, `var(--name, fallback)`,
/// `oklch(L C H [/ A])` and `#RGB` / `#RRGGBB`.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidExpression`] for a `var()` without a
/// fallback, [`ResolveError::InvalidOklch`] and [`ResolveError::InvalidHex`]
/// for malformed function or hex bodies, and
/// [`ResolveError::UnsupportedFormat`] for anything else.
pub fn resolve(expression: &str) -> Result<NormalizedColor, ResolveError> {
    resolve_at_depth(expression, 0)
}

fn resolve_at_depth(expression: &str, depth: usize) -> Result<NormalizedColor, ResolveError> {
    let trimmed = expression.trim();

    if trimmed == "transparent" {
        return Ok(NormalizedColor::TRANSPARENT);
    }

    if trimmed.starts_with("var(") {
        if depth >= MAX_VAR_DEPTH {
            return Err(ResolveError::InvalidExpression {
                expression: trimmed.to_owned(),
                reason: "variable fallbacks are nested too deeply",
            });
        }
        let fallback = var::fallback(trimmed).ok_or_else(|| ResolveError::InvalidExpression {
            expression: trimmed.to_owned(),
            reason: "cannot resolve a variable reference without a fallback value",
        })?;
        return resolve_at_depth(fallback, depth + 1);
    }

    if trimmed.starts_with("oklch(") {
        return oklch::parse(trimmed);
    }

    if let Some(body) = trimmed.strip_prefix('#') {
        return hex::parse(body).ok_or_else(|| ResolveError::InvalidHex(trimmed.to_owned()));
    }

    Err(ResolveError::UnsupportedFormat(trimmed.to_owned()))
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
