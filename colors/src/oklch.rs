//! `oklch(L C H [/ A])` parsing and OKLCH to sRGB conversion.

use crate::{NormalizedColor, ResolveError, clamp_unit};

/// Parse an `oklch()` expression.
///
/// Lightness may carry a `%` suffix; chroma, hue and alpha are plain numbers.
/// Anything after the closing parenthesis is ignored.
pub(crate) fn parse(expression: &str) -> Result<NormalizedColor, ResolveError> {
    let invalid = || ResolveError::InvalidOklch(expression.to_owned());

    let args = expression.strip_prefix("oklch(").ok_or_else(invalid)?;
    let (args, _) = args.split_once(')').ok_or_else(invalid)?;
    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha)),
        None => (args, None),
    };

    let mut parts = channels.split_whitespace();
    let (Some(l), Some(c), Some(h), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let lightness = match l.strip_suffix('%') {
        Some(percent) => number(percent).ok_or_else(invalid)? / 100.0,
        None => number(l).ok_or_else(invalid)?,
    };
    let chroma = number(c).ok_or_else(invalid)?;
    let hue = number(h).ok_or_else(invalid)?;

    let [r, g, b] = oklch_to_srgb(lightness, chroma, hue).ok_or_else(invalid)?;
    let color = NormalizedColor::rgb(r, g, b);

    match alpha {
        Some(alpha) => {
            let mut parts = alpha.split_whitespace();
            let (Some(a), None) = (parts.next(), parts.next()) else {
                return Err(invalid());
            };
            Ok(color.with_alpha(number(a).ok_or_else(invalid)?))
        }
        None => Ok(color),
    }
}

/// Parse an unsigned decimal literal (digits and `.` only). Literals too long
/// to fit an `f64` are rejected.
fn number(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Convert OKLCH (hue in degrees) to gamma-encoded sRGB, each channel clamped
/// into `[0, 1]`.
///
/// Returns `None` when the components are large enough to overflow the
/// OKLab cube step.
pub(crate) fn oklch_to_srgb(lightness: f64, chroma: f64, hue: f64) -> Option<[f64; 3]> {
    let hue = hue.to_radians();
    let a = chroma * hue.cos();
    let b = chroma * hue.sin();

    let linear = oklab_to_linear_srgb(lightness, a, b);
    if !linear.iter().all(|channel| channel.is_finite()) {
        return None;
    }
    Some(linear.map(encode_srgb))
}

fn oklab_to_linear_srgb(l: f64, a: f64, b: f64) -> [f64; 3] {
    let l_ = (l + 0.396_337_777_4 * a + 0.215_803_757_3 * b).powi(3);
    let m_ = (l - 0.105_561_345_8 * a - 0.063_854_172_8 * b).powi(3);
    let s_ = (l - 0.089_484_177_5 * a - 1.291_485_548_0 * b).powi(3);

    [
        4.076_741_662_1 * l_ - 3.307_711_591_3 * m_ + 0.230_969_929_2 * s_,
        -1.268_438_004_6 * l_ + 2.609_757_401_1 * m_ - 0.341_319_396_5 * s_,
        -0.004_196_086_3 * l_ - 0.703_418_614_7 * m_ + 1.707_614_701_0 * s_,
    ]
}

// linear light -> sRGB transfer (IEC 61966-2-1)
fn encode_srgb(linear: f64) -> f64 {
    let l = clamp_unit(linear);
    if l <= 0.003_130_8 {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
#[path = "oklch_test.rs"]
mod tests;
