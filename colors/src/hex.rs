//! `#RGB` / `#RRGGBB` parsing.

use crate::NormalizedColor;

/// Parse the body of a hex color (the text after `#`).
///
/// Three-digit bodies are expanded by duplicating each digit. Returns `None`
/// unless the expanded body is exactly six hex digits.
pub(crate) fn parse(body: &str) -> Option<NormalizedColor> {
    let expanded: String = if body.len() == 3 {
        body.chars().flat_map(|c| [c, c]).collect()
    } else {
        body.to_owned()
    };

    if expanded.len() != 6 || !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let digits: Vec<u32> = expanded.chars().filter_map(|c| c.to_digit(16)).collect();
    let channel = |i: usize| f64::from(digits[i] * 16 + digits[i + 1]) / 255.0;

    Some(NormalizedColor::rgb(channel(0), channel(2), channel(4)))
}

#[cfg(test)]
#[path = "hex_test.rs"]
mod tests;
