//! Fallback extraction for `var(--name, fallback)` references.

/// Extract the fallback expression from a `var()` reference.
///
/// The separator is the first comma at nesting depth 1, so commas inside a
/// nested call in the fallback (`var(--x, light-dark(#fff, #000))`) are kept.
/// Returns `None` when the expression is not a `var()` call or when the outer
/// parenthesis closes before any separator.
pub(crate) fn fallback(expression: &str) -> Option<&str> {
    let trimmed = expression.trim();
    if !trimmed.starts_with("var(") || !trimmed.ends_with(')') {
        return None;
    }

    let mut depth = 0_usize;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return None;
                }
            }
            ',' if depth == 1 => {
                let close = trimmed.len() - 1;
                return Some(trimmed[idx + 1..close].trim());
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "var_test.rs"]
mod tests;
