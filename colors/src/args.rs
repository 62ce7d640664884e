//! Balanced-parenthesis scanning for CSS function arguments.
//!
//! Function arguments may themselves contain calls with comma-separated
//! arguments (`light-dark(#fff, oklch(20% 0 0 / 0.5))`), so splitting has to
//! track nesting depth instead of cutting on every comma.

/// Return the argument body of `name(...)` when the call spans the whole
/// (trimmed) expression.
///
/// Returns `None` when the expression is not a call to `name`, when the
/// parentheses are unbalanced, or when the outer call closes before the end of
/// the string (`f(a) g(b)`).
#[must_use]
pub fn function_body<'a>(expression: &'a str, name: &str) -> Option<&'a str> {
    let rest = expression.trim().strip_prefix(name)?.strip_prefix('(')?;
    if !rest.ends_with(')') {
        return None;
    }

    let mut depth = 1_usize;
    for (idx, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (idx + 1 == rest.len()).then(|| &rest[..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a function argument body on its top-level commas.
///
/// Each argument is trimmed. An empty body yields no arguments.
#[must_use]
pub fn split_arguments(body: &str) -> Vec<&str> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut args = Vec::new();
    let mut start = 0;
    for idx in top_level_commas(body) {
        args.push(body[start..idx].trim());
        start = idx + 1;
    }
    args.push(body[start..].trim());
    args
}

fn top_level_commas(body: &str) -> Vec<usize> {
    let mut depth = 0_usize;
    let mut commas = Vec::new();
    for (idx, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => commas.push(idx),
            _ => {}
        }
    }
    commas
}

#[cfg(test)]
#[path = "args_test.rs"]
mod tests;
