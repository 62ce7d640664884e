//! Design-token extraction from component stylesheets.
//!
//! Collects `--name: value` custom-property declarations, splits
//! `light-dark(light, dark)` pairs, and resolves each half through
//! [`colors::resolve`] into a [`TokenSet`] ready to push into a design tool.

use std::collections::HashMap;

use colors::NormalizedColor;
use colors::args::{function_body, split_arguments};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "--color-";

/// Error returned by [`build_token_set`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// One half of a token's value is not a resolvable color.
    #[error("token {name} has an invalid color: {source}")]
    Resolve {
        name: String,
        source: colors::ResolveError,
    },
    /// The value is a `light-dark()` call without exactly two arguments.
    #[error("token {name} has a malformed light-dark() value: {value}")]
    InvalidLightDark { name: String, value: String },
}

/// A single custom-property declaration found in a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Selector of the innermost enclosing rule block, empty at top level.
    pub selector: String,
    /// Property name including the leading `--`.
    pub name: String,
    /// Raw value text, trimmed.
    pub value: String,
}

/// A resolved color token with one value per color scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub name: String,
    pub light: NormalizedColor,
    pub dark: NormalizedColor,
}

impl ColorToken {
    /// Design-tool variable name: the prefix is dropped and the first
    /// hyphen becomes a group separator (`--color-bg-primary` -> `bg/primary`).
    #[must_use]
    pub fn variable_name(&self, prefix: &str) -> String {
        let bare = self
            .name
            .strip_prefix(prefix)
            .or_else(|| self.name.strip_prefix("--"))
            .unwrap_or(&self.name);
        match bare.split_once('-') {
            Some((group, rest)) if !group.is_empty() && !rest.is_empty() => format!("{group}/{rest}"),
            _ => bare.to_owned(),
        }
    }

    /// Whether the light and dark values differ.
    #[must_use]
    pub fn is_scheme_dependent(&self) -> bool {
        self.light != self.dark
    }
}

/// Which declarations become tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenFilter {
    pub prefix: String,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
        }
    }
}

impl TokenFilter {
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    #[must_use]
    pub fn allows(&self, declaration: &Declaration) -> bool {
        declaration.name.starts_with(&self.prefix)
    }
}

/// Resolved tokens in order of first declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub tokens: Vec<ColorToken>,
}

impl TokenSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorToken> {
        self.tokens.iter().find(|token| token.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorToken> {
        self.tokens.iter()
    }
}

/// Collect every custom-property declaration in `css`, in source order.
///
/// Comments are skipped and semicolons or braces inside parentheses do not end
/// a declaration. Regular properties and at-rule preludes are ignored.
#[must_use]
pub fn extract_declarations(css: &str) -> Vec<Declaration> {
    let css = strip_comments(css);
    let mut selectors: Vec<String> = Vec::new();
    let mut declarations = Vec::new();
    let mut buffer = String::new();
    let mut depth = 0_usize;

    for ch in css.chars() {
        match ch {
            '(' => {
                depth += 1;
                buffer.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                buffer.push(ch);
            }
            '{' if depth == 0 => {
                selectors.push(buffer.trim().to_owned());
                buffer.clear();
            }
            '}' if depth == 0 => {
                push_declaration(&buffer, &selectors, &mut declarations);
                buffer.clear();
                selectors.pop();
            }
            ';' if depth == 0 => {
                push_declaration(&buffer, &selectors, &mut declarations);
                buffer.clear();
            }
            _ => buffer.push(ch),
        }
    }
    push_declaration(&buffer, &selectors, &mut declarations);

    declarations
}

fn push_declaration(statement: &str, selectors: &[String], out: &mut Vec<Declaration>) {
    let statement = statement.trim();
    if !statement.starts_with("--") {
        return;
    }
    let Some((name, value)) = statement.split_once(':') else {
        return;
    };
    out.push(Declaration {
        selector: selectors.last().cloned().unwrap_or_default(),
        name: name.trim().to_owned(),
        value: value.trim().to_owned(),
    });
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Split `light-dark(light, dark)` into its two top-level arguments.
///
/// Returns `None` for any other value, including `light-dark()` calls with the
/// wrong number of arguments.
#[must_use]
pub fn split_light_dark(value: &str) -> Option<(&str, &str)> {
    let body = function_body(value, "light-dark")?;
    match split_arguments(body).as_slice() {
        [light, dark] => Some((*light, *dark)),
        _ => None,
    }
}

/// Extract and resolve every declaration accepted by `filter`.
///
/// A later declaration of the same name replaces the earlier value but keeps
/// its position.
///
/// # Errors
///
/// Returns the first [`TokenError`] encountered, naming the offending token.
pub fn build_token_set(css: &str, filter: &TokenFilter) -> Result<TokenSet, TokenError> {
    let mut set = TokenSet::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for declaration in extract_declarations(css) {
        if !filter.allows(&declaration) {
            tracing::debug!(name = %declaration.name, "skipping declaration outside token prefix");
            continue;
        }

        let token = resolve_declaration(&declaration)?;
        tracing::debug!(
            name = %token.name,
            scheme_dependent = token.is_scheme_dependent(),
            "resolved token"
        );
        if let Some(&idx) = positions.get(&token.name) {
            tracing::debug!(name = %token.name, selector = %declaration.selector, "token redeclared");
            set.tokens[idx] = token;
        } else {
            positions.insert(token.name.clone(), set.tokens.len());
            set.tokens.push(token);
        }
    }

    Ok(set)
}

/// Resolve one declaration into a [`ColorToken`].
///
/// # Errors
///
/// See [`build_token_set`].
pub fn resolve_declaration(declaration: &Declaration) -> Result<ColorToken, TokenError> {
    let value = declaration.value.as_str();
    let (light, dark) = if value.starts_with("light-dark(") {
        split_light_dark(value).ok_or_else(|| TokenError::InvalidLightDark {
            name: declaration.name.clone(),
            value: value.to_owned(),
        })?
    } else {
        (value, value)
    };

    let resolve = |expression: &str| {
        colors::resolve(expression).map_err(|source| TokenError::Resolve {
            name: declaration.name.clone(),
            source,
        })
    };

    Ok(ColorToken {
        name: declaration.name.clone(),
        light: resolve(light)?,
        dark: resolve(dark)?,
    })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
