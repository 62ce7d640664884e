//! Bulk variable-change payloads for the Figma Variables endpoint.

use std::collections::BTreeMap;

use colors::NormalizedColor;
use serde::{Deserialize, Serialize};
use tokens::TokenSet;

use super::FigmaError;

pub const COLLECTION_TEMP_ID: &str = "collection";
pub const LIGHT_MODE_TEMP_ID: &str = "light";
pub const DARK_MODE_TEMP_ID: &str = "dark";

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesRequest {
    pub variable_collections: Vec<CollectionChange>,
    pub variable_modes: Vec<ModeChange>,
    pub variables: Vec<VariableChange>,
    pub variable_mode_values: Vec<ModeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionChange {
    pub action: Action,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_mode_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeChange {
    pub action: Action,
    pub id: String,
    pub name: String,
    pub variable_collection_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableChange {
    pub action: Action,
    pub id: String,
    pub name: String,
    pub variable_collection_id: String,
    pub resolved_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeValue {
    pub variable_id: String,
    pub mode_id: String,
    pub value: Rgba,
}

/// Figma color value; alpha is mandatory on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl From<NormalizedColor> for Rgba {
    fn from(color: NormalizedColor) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.alpha_or_opaque(),
        }
    }
}

// =============================================================================
// BUILDING
// =============================================================================

/// Build the bulk-change request creating one collection with Light and Dark
/// modes and one COLOR variable per token.
#[must_use]
pub fn build_variables_request(set: &TokenSet, collection: &str, prefix: &str) -> VariablesRequest {
    let collection_id = COLLECTION_TEMP_ID.to_owned();

    let variable_collections = vec![CollectionChange {
        action: Action::Create,
        id: collection_id.clone(),
        name: collection.to_owned(),
        initial_mode_id: Some(LIGHT_MODE_TEMP_ID.to_owned()),
    }];

    // The initial mode exists as soon as the collection does; rename it.
    let variable_modes = vec![
        ModeChange {
            action: Action::Update,
            id: LIGHT_MODE_TEMP_ID.to_owned(),
            name: "Light".to_owned(),
            variable_collection_id: collection_id.clone(),
        },
        ModeChange {
            action: Action::Create,
            id: DARK_MODE_TEMP_ID.to_owned(),
            name: "Dark".to_owned(),
            variable_collection_id: collection_id.clone(),
        },
    ];

    let mut variables = Vec::with_capacity(set.len());
    let mut variable_mode_values = Vec::with_capacity(set.len() * 2);
    for (idx, token) in set.iter().enumerate() {
        let variable_id = format!("var_{idx}");
        variables.push(VariableChange {
            action: Action::Create,
            id: variable_id.clone(),
            name: token.variable_name(prefix),
            variable_collection_id: collection_id.clone(),
            resolved_type: "COLOR",
        });
        variable_mode_values.push(ModeValue {
            variable_id: variable_id.clone(),
            mode_id: LIGHT_MODE_TEMP_ID.to_owned(),
            value: token.light.into(),
        });
        variable_mode_values.push(ModeValue {
            variable_id,
            mode_id: DARK_MODE_TEMP_ID.to_owned(),
            value: token.dark.into(),
        });
    }

    VariablesRequest { variable_collections, variable_modes, variables, variable_mode_values }
}

// =============================================================================
// RESPONSE
// =============================================================================

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    meta: Option<ApiMeta>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeta {
    #[serde(default)]
    temp_id_to_real_id: BTreeMap<String, String>,
}

/// Outcome of a successful push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushSummary {
    /// Temporary ids from the request mapped to the ids Figma assigned.
    pub created: BTreeMap<String, String>,
}

impl PushSummary {
    /// Number of variables created (collection and mode ids excluded).
    #[must_use]
    pub fn variables_created(&self) -> usize {
        self.created.keys().filter(|id| id.starts_with("var_")).count()
    }
}

pub(crate) fn parse_response(json: &str) -> Result<PushSummary, FigmaError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| FigmaError::ApiParse(e.to_string()))?;
    if api.error {
        return Err(FigmaError::ApiParse(
            api.message.unwrap_or_else(|| "response flagged as error".to_owned()),
        ));
    }

    Ok(PushSummary {
        created: api.meta.map(|meta| meta.temp_id_to_real_id).unwrap_or_default(),
    })
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
