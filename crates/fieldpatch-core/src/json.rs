//! JSON bridge: builds a `PatchSet` from a flat JSON object such as a
//! request body.
//!
//! Numbers keep their textual form and become deferred numeric literals;
//! strings and booleans become concrete values. Anything else is rejected.

use crate::{
    patch::PatchSet,
    path::Path,
    value::{NumericLiteral, PatchValue, Value},
};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error as ThisError;

///
/// JsonPatchError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum JsonPatchError {
    #[error("patch document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("patch entry {path} holds unsupported JSON {found}")]
    UnsupportedValue { path: Path, found: &'static str },
}

impl PatchSet {
    /// Build a patch set from a JSON document whose keys are paths.
    pub fn from_json(document: JsonValue) -> Result<Self, JsonPatchError> {
        match document {
            JsonValue::Object(map) => Self::try_from(map),
            other => Err(JsonPatchError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }
}

impl TryFrom<Map<String, JsonValue>> for PatchSet {
    type Error = JsonPatchError;

    fn try_from(map: Map<String, JsonValue>) -> Result<Self, Self::Error> {
        let mut patch = Self::new();

        for (key, value) in map {
            let path = Path::from(key);
            let value = patch_value(&path, value)?;
            patch.insert(path, value);
        }

        Ok(patch)
    }
}

fn patch_value(path: &Path, value: JsonValue) -> Result<PatchValue, JsonPatchError> {
    match value {
        JsonValue::Number(number) => Ok(PatchValue::Numeric(NumericLiteral::new(
            number.to_string(),
        ))),
        JsonValue::String(text) => Ok(PatchValue::Concrete(Value::Text(text))),
        JsonValue::Bool(flag) => Ok(PatchValue::Concrete(Value::Bool(flag))),
        other => Err(JsonPatchError::UnsupportedValue {
            path: path.clone(),
            found: json_kind(&other),
        }),
    }
}

const fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

///
/// TESTS
///
