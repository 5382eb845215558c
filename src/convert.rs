//! Generic conversion between wire mappings and typed model objects.
//!
//! The model structs in [`crate::models`] carry the field-level contract
//! (camelCase wire keys, absent keys decoding to defaults, `None` fields
//! dropped on encode). The helpers here cover the dynamic edges of that
//! contract: decoding mappings that may be absent or malformed, coercing
//! loosely-typed collections, and normalizing key casing on raw nested
//! mappings that have no typed wrapper.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Decodes a wire mapping into a model object.
///
/// Absent input, non-mapping input, and mappings that fail to deserialize
/// all degrade to the all-default object; unknown keys are ignored.
/// Decoding never fails.
pub fn decode_object<T>(value: Option<&Value>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return T::default();
    };
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!("discarding malformed mapping: {err}");
            T::default()
        }
    }
}

/// Encodes a model object into its wire mapping.
///
/// `None` fields are skipped by the model's serde attributes; any explicit
/// nulls that remain (for example inside passthrough mappings) are pruned
/// so that absent fields never appear in the output.
pub fn encode_object<T: Serialize>(obj: &T) -> Value {
    match serde_json::to_value(obj) {
        Ok(value) => prune_nulls(value),
        Err(err) => {
            warn!("discarding unencodable object: {err}");
            Value::Null
        }
    }
}

/// Coerces a raw sequence into a homogeneous list of model objects.
///
/// Absent or empty input yields an empty vec. Every element that is a
/// mapping decodes into `T`; an element that already went through a decode
/// round trips as a no-op. Order is preserved; nothing is deduplicated.
pub fn coerce_collection<T>(value: Option<&Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items.iter().map(|item| decode_object(Some(item))).collect()
}

/// Removes nulls from a JSON value, recursing into mappings and arrays.
///
/// Array elements are kept even when null, since positional lists on the
/// wire are order-sensitive; only mapping entries are dropped.
pub fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, prune_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_nulls).collect()),
        other => other,
    }
}

/// Recursively renames snake_case mapping keys to camelCase.
///
/// Used for raw nested mappings that are carried without a typed wrapper
/// and still have to hit the wire in the API's casing convention. Keys
/// without underscores pass through unchanged, so already-camelCase input
/// is a no-op.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(snake_to_camel(&key), camelize_keys(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

/// `serialize_with` hook applying [`camelize_keys`] to an untyped
/// passthrough field, so raw mappings hit the wire in the API's casing no
/// matter how the caller keyed them.
pub(crate) fn serialize_camelized<S>(
    value: &Option<Value>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => camelize_keys(value.clone()).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// [`serialize_camelized`] for untyped passthrough lists.
pub(crate) fn serialize_camelized_list<S>(
    values: &[Value],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(|value| camelize_keys(value.clone())))
}

/// Converts one snake_case key to camelCase. Leading underscores and keys
/// without underscores are left alone.
pub fn snake_to_camel(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' && i > 0 {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
