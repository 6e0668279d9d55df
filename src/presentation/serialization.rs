//! Lenient deserializers for loosely-typed Gitee payloads.
//!
//! Gitee is not consistent about field types across endpoints (ids arrive as
//! numbers or strings, flags as booleans or `"true"`, empty descriptions as
//! `""` or `null`). These helpers turn anything unexpected into `None` instead
//! of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes `Option<T>`, yielding `None` when the value is absent, null,
/// or of another type
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like [`lenient`] for strings, additionally mapping `""` to `None`
pub fn option_string_empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Accepts a numeric id given either as a JSON number or a numeric string
pub fn u64_or_string_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts a flag given as a JSON boolean or as `"true"`/`"false"`
pub fn string_as_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decodes `source` into a declared schema, falling back to the schema's
/// default when the payload does not fit (e.g. a null body)
pub fn from_source<T: DeserializeOwned + Default>(source: &Value) -> T {
    T::deserialize(source).unwrap_or_default()
}
