use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::{fs, io::Read};

/// Serializes `obj` with object keys sorted at every level.
pub fn jsonify<T>(obj: &T) -> Result<String>
where
    T: Serialize,
{
    let value = serde_json::to_value(obj)?;
    Ok(serde_json::to_string(&sort_keys(value))?)
}

/// Rebuilds objects in key order; `preserve_order` keeps insertion order.
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut entries: Vec<(String, Value)> = obj.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<_, _>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Parses a command line argument that is either inline json, a path ending
/// in `.json`, or `-` for stdin.
pub fn load_json_arg<T>(input: &str, what: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read {} from stdin: {}", what, e))?;
        buffer
    } else if input.ends_with(".json") {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))?
    } else {
        input.to_string()
    };
    serde_json::from_str(&text).map_err(|e| anyhow!("Failed to parse {}: {}", what, e))
}
