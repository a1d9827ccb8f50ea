//! String generation and conversion helpers.
//!
//! Random generation takes the RNG as an argument instead of keeping a
//! process-wide generator; callers own seeding and reuse.

use anyhow::{Context, Result, anyhow};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// General random-string charset.
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%^~*&+-=?_";
/// Password charset, without visually ambiguous characters.
const PW_LETTERS: &[u8] = b"abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789!#$%^~*&+-=?_";

/// A random string of the given length.
pub fn rand_string<R: Rng>(rng: &mut R, len: usize) -> String {
    random_from_charset(rng, len, LETTERS)
}

/// A random string of the given length, suitable for passwords.
pub fn pw_string<R: Rng>(rng: &mut R, len: usize) -> String {
    random_from_charset(rng, len, PW_LETTERS)
}

fn random_from_charset<R: Rng>(rng: &mut R, len: usize, charset: &[u8]) -> String {
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// A code of the given length derived from a fresh v4 UUID.
///
/// Up to 8 characters come from the hyphenated form, up to 32 from the
/// dehyphenated form; anything longer yields an empty string.
pub fn code(len: usize) -> String {
    let id = Uuid::new_v4().to_string();
    if len <= 8 {
        return id[..len].to_string();
    }
    let compact = id.replace('-', "");
    if len > compact.len() {
        return String::new();
    }
    compact[..len].to_string()
}

/// Convert a struct's fields to a field-name -> stringified-value map.
///
/// String fields appear verbatim; other values use their JSON rendering.
pub fn struct_to_string_map<T: Serialize>(value: &T) -> Result<BTreeMap<String, String>> {
    let json = serde_json::to_value(value).context("Failed to serialize value")?;
    let object = json
        .as_object()
        .ok_or_else(|| anyhow!("value does not serialize to a JSON object"))?;
    Ok(object
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect())
}
