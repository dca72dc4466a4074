//! # Catalog Normalizer
//!
//! Turns a raw food export into [`CatalogRecord`]s.
//!
//! ## Accepted Shapes
//! - Bare list: `[{...}, {...}]`
//! - Wrapped: `{"foods": [...]}` or `{"data": [...]}`
//!
//! ## Field Resolution
//! Each field has an ordered list of candidate keys. The first key present with a non-null value wins.
//!
//! | field      | candidates                                                        | fallback               |
//! |------------|-------------------------------------------------------------------|------------------------|
//! | `id`       | `foodId`, `id`, `code`, `foodcode`, `FoodId`, `FOOD_ID`           | hash of name+keywords  |
//! | `name`     | `foodName`, `displayName`, `name`, `title`, `FoodName`, `matvare` | `"Unknown"`            |
//! | `keywords` | `searchKeywords`, `keywords`, `searchTerms`, `tags`               | `""`                   |
//!
//! Keyword lists are joined with a single space.
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::{CatalogError, CatalogRecord, fold};

pub const ID_FIELDS: &[&str] = &["foodId", "id", "code", "foodcode", "FoodId", "FOOD_ID"];
pub const NAME_FIELDS: &[&str] = &[
    "foodName",
    "displayName",
    "name",
    "title",
    "FoodName",
    "matvare",
];
pub const KEYWORD_FIELDS: &[&str] = &["searchKeywords", "keywords", "searchTerms", "tags"];

pub const WRAPPER_KEYS: &[&str] = &["foods", "data"];
pub const UNKNOWN_NAME: &str = "Unknown";
pub const GENERATED_ID_PREFIX: &str = "gen-";

pub fn parse(text: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
    let raw: Value = serde_json::from_str(text)?;

    Ok(normalize(&raw))
}

pub fn normalize(raw: &Value) -> Vec<CatalogRecord> {
    entries(raw).iter().filter_map(normalize_entry).collect()
}

fn entries(raw: &Value) -> &[Value] {
    match raw {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => WRAPPER_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

fn normalize_entry(entry: &Value) -> Option<CatalogRecord> {
    let Value::Object(fields) = entry else {
        return None;
    };

    let name = resolve(fields, NAME_FIELDS)
        .map(stringify)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let keywords = match resolve(fields, KEYWORD_FIELDS) {
        Some(Value::Array(items)) => items.iter().map(stringify).collect::<Vec<_>>().join(" "),
        Some(value) => stringify(value),
        None => String::new(),
    };

    let id = resolve(fields, ID_FIELDS)
        .map(stringify)
        .unwrap_or_else(|| generated_id(&name, &keywords));

    if id.is_empty() || name.is_empty() {
        return None;
    }

    Some(CatalogRecord { id, name, keywords })
}

fn resolve<'a>(fields: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|key| fields.get(*key).filter(|value| !value.is_null()))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Stable id for entries that carry none, so rebuilding the same dataset yields the same ids.
pub fn generated_id(name: &str, keywords: &str) -> String {
    let digest = Sha256::digest(format!("{}\n{}", fold(name), fold(keywords)).as_bytes());

    format!("{GENERATED_ID_PREFIX}{}", &hex::encode(digest)[..16])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(id: &str, name: &str, keywords: &str) -> CatalogRecord {
        CatalogRecord {
            id: id.to_string(),
            name: name.to_string(),
            keywords: keywords.to_string(),
        }
    }

    #[test]
    fn test_accepts_all_shapes() {
        let item = json!({ "id": 1, "name": "Melk" });
        let expected = vec![record("1", "Melk", "")];

        assert_eq!(normalize(&json!([item.clone()])), expected);
        assert_eq!(normalize(&json!({ "foods": [item.clone()] })), expected);
        assert_eq!(normalize(&json!({ "data": [item] })), expected);
    }

    #[test]
    fn test_unknown_shapes_are_empty() {
        assert!(normalize(&json!({ "items": [{ "id": 1, "name": "Melk" }] })).is_empty());
        assert!(normalize(&json!("foods")).is_empty());
        assert!(normalize(&json!(null)).is_empty());
    }

    #[test]
    fn test_field_priority() {
        let raw = json!([{
            "code": "c-1",
            "foodId": "f-1",
            "title": "Tittel",
            "foodName": "Kjøttdeig",
            "tags": ["ignored"],
            "searchKeywords": ["storfe", "kjøtt"],
        }]);

        assert_eq!(normalize(&raw), vec![record("f-1", "Kjøttdeig", "storfe kjøtt")]);
    }

    #[test]
    fn test_alternative_field_names() {
        let raw = json!([
            { "FOOD_ID": 12, "matvare": "Brunost", "searchTerms": "ost geit" },
            { "foodcode": "A1", "displayName": "Agurk", "keywords": "grønnsak" },
            { "FoodId": "x", "FoodName": "Fløte" },
        ]);

        assert_eq!(
            normalize(&raw),
            vec![
                record("12", "Brunost", "ost geit"),
                record("A1", "Agurk", "grønnsak"),
                record("x", "Fløte", ""),
            ]
        );
    }

    #[test]
    fn test_null_falls_through() {
        let raw = json!([{ "foodId": null, "id": "2", "foodName": null, "name": "Ost" }]);

        assert_eq!(normalize(&raw), vec![record("2", "Ost", "")]);
    }

    #[test]
    fn test_drops_empty_fields() {
        let raw = json!([
            { "id": "", "name": "Melk" },
            { "id": "1", "name": "" },
            { "id": "2", "name": "Ost" },
            "not an object",
        ]);

        assert_eq!(normalize(&raw), vec![record("2", "Ost", "")]);
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let raw = json!([{ "id": "9" }]);

        assert_eq!(normalize(&raw), vec![record("9", UNKNOWN_NAME, "")]);
    }

    #[test]
    fn test_generated_id_is_deterministic() {
        let raw = json!([{ "name": "Havregryn", "keywords": ["frokost"] }]);

        let first = normalize(&raw);
        let second = normalize(&raw);
        assert_eq!(first, second);
        assert!(first[0].id.starts_with(GENERATED_ID_PREFIX));
        assert_eq!(first[0].id.len(), GENERATED_ID_PREFIX.len() + 16);
    }

    #[test]
    fn test_renormalize_is_stable() {
        let raw = json!({ "foods": [
            { "name": "Havregryn", "keywords": ["frokost", "korn"] },
            { "foodId": 3, "foodName": "Egg", "tags": "frokost" },
        ]});

        let once = normalize(&raw);
        assert_eq!(once[0].keywords, "frokost korn");

        let twice = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("[{"), Err(CatalogError::Format(_))));
        assert_eq!(parse("[]").unwrap(), vec![]);
    }
}
