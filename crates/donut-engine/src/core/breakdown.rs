//! Server payloads inlined into the chart markup: the per-category
//! good/bad breakdown and the active-category list. The breakdown
//! arrives either as a JSON object or as base64-encoded JSON, depending
//! on the template path that produced the page.

use std::borrow::Cow;
use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

use crate::api::types::{Category, CategorySet};
use crate::error::EngineError;

/// One category's attribute summary as reported by the server. Aliases
/// cover payloads marshaled without JSON tags, where Go field names keep
/// their exported casing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryBreakdown {
    /// Count of good attributes. Any positive value makes the category
    /// qualifying.
    #[serde(default, alias = "Good")]
    pub good: u32,
    #[serde(default, alias = "Bad")]
    pub bad: u32,
    #[serde(default, alias = "Color")]
    pub color: Option<String>,
    #[serde(default, alias = "Keywords")]
    pub keywords: Vec<String>,
    #[serde(default, alias = "BadKeywords")]
    pub bad_keywords: Vec<String>,
}

impl CategoryBreakdown {
    pub fn qualifying(&self) -> bool {
        self.good > 0
    }
}

/// Full breakdown payload: category label to attribute summary. Unknown
/// labels are carried but ignored by the allocator.
pub type BreakdownMap = HashMap<String, CategoryBreakdown>;

/// Decode a breakdown payload.
///
/// Payloads that start with `{` or `[` are parsed as JSON text directly;
/// anything else goes through base64 first and falls back to the raw
/// string when that fails. An empty payload is an empty map.
pub fn decode_breakdown(raw: &str) -> Result<BreakdownMap, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(BreakdownMap::new());
    }

    let text: Cow<str> = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        Cow::Borrowed(raw)
    } else {
        match decode_base64_text(trimmed) {
            Ok(json) => Cow::Owned(json),
            Err(err) => {
                log::warn!("breakdown base64 decode failed, trying raw payload: {err}");
                Cow::Borrowed(raw)
            }
        }
    };

    Ok(serde_json::from_str(&text)?)
}

fn decode_base64_text(raw: &str) -> Result<String, EngineError> {
    let bytes = BASE64.decode(raw)?;
    Ok(String::from_utf8(bytes)?)
}

/// Categories whose breakdown reports at least one good attribute.
/// A category missing from the map is simply not qualifying.
pub fn qualifying_categories(map: &BreakdownMap) -> CategorySet {
    Category::NAMED
        .into_iter()
        .filter(|cat| map.get(cat.label()).is_some_and(|b| b.qualifying()))
        .collect()
}

/// Decode the active-category payload: a JSON array of display labels.
///
/// A blank payload means no page-side restriction, so every category is
/// active. Unknown labels are skipped with a warning.
pub fn decode_active(raw: &str) -> Result<CategorySet, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(CategorySet::ALL);
    }

    let labels: Vec<String> = serde_json::from_str(trimmed)?;
    let mut set = CategorySet::EMPTY;
    for label in &labels {
        match Category::from_label(label) {
            Some(cat) => {
                set.insert(cat);
            }
            None => log::warn!("ignoring unknown active category {label:?}"),
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_payload() {
        let map = decode_breakdown(r#"{"สุขภาพ":{"good":2,"bad":0},"ความรัก":{"good":0,"bad":3}}"#)
            .unwrap();
        let qualifying = qualifying_categories(&map);
        assert!(qualifying.contains(Category::Health));
        assert!(!qualifying.contains(Category::Love));
        assert_eq!(qualifying.len(), 1);
    }

    #[test]
    fn base64_payload() {
        // {"สุขภาพ":{"good":2,"bad":1},"การงาน":{"good":0}}
        let raw = "eyLguKrguLjguILguKDguLLguJ4iOnsiZ29vZCI6MiwiYmFkIjoxfSwi4LiB4Liy4Lij4LiH4Liy4LiZIjp7Imdvb2QiOjB9fQ==";
        let map = decode_breakdown(raw).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["สุขภาพ"].good, 2);
        assert_eq!(map["สุขภาพ"].bad, 1);
        assert!(qualifying_categories(&map).contains(Category::Health));
    }

    #[test]
    fn go_struct_casing_is_accepted() {
        // {"การเงิน":{"Good":3,"Bad":1,"keywords":["a","b"]}}
        let raw = "eyLguIHguLLguKPguYDguIfguLTguJkiOnsiR29vZCI6MywiQmFkIjoxLCJrZXl3b3JkcyI6WyJhIiwiYiJdfX0=";
        let map = decode_breakdown(raw).unwrap();
        let finance = &map["การเงิน"];
        assert_eq!(finance.good, 3);
        assert_eq!(finance.keywords, vec!["a", "b"]);
        assert!(qualifying_categories(&map).contains(Category::Finance));
    }

    #[test]
    fn garbage_payload_is_rejected() {
        // Not base64, and the raw fallback is not JSON either.
        assert!(decode_breakdown("not a payload!!!").is_err());
    }

    #[test]
    fn empty_payload_is_an_empty_map() {
        let map = decode_breakdown("  ").unwrap();
        assert!(map.is_empty());
        assert!(qualifying_categories(&map).is_empty());
    }

    #[test]
    fn unknown_labels_are_carried_but_not_qualifying() {
        let map = decode_breakdown(r#"{"โบนัส":{"good":9}}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert!(qualifying_categories(&map).is_empty());
    }

    #[test]
    fn active_list_parses_labels() {
        let active = decode_active(r#"["การงาน","ความรัก"]"#).unwrap();
        assert!(active.contains(Category::Career));
        assert!(active.contains(Category::Love));
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn active_unknown_labels_are_skipped() {
        let active = decode_active(r#"["การงาน","โบนัส"]"#).unwrap();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn active_blank_means_everything() {
        assert_eq!(decode_active("").unwrap(), CategorySet::ALL);
    }

    #[test]
    fn active_empty_array_means_nothing() {
        assert_eq!(decode_active("[]").unwrap(), CategorySet::EMPTY);
    }

    #[test]
    fn active_garbage_is_rejected() {
        assert!(decode_active("การงาน").is_err());
    }
}
