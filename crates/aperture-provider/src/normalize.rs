//! Normalization from loose provider records to the strict asset shape.
//!
//! The provider returns duck-typed resource objects whose fields come and go
//! depending on API tier, upload path, and which endpoint served them. This
//! module is the single mapping point: every field access defaults instead of
//! assuming presence, and a record that cannot satisfy the strict shape is
//! dropped rather than failing the whole retrieval.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use aperture_core::models::WELL_KNOWN_ATTRIBUTES;
use aperture_core::{AssetRecord, Dimensions, RawAsset};

/// Map one raw provider record to an [`AssetRecord`].
///
/// Returns `None` when the record is missing its identifier, retrieval URL,
/// or a parseable creation time. Missing grouping and context blocks are
/// recoverable: the group path is derived from the identifier and the
/// well-known attributes map to null.
pub fn normalize(raw: RawAsset) -> Option<AssetRecord> {
    let id = raw.public_id.filter(|id| !id.is_empty())?;
    let url = raw.secure_url.filter(|url| !url.is_empty())?;
    let created_at = parse_created_at(raw.created_at.as_deref())?;

    let group_path = match raw.folder.filter(|f| !f.is_empty()) {
        Some(folder) => folder,
        None => derive_group_path(&id),
    };

    let dimensions = match (raw.width, raw.height) {
        (Some(width), Some(height)) => Some(Dimensions { width, height }),
        _ => None,
    };

    let mut attributes: BTreeMap<String, Option<String>> = WELL_KNOWN_ATTRIBUTES
        .iter()
        .map(|key| ((*key).to_string(), None))
        .collect();
    if let Some(custom) = raw.context.and_then(|c| c.custom) {
        for (key, value) in custom {
            let value = match value {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            };
            attributes.insert(key, value);
        }
    }

    Some(AssetRecord {
        id,
        url,
        dimensions,
        group_path,
        created_at,
        attributes,
    })
}

/// Derive the group path from an identifier by dropping its last path
/// segment. Identifiers without a separator belong to the root group.
fn derive_group_path(id: &str) -> String {
    match id.rsplit_once('/') {
        Some((prefix, _)) => prefix.to_string(),
        None => String::new(),
    }
}

fn parse_created_at(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            debug!(created_at = value, error = %e, "Dropping record with unparseable timestamp");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aperture_core::RawContext;

    fn well_formed() -> RawAsset {
        serde_json::from_value(serde_json::json!({
            "public_id": "landscape/dawn-ridge",
            "secure_url": "https://res.example.com/landscape/dawn-ridge.jpg",
            "width": 4000,
            "height": 2667,
            "folder": "landscape",
            "created_at": "2025-11-02T08:15:00Z",
            "context": {
                "custom": {
                    "title": "Dawn Ridge",
                    "location": "Cascades",
                    "camera_settings": "f/8 1/250 ISO 100"
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_normalize_well_formed() {
        let record = normalize(well_formed()).unwrap();
        assert_eq!(record.id, "landscape/dawn-ridge");
        assert_eq!(record.group_path, "landscape");
        assert_eq!(
            record.dimensions,
            Some(Dimensions {
                width: 4000,
                height: 2667
            })
        );
        assert_eq!(record.attributes["title"].as_deref(), Some("Dawn Ridge"));
        // Key present but null: never absent, never a panic.
        assert_eq!(record.attributes["category"], None);
    }

    #[test]
    fn test_normalize_derives_group_from_id() {
        let mut raw = well_formed();
        raw.folder = None;
        let record = normalize(raw).unwrap();
        assert_eq!(record.group_path, "landscape");
    }

    #[test]
    fn test_normalize_nested_group_derivation() {
        let mut raw = well_formed();
        raw.folder = None;
        raw.public_id = Some("portfolio/landscape/dawn".to_string());
        let record = normalize(raw).unwrap();
        assert_eq!(record.group_path, "portfolio/landscape");
    }

    #[test]
    fn test_normalize_root_asset_has_empty_group() {
        let mut raw = well_formed();
        raw.folder = None;
        raw.public_id = Some("dawn-ridge".to_string());
        let record = normalize(raw).unwrap();
        assert_eq!(record.group_path, "");
    }

    #[test]
    fn test_normalize_missing_context_yields_null_attributes() {
        let mut raw = well_formed();
        raw.context = None;
        let record = normalize(raw).unwrap();
        for key in WELL_KNOWN_ATTRIBUTES {
            assert_eq!(record.attributes[key], None, "{} should be null", key);
        }
    }

    #[test]
    fn test_normalize_empty_custom_block() {
        let mut raw = well_formed();
        raw.context = Some(RawContext { custom: None });
        let record = normalize(raw).unwrap();
        assert_eq!(record.attributes.len(), WELL_KNOWN_ATTRIBUTES.len());
    }

    #[test]
    fn test_normalize_keeps_extra_custom_keys() {
        let mut raw = well_formed();
        if let Some(custom) = raw.context.as_mut().and_then(|c| c.custom.as_mut()) {
            custom.insert("alt".to_string(), serde_json::json!("Ridge at dawn"));
        }
        let record = normalize(raw).unwrap();
        assert_eq!(record.attributes["alt"].as_deref(), Some("Ridge at dawn"));
    }

    #[test]
    fn test_normalize_stringifies_non_string_attribute() {
        let mut raw = well_formed();
        if let Some(custom) = raw.context.as_mut().and_then(|c| c.custom.as_mut()) {
            custom.insert("rating".to_string(), serde_json::json!(5));
        }
        let record = normalize(raw).unwrap();
        assert_eq!(record.attributes["rating"].as_deref(), Some("5"));
    }

    #[test]
    fn test_normalize_drops_record_without_id() {
        let mut raw = well_formed();
        raw.public_id = None;
        assert!(normalize(raw).is_none());
    }

    #[test]
    fn test_normalize_drops_record_with_empty_id() {
        let mut raw = well_formed();
        raw.public_id = Some(String::new());
        assert!(normalize(raw).is_none());
    }

    #[test]
    fn test_normalize_drops_record_without_url() {
        let mut raw = well_formed();
        raw.secure_url = None;
        assert!(normalize(raw).is_none());
    }

    #[test]
    fn test_normalize_drops_record_with_bad_timestamp() {
        let mut raw = well_formed();
        raw.created_at = Some("yesterday-ish".to_string());
        assert!(normalize(raw).is_none());
    }

    #[test]
    fn test_normalize_partial_dimensions_dropped() {
        let mut raw = well_formed();
        raw.height = None;
        let record = normalize(raw).unwrap();
        assert_eq!(record.dimensions, None);
    }

    #[test]
    fn test_normalize_offset_timestamp() {
        let mut raw = well_formed();
        raw.created_at = Some("2025-11-02T08:15:00+02:00".to_string());
        let record = normalize(raw).unwrap();
        assert_eq!(record.created_at.to_rfc3339(), "2025-11-02T06:15:00+00:00");
    }
}
