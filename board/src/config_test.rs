#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_stock_behavior() {
    let config = BoardConfig::default();
    assert_eq!(config.storage_key, "boardElements");
    assert_eq!(config.export_file_name, "board-elements.json");
    assert_eq!(config.default_font_size, 16.0);
    assert_eq!(config.default_font_weight, "normal");
    assert_eq!(config.confirm_key, "Enter");
    assert_eq!(config.delete_keys, vec!["Delete".to_owned()]);
}

#[test]
fn from_json_empty_object_is_default() {
    let config = BoardConfig::from_json("{}").unwrap();
    assert_eq!(config, BoardConfig::default());
}

#[test]
fn from_json_overrides_single_field() {
    let config = BoardConfig::from_json(r#"{"storage_key":"other","delete_keys":["Delete","Backspace"]}"#).unwrap();
    assert_eq!(config.storage_key, "other");
    assert_eq!(config.export_file_name, "board-elements.json");
    assert!(config.is_delete_key("Backspace"));
    assert!(config.is_delete_key("Delete"));
}

#[test]
fn from_json_rejects_wrong_types() {
    assert!(BoardConfig::from_json(r#"{"default_font_size":"big"}"#).is_err());
    assert!(BoardConfig::from_json("not json").is_err());
}

#[test]
fn with_storage_key_replaces_key_only() {
    let config = BoardConfig::default().with_storage_key("scratch");
    assert_eq!(config.storage_key, "scratch");
    assert_eq!(config.confirm_key, "Enter");
}

#[test]
fn key_predicates() {
    let config = BoardConfig::default();
    assert!(config.is_confirm_key("Enter"));
    assert!(!config.is_confirm_key("Space"));
    assert!(config.is_delete_key("Delete"));
    assert!(!config.is_delete_key("Backspace"));
}
