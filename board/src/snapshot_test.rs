use serde_json::json;

use super::*;
use crate::doc::ElementKind;

fn sample() -> serde_json::Value {
    json!([
        {"id": "element-0", "type": "label", "top": 10, "left": 20, "text": "Hi", "fontSize": 16, "fontWeight": "normal"},
        {"id": "element-2", "type": "input", "top": 0.5, "left": 3, "text": "", "fontSize": 12.5, "fontWeight": "bold"},
        {"id": "element-3", "type": "button", "top": -4, "left": 99, "text": "Go", "fontSize": 18, "fontWeight": "700"},
    ])
}

#[test]
fn decode_valid_array() {
    let elements = decode(&sample().to_string()).unwrap();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[1].kind, ElementKind::Input);
    assert_eq!(elements[2].text, "Go");
}

#[test]
fn decode_empty_array() {
    assert!(decode("[]").unwrap().is_empty());
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode("[{\"id\": ").unwrap_err();
    assert!(matches!(err, SnapshotError::Decode(_)));
    assert!(err.to_string().starts_with("invalid element snapshot"));
}

#[test]
fn decode_rejects_wrong_shape() {
    assert!(decode("{\"id\": \"element-0\"}").is_err());
    assert!(decode("[{\"id\": \"x\", \"type\": \"slider\", \"top\": 0, \"left\": 0}]").is_err());
    assert!(decode("\"just a string\"").is_err());
}

#[test]
fn export_of_import_is_identity() {
    let elements = decode(&sample().to_string()).unwrap();
    let exported = encode_pretty(&elements).unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(value, sample());
    assert_eq!(decode(&exported).unwrap(), elements);
}

#[test]
fn encode_is_compact_and_pretty_is_indented() {
    let elements = decode(&sample().to_string()).unwrap();
    let compact = encode(&elements).unwrap();
    let pretty = encode_pretty(&elements).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n  {\n    \"id\": \"element-0\","));
    assert_eq!(decode(&compact).unwrap(), decode(&pretty).unwrap());
}

#[test]
fn export_keeps_whole_numbers_as_integers() {
    let raw = r#"[{"id":"element-0","type":"label","top":10,"left":20,"text":"Hi","fontSize":16,"fontWeight":"normal"}]"#;
    let exported = encode(&decode(raw).unwrap()).unwrap();
    assert_eq!(exported, raw);

    let original: serde_json::Value = serde_json::from_str(raw).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&encode_pretty(&decode(raw).unwrap()).unwrap()).unwrap();
    assert_eq!(pretty, original);
}

#[test]
fn export_keeps_fractions_and_negatives() {
    let raw = r#"[{"id":"element-1","type":"input","top":-4,"left":12.25,"text":"","fontSize":0.5,"fontWeight":"bold"}]"#;
    assert_eq!(encode(&decode(raw).unwrap()).unwrap(), raw);
}

#[test]
fn decimal_whole_numbers_are_normalized_to_integers() {
    let elements = decode(r#"[{"id":"element-0","type":"button","top":10.0,"left":3.0}]"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encode(&elements).unwrap()).unwrap();
    assert_eq!(value[0]["top"], json!(10));
    assert_eq!(value[0]["left"], json!(3));
    assert_eq!(value[0]["fontSize"], json!(16));
}
