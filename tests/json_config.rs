mod common;

use enumer::{EnumCollection, Error, SelectOption, Val};
use enumer::logger::capture_warnings;

#[test]
fn options_snapshot() {
    let status = common::status_enum();
    insta::assert_json_snapshot!(status.options(), @r#"
    [
      {
        "label": "成功",
        "value": 1,
        "key": "success"
      },
      {
        "label": "失败",
        "value": 2,
        "key": "failure"
      }
    ]
    "#);
}

#[test]
fn json_definition_accepts_every_entry_shape() {
    let collection = EnumCollection::from_json_str(
        r#"[
            [1, "success", "成功"],
            {"key": "pending", "val": 0},
            "static",
            [3.5, "ratio"],
            null
        ]"#,
    )
    .expect("valid definition");

    assert_eq!(collection.keys(), ["success", "pending", "static", "ratio", ""]);
    assert_eq!(collection.by_key("pending").expect("pending").desc(), "0");
    assert_eq!(*collection.by_key("static").expect("static").val(), "static");
    assert_eq!(collection.by_val(3.5).expect("ratio").key(), "ratio");
    assert_eq!(collection.by_key("").expect("empty entry").desc(), "");
}

#[test]
fn non_array_document_is_rejected_with_a_warning() {
    for document in ["{\"success\": 1}", "null", "\"status\"", "42"] {
        let (result, warnings) = capture_warnings(|| EnumCollection::from_json_str(document));
        assert!(
            matches!(result, Err(Error::NotASequence { .. })),
            "document {document} should not build a collection"
        );
        assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    }
}

#[test]
fn malformed_json_is_a_parse_error_without_warning() {
    let (result, warnings) = capture_warnings(|| EnumCollection::from_json_str("[1, "));
    assert!(matches!(result, Err(Error::Json(_))));
    assert!(warnings.is_empty());
}

#[test]
fn options_round_trip_through_json() {
    let options = common::status_enum().options();
    let text = serde_json::to_string(&options).expect("serialize options");
    let parsed: Vec<SelectOption> = serde_json::from_str(&text).expect("parse options");
    assert_eq!(parsed, options);
    assert_eq!(parsed[0].value, Val::Number(1.0));
}
