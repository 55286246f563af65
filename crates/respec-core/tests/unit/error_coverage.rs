//! Error paths of the loader.

use respec_core::{Error, Format, load_str};

#[test]
fn test_syntax_error_has_position() {
    let err =
        load_str("var respecConfig = {\n  group: 'x'\n  xref: []\n};", Format::Js).unwrap_err();
    match err {
        Error::Parse { line, column, .. } => assert_eq!((line, column), (3, 3)),
        other => unreachable!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_json_duplicate_rejected_unlike_serde_json() {
    let text = r#"{"group": "a", "group": "b"}"#;
    assert!(serde_json::from_str::<serde_json::Value>(text).is_ok());
    let err = load_str(text, Format::Json).unwrap_err();
    assert!(err.is_duplicate_key());
}

#[test]
fn test_shape_error_lists_every_problem() {
    let err = load_str(
        "{ group: 1, editors: [{ w3cid: 'x' }], xref: 'html' }",
        Format::Js,
    )
    .unwrap_err();
    let Error::Shape { violations } = &err else {
        unreachable!("expected shape error");
    };
    let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["group", "xref", "editors[0].name", "editors[0].w3cid"]
    );
    assert!(err.to_string().starts_with("Record has 4 structural problem(s)"));
}

#[test]
fn test_root_must_be_object() {
    let err = load_str("[1, 2]", Format::Json).unwrap_err();
    assert!(matches!(err, Error::Shape { .. }));
}

#[test]
fn test_toml_syntax_error() {
    let err = load_str("group = ", Format::Toml).unwrap_err();
    assert!(matches!(err, Error::TomlParse(_)));
}

#[test]
fn test_unknown_format_name() {
    let err = "yaml".parse::<Format>().unwrap_err();
    assert_eq!(err.to_string(), "Cannot determine record format for 'yaml'");
}
