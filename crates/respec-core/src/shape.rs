//! Structural check of an untyped record.
//!
//! Typed deserialization stops at the first mismatch with an error message
//! aimed at programmers. Running this walk first lets the loader report
//! every misplaced type as a [`Violation`] with a record path instead.
//! Members this crate does not model are not inspected.

use serde_json::{Map, Value};

use crate::validate::{Violation, ViolationKind};

#[derive(Clone, Copy)]
enum Expect {
    Str,
    StrList,
    Uint,
}

const EDITOR_FIELDS: &[(&str, Expect)] = &[
    ("email", Expect::Str),
    ("company", Expect::Str),
    ("companyURL", Expect::Str),
    ("url", Expect::Str),
    ("w3cid", Expect::Uint),
];

const BIBLIO_FIELDS: &[(&str, Expect)] = &[
    ("title", Expect::Str),
    ("href", Expect::Str),
    ("editors", Expect::StrList),
    ("authors", Expect::StrList),
    ("publisher", Expect::Str),
    ("date", Expect::Str),
    ("status", Expect::Str),
    ("aliasOf", Expect::Str),
];

/// Returns every structural problem in `value`. Empty means the value can
/// be deserialized into a [`ConfigurationRecord`](crate::ConfigurationRecord).
pub fn check_shape(value: &Value) -> Vec<Violation> {
    let mut out = Vec::new();
    let Some(root) = value.as_object() else {
        out.push(wrong_type("$", "object", value));
        return out;
    };

    for key in ["group", "specStatus", "latestVersion", "subjectPrefix"] {
        check_field(&mut out, root, "", key, Expect::Str);
    }
    check_field(&mut out, root, "", "xref", Expect::StrList);

    match root.get("github") {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(Value::Object(github)) => {
            check_field(&mut out, github, "github", "repoURL", Expect::Str);
            check_field(&mut out, github, "github", "branch", Expect::Str);
        }
        Some(other) => out.push(wrong_type("github", "object or string", other)),
    }

    match root.get("editors") {
        None | Some(Value::Null) => {}
        Some(Value::Array(editors)) => {
            for (i, editor) in editors.iter().enumerate() {
                check_editor(&mut out, &format!("editors[{i}]"), editor);
            }
        }
        Some(other) => out.push(wrong_type("editors", "array", other)),
    }

    match root.get("localBiblio") {
        None | Some(Value::Null) => {}
        Some(Value::Object(biblio)) => {
            for (key, entry) in biblio {
                let path = format!("localBiblio.{key}");
                match entry.as_object() {
                    Some(fields) => {
                        for (field, expect) in BIBLIO_FIELDS {
                            check_field(&mut out, fields, &path, field, *expect);
                        }
                    }
                    None => out.push(wrong_type(&path, "object", entry)),
                }
            }
        }
        Some(other) => out.push(wrong_type("localBiblio", "object", other)),
    }

    out
}

fn check_editor(out: &mut Vec<Violation>, path: &str, editor: &Value) {
    let Some(fields) = editor.as_object() else {
        out.push(wrong_type(path, "object", editor));
        return;
    };
    match fields.get("name") {
        Some(Value::String(_)) => {}
        None | Some(Value::Null) => out.push(Violation::new(
            format!("{path}.name"),
            ViolationKind::MissingField,
            "editor has no name",
        )),
        Some(other) => out.push(wrong_type(&format!("{path}.name"), "string", other)),
    }
    for (field, expect) in EDITOR_FIELDS {
        check_field(out, fields, path, field, *expect);
    }
}

fn check_field(
    out: &mut Vec<Violation>,
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
    expect: Expect,
) {
    let path = if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    };
    let value = match object.get(key) {
        None | Some(Value::Null) => return,
        Some(v) => v,
    };
    match expect {
        Expect::Str if !value.is_string() => out.push(wrong_type(&path, "string", value)),
        Expect::Uint if !value.is_u64() => {
            out.push(wrong_type(&path, "non-negative integer", value))
        }
        Expect::StrList => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        out.push(wrong_type(&format!("{path}[{i}]"), "string", item));
                    }
                }
            }
            None => out.push(wrong_type(&path, "array of strings", value)),
        },
        _ => {}
    }
}

fn wrong_type(path: &str, expected: &'static str, found: &Value) -> Violation {
    Violation::new(
        path,
        ViolationKind::WrongType { expected },
        format!("expected {expected}, found {}", type_name(found)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_record() {
        let value = json!({
            "group": "cg/sccg",
            "specStatus": "CG-DRAFT",
            "github": {"repoURL": "https://github.com/x/y/", "branch": "main"},
            "editors": [{"name": "Elad Alon", "w3cid": 118124}],
            "xref": ["html"],
            "localBiblio": {"css2ed": {"title": "t", "editors": ["a", "b"]}},
            "anythingElse": [1, 2, 3]
        });
        assert!(check_shape(&value).is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        let out = check_shape(&json!([1]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "$");
    }

    #[test]
    fn test_editors_not_array() {
        let out = check_shape(&json!({"editors": {"name": "x"}}));
        assert_eq!(out[0].path, "editors");
        assert_eq!(out[0].kind, ViolationKind::WrongType { expected: "array" });
    }

    #[test]
    fn test_editor_missing_name() {
        let out = check_shape(&json!({"editors": [{"email": "a@b.c"}]}));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "editors[0].name");
        assert_eq!(out[0].kind, ViolationKind::MissingField);
    }

    #[test]
    fn test_w3cid_as_string() {
        let out = check_shape(&json!({"editors": [{"name": "a", "w3cid": "118124"}]}));
        assert_eq!(out[0].path, "editors[0].w3cid");
    }

    #[test]
    fn test_negative_w3cid() {
        let out = check_shape(&json!({"editors": [{"name": "a", "w3cid": -1}]}));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_xref_item_types() {
        let out = check_shape(&json!({"xref": ["html", 3, null]}));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["xref[1]", "xref[2]"]);
    }

    #[test]
    fn test_github_string_accepted() {
        assert!(check_shape(&json!({"github": "https://github.com/x/y"})).is_empty());
        assert_eq!(check_shape(&json!({"github": 5})).len(), 1);
    }

    #[test]
    fn test_biblio_entry_shape() {
        let out = check_shape(&json!({"localBiblio": {"a": "nope", "b": {"editors": "x"}}}));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["localBiblio.a", "localBiblio.b.editors"]);
    }

    #[test]
    fn test_nulls_treated_as_absent() {
        assert!(check_shape(&json!({"group": null, "editors": null})).is_empty());
    }
}
