//! Acceptance scenarios for record validation.

use respec_core::{
    BibliographicEntry, ConfigurationRecord, Editor, Format, SpecStatus, ViolationKind, load_str,
    to_string, validate,
};

fn css2ed() -> BibliographicEntry {
    BibliographicEntry::new(
        "CSS 2 Editor's Draft",
        "https://drafts.csswg.org/css2/",
        vec!["Sam Sneddon".to_string(), "Tantek Çelik".to_string()],
        "W3C",
    )
}

#[test]
fn test_scenario_a_minimal_cg_draft() {
    let record = ConfigurationRecord::new()
        .with_status(SpecStatus::from("CG-DRAFT"))
        .with_editor(Editor::new("Elad Alon"))
        .with_xref("html");
    let report = validate(&record);
    assert!(report.is_empty(), "{report}");
}

#[test]
fn test_scenario_b_empty_editors() {
    let mut record = ConfigurationRecord::new().with_status(SpecStatus::from("CG-DRAFT"));
    record.editors = Some(Vec::new());
    let report = validate(&record);
    assert_eq!(report.len(), 1);
    assert!(report.violations()[0].concerns("editors"));
}

#[test]
fn test_missing_editors_field() {
    let record = ConfigurationRecord::new().with_status(SpecStatus::from("CG-DRAFT"));
    let report = validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].path, "editors");
    assert_eq!(report.violations()[0].kind, ViolationKind::MissingField);
}

#[test]
fn test_scenario_c_empty_xref_token() {
    let record = load_str(r#"{"xref": [""]}"#, Format::Json).unwrap().record;
    let report = validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(report.concerning("xref").count(), 1);
}

#[test]
fn test_scenario_d_biblio_roundtrip() {
    let record = ConfigurationRecord::new().with_biblio("css2ed", css2ed());
    assert!(validate(&record).is_valid());

    for format in Format::ALL {
        let text = to_string(&record, format, None).unwrap();
        let back = load_str(&text, format).unwrap().record;
        assert_eq!(back.local_biblio.as_ref().unwrap()["css2ed"], css2ed());
    }
}

#[test]
fn test_violations_are_listed_not_fatal() {
    let mut record = ConfigurationRecord::new()
        .with_status(SpecStatus::from("CG-DRAFT"))
        .with_latest_version("not a url")
        .with_subject_prefix("");
    record.xref = Some(vec![String::new(), "Bad Token".to_string()]);
    let report = validate(&record);
    let kinds: Vec<_> = report.violations().iter().map(|v| v.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::MalformedUrl,
            ViolationKind::MissingField,
            ViolationKind::EmptyValue,
            ViolationKind::InvalidToken,
            ViolationKind::EmptyValue,
        ]
    );
}

#[test]
fn test_report_serializes_for_tooling() {
    let record = ConfigurationRecord::new().with_status(SpecStatus::from("CG-DRAFT"));
    let json = serde_json::to_value(validate(&record)).unwrap();
    assert_eq!(json[0]["path"], "editors");
    assert_eq!(json[0]["kind"]["type"], "missing_field");
}
