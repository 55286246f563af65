//! Loading the configuration files shipped as fixtures.

use crate::common::{fixture, read_fixture};
use respec_core::{Error, Format, SpecStatus, load_path, load_str, validate};

#[test]
fn test_element_capture_config_loads_and_validates() {
    let loaded = load_path(&fixture("element-capture.js")).unwrap();
    assert_eq!(loaded.format, Format::Js);
    assert_eq!(loaded.binding.as_deref(), Some("respecConfig"));

    let record = &loaded.record;
    assert_eq!(record.group.as_deref(), Some("cg/sccg"));
    assert_eq!(record.spec_status, Some(SpecStatus::CommunityGroupDraft));
    assert_eq!(record.xref().len(), 9);
    assert_eq!(record.editors()[0].w3cid, Some(118124));

    let biblio = record.local_biblio.as_ref().unwrap();
    let css2ed = &biblio["css2ed"];
    assert_eq!(css2ed.title.as_deref(), Some("CSS 2 Editor's Draft"));
    assert_eq!(
        css2ed.editors.as_deref(),
        Some(&["Sam Sneddon".to_string(), "Tantek Çelik".to_string()][..])
    );

    let report = validate(record);
    assert!(report.is_valid(), "{report}");
}

#[test]
fn test_lean_variant_validates() {
    let loaded = load_path(&fixture("element-capture-lean.js")).unwrap();
    assert!(loaded.record.latest_version.is_none());
    assert!(loaded.record.local_biblio.is_none());
    assert!(validate(&loaded.record).is_valid());
}

#[test]
fn test_toml_fixture_matches_js_fields() {
    let js = load_path(&fixture("element-capture.js")).unwrap().record;
    let toml = load_path(&fixture("element-capture.toml")).unwrap().record;
    assert_eq!(toml.group, js.group);
    assert_eq!(toml.github, js.github);
    assert_eq!(toml.editors, js.editors);
    assert_eq!(toml.local_biblio, js.local_biblio);
    assert!(validate(&toml).is_valid());
}

#[test]
fn test_duplicate_biblio_key_rejected() {
    let err = load_path(&fixture("duplicate-biblio.js")).unwrap_err();
    assert!(err.is_duplicate_key());
    let Error::DuplicateKey { key, path, line, .. } = err else {
        unreachable!("expected duplicate key error");
    };
    assert_eq!(key, "css2ed");
    assert_eq!(path, "localBiblio");
    assert_eq!(line, 9);
}

#[test]
fn test_duplicate_biblio_key_rejected_in_toml() {
    let text = "[localBiblio.css2ed]\ntitle = \"a\"\n\n[localBiblio.css2ed]\ntitle = \"b\"\n";
    let err = load_str(text, Format::Toml).unwrap_err();
    assert!(err.is_duplicate_key(), "{err}");
}

#[test]
fn test_reserialized_fixture_sniffs_as_json() {
    let js = load_path(&fixture("element-capture.js")).unwrap().record;
    let json = respec_core::to_string(&js, Format::Json, None).unwrap();
    assert_eq!(Format::sniff(&json), Format::Json);
    assert_eq!(load_str(&json, Format::Json).unwrap().record, js);
}

#[test]
fn test_fixture_sniffs_as_js_without_extension() {
    let content = read_fixture("element-capture.js");
    assert_eq!(Format::sniff(&content), Format::Js);
}
