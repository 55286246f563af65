//! Load, validate, convert, and save across formats.

use crate::common::{fixture, read_fixture};
use respec_core::loader::save_path;
use respec_core::{
    Format, Validator, ValidatorSettings, ViolationKind, inspect, load_path, to_string,
};

#[test]
fn test_convert_js_to_every_format_and_back() {
    let original = load_path(&fixture("element-capture.js")).unwrap().record;
    let dir = tempfile::TempDir::new().unwrap();

    for format in Format::ALL {
        let path = dir.path().join(format!("config.{}", format.extension()));
        save_path(&original, &path, format, Some("respecConfig")).unwrap();
        let reloaded = load_path(&path).unwrap();
        assert_eq!(reloaded.format, format);
        assert_eq!(reloaded.record, original, "format {format}");
    }
}

#[test]
fn test_serialization_is_idempotent() {
    let original = load_path(&fixture("element-capture.js")).unwrap().record;
    for format in Format::ALL {
        let once = to_string(&original, format, None).unwrap();
        let reloaded = respec_core::load_str(&once, format).unwrap().record;
        let twice = to_string(&reloaded, format, None).unwrap();
        assert_eq!(once, twice, "format {format}");
    }
}

#[test]
fn test_js_output_uses_generator_field_names() {
    let original = load_path(&fixture("element-capture.js")).unwrap().record;
    let js = to_string(&original, Format::Js, None).unwrap();
    for name in [
        "\"specStatus\"",
        "\"latestVersion\"",
        "\"repoURL\"",
        "\"subjectPrefix\"",
        "\"localBiblio\"",
        "\"w3cid\"",
    ] {
        assert!(js.contains(name), "missing {name}");
    }
    assert!(js.starts_with("var respecConfig = "));
}

#[test]
fn test_unmodeled_members_survive_conversion() {
    let source = "var respecConfig = { specStatus: 'ED', editors: [{name: 'A'}], shortName: 'element-capture', maxTocLevel: 2 };";
    let record = respec_core::load_str(source, Format::Js).unwrap().record;
    let toml = to_string(&record, Format::Toml, None).unwrap();
    let back = respec_core::load_str(&toml, Format::Toml).unwrap().record;
    assert_eq!(back.extra["shortName"], "element-capture");
    assert_eq!(back.extra["maxTocLevel"], 2);
}

#[test]
fn test_null_members_convert_to_every_format() {
    let source = "var respecConfig = { specStatus: 'ED', \
                  editors: [{ name: 'A', twitter: null }], shortName: null, \
                  github: { repoURL: 'https://github.com/w3c/x/', pullsURL: null }, \
                  localBiblio: { css2: { title: 'CSS 2', note: null } } };";
    let loaded = respec_core::load_str(source, Format::Js).unwrap().record;
    assert!(respec_core::validate(&loaded).is_valid());

    for format in Format::ALL {
        let text = to_string(&loaded, format, None).unwrap();
        let back = respec_core::load_str(&text, format).unwrap().record;
        assert_eq!(back, loaded, "format {format}");
    }
}

#[test]
fn test_null_array_items_flagged_before_toml() {
    let source = "{ specStatus: 'ED', editors: [{ name: 'A' }], otherLinks: [null] }";
    let inspection = inspect(source, Format::Js, &Validator::default()).unwrap();
    assert_eq!(inspection.report.len(), 1);
    assert_eq!(inspection.report.violations()[0].path, "otherLinks[0]");

    let record = inspection.loaded.unwrap().record;
    assert!(to_string(&record, Format::Toml, None).is_err());
}

#[test]
fn test_inspect_with_strict_settings() {
    let content = read_fixture("element-capture.js");
    let settings = ValidatorSettings {
        require_https: true,
        publishable_statuses: Some(vec!["CG-DRAFT".to_string()]),
        ..ValidatorSettings::default()
    };
    let inspection = inspect(&content, Format::Js, &Validator::new(settings)).unwrap();
    assert!(inspection.report.is_valid());

    let insecure = content.replace(
        "https://drafts.csswg.org/css2/",
        "http://drafts.csswg.org/css2/",
    );
    let settings = ValidatorSettings {
        require_https: true,
        ..ValidatorSettings::default()
    };
    let inspection = inspect(&insecure, Format::Js, &Validator::new(settings)).unwrap();
    assert_eq!(inspection.report.len(), 1);
    assert_eq!(
        inspection.report.violations()[0].path,
        "localBiblio.css2ed.href"
    );
    assert_eq!(
        inspection.report.violations()[0].kind,
        ViolationKind::InsecureUrl
    );
}
