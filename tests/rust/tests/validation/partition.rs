//! Malformed entries are dropped; well-formed ones survive untouched

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use kernelspecs_core::{validate_spec_model, validate_spec_models};
use tests::fixtures::{
    argv_as_string, document, missing_resources, missing_spec, python_with_extras, well_formed,
};
use tests::init_test_tracing;

#[test]
fn test_exactly_the_well_formed_entries_survive() {
    init_test_tracing();

    let good = ["ir", "julia", "python"];
    let raw = document(
        Some("python"),
        vec![
            ("bash", argv_as_string("bash")),
            ("ir", well_formed("ir")),
            ("julia", well_formed("julia")),
            ("octave", missing_resources("octave")),
            ("python", well_formed("python")),
            ("scala", missing_spec("scala")),
            ("junk", json!(42)),
        ],
    );

    let specs = validate_spec_models(&raw).unwrap();

    assert_eq!(specs.len(), good.len());
    assert_eq!(specs.names().collect::<Vec<_>>(), good.to_vec());
    for name in ["bash", "octave", "scala", "junk"] {
        assert!(!specs.contains(name), "{} should have been dropped", name);
    }
}

#[test]
fn test_surviving_entry_is_normalized() {
    let raw = document(None, vec![("ir", well_formed("ir"))]);

    let specs = validate_spec_models(&raw).unwrap();
    let ir = specs.get("ir").unwrap();

    assert_eq!(ir.language, "ir");
    assert_eq!(ir.display_name, "ir kernel");
    assert_eq!(ir.argv, vec!["ir", "--connection-file", "{connection_file}"]);
    assert_eq!(ir.resource("logo-64x64"), Some("/kernelspecs/ir/logo-64x64.png"));
    assert_eq!(ir.env, None);
    assert_eq!(ir.metadata, None);
}

#[test]
fn test_env_and_metadata_pass_through() {
    let entry = python_with_extras();
    let raw = document(Some("python3"), vec![("python3", entry.clone())]);

    let specs = validate_spec_models(&raw).unwrap();
    let python = specs.get("python3").unwrap();

    assert_eq!(
        python.env.clone().map(Value::Object),
        Some(entry["spec"]["env"].clone())
    );
    assert_eq!(python.metadata, Some(entry["spec"]["metadata"].clone()));
}

#[test]
fn test_serialized_entry_matches_input() {
    let entry = python_with_extras();
    let spec = validate_spec_model(&entry).unwrap();

    assert_eq!(serde_json::to_value(&spec).unwrap(), entry);
}

#[test]
fn test_empty_resources_accepted_absent_rejected() {
    let mut empty = well_formed("python");
    empty["resources"] = json!({});

    assert!(validate_spec_model(&empty).is_some());
    assert!(validate_spec_model(&missing_resources("python")).is_none());
}

#[test]
fn test_env_values_not_deep_checked() {
    let mut entry = well_formed("python");
    entry["spec"]["env"] = json!({"THREADS": 4});

    let spec = validate_spec_model(&entry).unwrap();
    assert_eq!(spec.env.unwrap()["THREADS"], json!(4));
}
