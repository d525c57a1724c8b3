//! Calls through the public `Faker` surface.

use fakegen::{registry, Faker, FakeError, Kwargs, Member, NativeValue, TypeExpr};
use serde_json::json;

fn kw(value: serde_json::Value) -> Kwargs {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn registry_exposes_signatures() {
    let pyint = registry()
        .iter()
        .find(|entry| entry.name == "pyint")
        .expect("pyint registered");
    let Member::Provider(spec) = &pyint.member else {
        panic!("pyint should be callable");
    };
    let names: Vec<_> = spec.params.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["min_value", "max_value"]);
    assert_eq!(spec.params[0].annotation, Some(TypeExpr::Int));
}

#[test]
fn pyint_honours_bounds() {
    let value = Faker::new()
        .call("pyint", &kw(json!({ "min_value": 7, "max_value": 7 })))
        .unwrap();
    assert_eq!(value, NativeValue::Int(7));
}

#[test]
fn wrong_argument_type_is_reported() {
    let err = Faker::new()
        .call("words", &kw(json!({ "nb": "many" })))
        .unwrap_err();
    assert!(matches!(err, FakeError::InvalidArgument { ref param, .. } if param == "nb"));
}

#[test]
fn file_providers_write_under_root() {
    let dir = tempfile::tempdir().unwrap();
    let faker = Faker::with_file_root(dir.path());
    let value = faker
        .call("pdf_file", &kw(json!({ "basename": "report" })))
        .unwrap();
    let path = std::path::PathBuf::from(value.as_str().unwrap());
    assert_eq!(path, dir.path().join("report.pdf"));
    assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn binary_providers_return_bytes() {
    let value = Faker::new().call("zip", &Kwargs::new()).unwrap();
    assert_eq!(value.kind(), "bytes");
}
