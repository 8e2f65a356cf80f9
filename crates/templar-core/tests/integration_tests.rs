//! Integration tests for templar-core's public API.

use std::path::{Path, PathBuf};

use templar_core::{
    application::ApplicationError,
    error::ErrorCategory,
    prelude::*,
};

#[test]
fn registry_file_round_trip() {
    let greet = TemplateName::parse("greet").unwrap();
    let main = TemplateName::parse("rust-main").unwrap();

    let mut registry = Registry::new();
    registry.insert(&main, Extension::of(Path::new("/src/main.rs")));
    registry.insert(&greet, Extension::of(Path::new("hello.txt")));

    let json = registry.to_json().unwrap();
    assert_eq!(
        String::from_utf8(json.clone()).unwrap(),
        "{\n    \"greet\": \".txt\",\n    \"rust-main\": \".rs\"\n}"
    );

    let reloaded = Registry::from_json(&json).unwrap();
    assert_eq!(reloaded, registry);
}

#[test]
fn hand_edited_registry_is_accepted() {
    let registry = Registry::from_json(br#"{"a":".md","b":""}"#).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get(&TemplateName::parse("b").unwrap()),
        Some(&Extension::none())
    );
}

#[test]
fn registry_with_non_string_value_is_rejected() {
    let err = Registry::from_json(br#"{"a": 1}"#).unwrap_err();
    let err: TemplarError = err.into();
    assert_eq!(err.category(), ErrorCategory::Internal);
}

#[test]
fn names_that_would_escape_the_store_are_rejected() {
    for raw in ["", "   ", ".", "..", "../x", "a/b", "a\\b", ".hidden"] {
        let err: TemplarError = TemplateName::parse(raw).unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Validation, "{raw:?}");
        assert!(!err.suggestions().is_empty());
    }
}

#[test]
fn name_is_usable_as_a_file_name() {
    let name = TemplateName::parse("  greet  ").unwrap();
    assert_eq!(
        PathBuf::from("/data/templates").join(&name),
        PathBuf::from("/data/templates/greet")
    );
}

#[test]
fn error_categories_drive_exit_behaviour() {
    let cases: [(TemplarError, ErrorCategory); 4] = [
        (
            ApplicationError::TemplateExists { name: "t".into() }.into(),
            ErrorCategory::Conflict,
        ),
        (
            ApplicationError::TemplateNotFound { name: "t".into() }.into(),
            ErrorCategory::NotFound,
        ),
        (ApplicationError::NoSource.into(), ErrorCategory::Validation),
        (ApplicationError::StoreLockError.into(), ErrorCategory::Internal),
    ];

    for (err, category) in cases {
        assert_eq!(err.category(), category, "{err}");
    }
}
