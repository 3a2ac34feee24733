//! Library integration tests.

use qbook::{QbookError, Qualification, Registry};

#[test]
fn error_types_are_public() {
    let err = QbookError::InvalidVersion {
        value: "bogus".into(),
    };
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> qbook::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn top_level_reexports_cover_the_core_types() {
    let registry = Registry::default();
    assert_eq!(registry.variant_at(0), Qualification::Unknown);
}

#[test]
fn version_parses_from_str() {
    use qbook::version::FormatVersion;

    let version: FormatVersion = "14.6".parse().unwrap();
    assert_eq!(version, FormatVersion::new(14, 6));
}
