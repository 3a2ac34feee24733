//! Localization support for display labels.
//!
//! Record types never hold display text; they hold label keys that are
//! resolved through a [`Translator`] at presentation time. The provider
//! is an explicit dependency injected wherever labels are produced, so
//! tests can substitute a fixed mapping:
//! - [`EnglishTranslator`] - built-in defaults for every known key
//! - [`Catalog`] - a key/value mapping loaded from a YAML file
//! - [`IdentityTranslator`] - echoes the key back, for tests

pub mod catalog;
pub mod translator;

pub use catalog::Catalog;
pub use translator::{EnglishTranslator, IdentityTranslator, Translator};
