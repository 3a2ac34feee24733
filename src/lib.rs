//! qbook - core record types for dog agility qualification tracking.
//!
//! This crate holds the data-model layer of an agility record book: the
//! qualification ("Q") status registry with its persisted token schemas,
//! the attribute tree records are loaded from and saved into, and the
//! small value types the persisted format depends on.
//!
//! # Modules
//!
//! - [`decimal`] - short decimal formatting for persisted scores
//! - [`element`] - in-memory attribute tree for persisted records
//! - [`error`] - error types and result aliases
//! - [`i18n`] - translation providers for display labels
//! - [`qstatus`] - Q-status registry: tokens, labels, tolerant parsing
//! - [`records`] - run records built on the registry
//! - [`version`] - persisted format versioning
//!
//! # Example
//!
//! ```
//! use qbook::qstatus::{Qualification, Registry};
//! use qbook::version::FormatVersion;
//!
//! let registry = Registry::english();
//! let version = FormatVersion::new(14, 6);
//!
//! // Tokens from record files parse to canonical statuses...
//! assert_eq!(registry.parse("Q", version), Ok(Qualification::Qualified));
//!
//! // ...and unrecognized ones degrade to Unknown instead of failing.
//! let q = registry.parse("XX", version).unwrap_or_default();
//! assert_eq!(q, Qualification::Unknown);
//! ```

pub mod decimal;
pub mod element;
pub mod error;
pub mod i18n;
pub mod qstatus;
pub mod records;
pub mod version;

pub use error::{QbookError, Result};
pub use qstatus::{Qualification, Registry, TokenSchema};
