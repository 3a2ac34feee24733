//! Qualification ("Q") statuses and their persisted token registry.
//!
//! This module is the single source of truth for how a run's qualifying
//! result maps between three representations:
//! - the canonical [`Qualification`] enum,
//! - the short token stored in the record file (`"Q"`, `"NQ"`, ...),
//! - the localized label shown in selection lists.
//!
//! Parsing is tolerant: a token that matches no known schema degrades to
//! [`Qualification::Unknown`] instead of failing the record load. See
//! [`Registry::parse`] for the contract.

pub mod registry;
pub mod status;

pub use registry::{Registry, TokenSchema, UnrecognizedToken};
pub use status::Qualification;
