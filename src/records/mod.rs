//! Run records that consume the qualification registry.
//!
//! - [`Placement`] - a run's Q status and class standing, with the
//!   tolerant load / omit-on-save contract for the Q attribute
//! - [`ErrorCallback`] - how loaders report recoverable problems
//!
//! Loading is deliberately forgiving: files written under older or newer
//! token schemas still load, with anything unrecognized degrading to
//! `Unknown` and a note through the callback.

pub mod callback;
pub mod placement;

pub use callback::{CollectingCallback, ErrorCallback};
pub use placement::{Placement, TREE_PLACEMENT};
