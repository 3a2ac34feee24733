//! The placement record of a single run.

use crate::element::ElementNode;
use crate::qstatus::{Qualification, Registry};
use crate::version::FormatVersion;

use super::ErrorCallback;

/// Element name of a persisted placement.
pub const TREE_PLACEMENT: &str = "Placement";

const ATTRIB_Q: &str = "Q";
const ATTRIB_PLACE: &str = "Place";
const ATTRIB_INCLASS: &str = "InClass";
const ATTRIB_DOGSQD: &str = "DogsQd";

/// Placement result of a run: the Q status plus class standing.
///
/// `place` of 0 means unplaced; `in_class` and `dogs_qd` of -1 mean the
/// count was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Qualifying status.
    pub q: Qualification,
    /// Placement within the class.
    pub place: i16,
    /// Number of dogs in the class.
    pub in_class: i16,
    /// Number of dogs that qualified in the class.
    pub dogs_qd: i16,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            q: Qualification::Unknown,
            place: 0,
            in_class: -1,
            dogs_qd: -1,
        }
    }
}

impl Placement {
    /// Load from a `Placement` element.
    ///
    /// This never fails: an absent or empty Q attribute means the run
    /// has no recorded result, and an unrecognized token degrades to
    /// `Unknown` with a message on `callback`. Missing numeric
    /// attributes leave the current field values untouched.
    pub fn load(
        &mut self,
        registry: &Registry,
        element: &ElementNode,
        version: FormatVersion,
        callback: &mut dyn ErrorCallback,
    ) {
        match element.attrib_str(ATTRIB_Q) {
            None | Some("") => {}
            Some(token) => {
                self.q = registry.parse(token, version).unwrap_or_else(|err| {
                    callback.log_message(&err.to_string());
                    Qualification::Unknown
                });
            }
        }
        element.attrib(ATTRIB_PLACE).assign_to(&mut self.place);
        element.attrib(ATTRIB_INCLASS).assign_to(&mut self.in_class);
        element.attrib(ATTRIB_DOGSQD).assign_to(&mut self.dogs_qd);
    }

    /// Save as a `Placement` child of `parent`.
    ///
    /// Nothing is written when there is no place and no Q status. The Q
    /// attribute is omitted (never written empty) when the status has no
    /// token under the registry's write schema, so absence keeps meaning
    /// `Unknown` on the next load.
    ///
    /// Returns whether an element was written.
    pub fn save(&self, registry: &Registry, parent: &mut ElementNode) -> bool {
        if self.place <= 0 && self.q.is_unknown() {
            return false;
        }
        let element = parent.add_element(TREE_PLACEMENT);
        if let Some(token) = registry.token(self.q) {
            element.add_attrib(ATTRIB_Q, token);
        }
        element.add_attrib(ATTRIB_PLACE, self.place);
        if self.in_class >= 0 {
            element.add_attrib(ATTRIB_INCLASS, self.in_class);
        }
        if self.dogs_qd >= 0 {
            element.add_attrib(ATTRIB_DOGSQD, self.dogs_qd);
        }
        true
    }
}
