//! In-memory attribute tree for persisted records.
//!
//! Records are persisted as a tree of named elements carrying string
//! attributes. Turning that tree into XML text (and back) belongs to the
//! application's I/O layer; record types in this crate load from and save
//! into the [`ElementNode`] structure directly.
//!
//! Attributes are unique by name and unordered. Child elements are
//! ordered and the same name may repeat, hence the different access
//! methods.

use std::fmt::Display;
use std::str::FromStr;

use crate::decimal;

/// Result of a typed attribute lookup.
///
/// `Invalid` means the attribute exists but its value does not parse as
/// the requested type, which callers usually treat the same as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribLookup<T> {
    /// Attribute was not found.
    NotFound,
    /// Attribute's value is not valid for the requested type.
    Invalid,
    /// Attribute was found and parsed.
    Found(T),
}

impl<T> AttribLookup<T> {
    /// The parsed value, if the lookup succeeded.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Store the parsed value into `slot`, leaving it untouched on
    /// `NotFound` or `Invalid`.
    pub fn assign_to(self, slot: &mut T) {
        if let Self::Found(value) = self {
            *slot = value;
        }
    }
}

/// A node in the persisted record tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementNode {
    name: String,
    value: String,
    attribs: Vec<(String, String)>,
    children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the element.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Text content of the element.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text content.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Number of attributes on this element.
    pub fn attrib_count(&self) -> usize {
        self.attribs.len()
    }

    /// Raw string value of an attribute.
    pub fn attrib_str(&self, name: &str) -> Option<&str> {
        self.attribs
            .iter()
            .find(|(attrib, _)| attrib == name)
            .map(|(_, value)| value.as_str())
    }

    /// Typed attribute lookup via `FromStr`.
    pub fn attrib<T: FromStr>(&self, name: &str) -> AttribLookup<T> {
        match self.attrib_str(name) {
            None => AttribLookup::NotFound,
            Some(raw) => match raw.parse() {
                Ok(value) => AttribLookup::Found(value),
                Err(_) => AttribLookup::Invalid,
            },
        }
    }

    /// Add an attribute, overwriting any previous value for the name.
    pub fn add_attrib(&mut self, name: impl Into<String>, value: impl Display) {
        let name = name.into();
        let value = value.to_string();
        if let Some(entry) = self.attribs.iter_mut().find(|(attrib, _)| *attrib == name) {
            entry.1 = value;
        } else {
            self.attribs.push((name, value));
        }
    }

    /// Add a numeric attribute rendered with [`decimal::format`].
    pub fn add_attrib_double(&mut self, name: impl Into<String>, value: f64, prec: usize) {
        self.add_attrib(name, decimal::format(value, prec));
    }

    /// Remove an attribute. Returns whether it existed.
    pub fn remove_attrib(&mut self, name: &str) -> bool {
        let before = self.attribs.len();
        self.attribs.retain(|(attrib, _)| attrib != name);
        self.attribs.len() != before
    }

    /// Number of child elements.
    pub fn element_count(&self) -> usize {
        self.children.len()
    }

    /// Child element by position.
    pub fn element(&self, index: usize) -> Option<&ElementNode> {
        self.children.get(index)
    }

    /// First child element with the given name.
    pub fn find_element(&self, name: &str) -> Option<&ElementNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Append an empty child element and return a reference to it.
    pub fn add_element(&mut self, name: impl Into<String>) -> &mut ElementNode {
        self.children.push(ElementNode::new(name));
        // Just pushed, so the vector is non-empty.
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Ordered child elements.
    pub fn elements(&self) -> &[ElementNode] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::FormatVersion;

    #[test]
    fn new_element_is_empty() {
        let element = ElementNode::new("Run");
        assert_eq!(element.name(), "Run");
        assert_eq!(element.attrib_count(), 0);
        assert_eq!(element.element_count(), 0);
        assert_eq!(element.value(), "");
    }

    #[test]
    fn attrib_round_trips_strings() {
        let mut element = ElementNode::new("Run");
        element.add_attrib("Judge", "J. Smith");
        assert_eq!(element.attrib_str("Judge"), Some("J. Smith"));
    }

    #[test]
    fn add_attrib_overwrites_by_name() {
        let mut element = ElementNode::new("Run");
        element.add_attrib("Place", 1);
        element.add_attrib("Place", 2);
        assert_eq!(element.attrib_count(), 1);
        assert_eq!(element.attrib_str("Place"), Some("2"));
    }

    #[test]
    fn typed_lookup_distinguishes_missing_and_invalid() {
        let mut element = ElementNode::new("Run");
        element.add_attrib("Place", "first");

        assert_eq!(element.attrib::<i16>("Missing"), AttribLookup::NotFound);
        assert_eq!(element.attrib::<i16>("Place"), AttribLookup::Invalid);

        element.add_attrib("Place", 3);
        assert_eq!(element.attrib::<i16>("Place"), AttribLookup::Found(3));
    }

    #[test]
    fn typed_lookup_parses_versions() {
        let mut element = ElementNode::new("Book");
        element.add_attrib("Version", FormatVersion::new(14, 6));

        assert_eq!(
            element.attrib::<FormatVersion>("Version"),
            AttribLookup::Found(FormatVersion::new(14, 6))
        );
    }

    #[test]
    fn assign_to_leaves_slot_on_missing_attrib() {
        let element = ElementNode::new("Run");
        let mut place: i16 = -1;
        element.attrib::<i16>("Place").assign_to(&mut place);
        assert_eq!(place, -1);
    }

    #[test]
    fn assign_to_stores_found_value() {
        let mut element = ElementNode::new("Run");
        element.add_attrib("InClass", 12);

        let mut in_class: i16 = -1;
        element.attrib::<i16>("InClass").assign_to(&mut in_class);
        assert_eq!(in_class, 12);
    }

    #[test]
    fn double_attrib_uses_decimal_formatting() {
        let mut element = ElementNode::new("Scoring");
        element.add_attrib_double("Time", 31.5, 2);
        element.add_attrib_double("Yards", 150.0, 2);

        assert_eq!(element.attrib_str("Time"), Some("31.50"));
        assert_eq!(element.attrib_str("Yards"), Some("150"));
    }

    #[test]
    fn remove_attrib_reports_existence() {
        let mut element = ElementNode::new("Run");
        element.add_attrib("Height", "24");

        assert!(element.remove_attrib("Height"));
        assert!(!element.remove_attrib("Height"));
        assert_eq!(element.attrib_str("Height"), None);
    }

    #[test]
    fn children_are_ordered_and_names_may_repeat() {
        let mut run = ElementNode::new("Run");
        run.add_element("Partner").add_attrib("Dog", "Rex");
        run.add_element("Partner").add_attrib("Dog", "Fly");

        assert_eq!(run.element_count(), 2);
        assert_eq!(run.element(0).unwrap().attrib_str("Dog"), Some("Rex"));
        assert_eq!(run.element(1).unwrap().attrib_str("Dog"), Some("Fly"));
    }

    #[test]
    fn find_element_returns_first_match() {
        let mut run = ElementNode::new("Run");
        run.add_element("Notes").set_value("first");
        run.add_element("Notes").set_value("second");

        assert_eq!(run.find_element("Notes").unwrap().value(), "first");
        assert!(run.find_element("Placement").is_none());
    }
}
