//! The dungeon map: a strictly nested tree of locations.
//!
//! On disk a location is a JSON object with exactly one key -- the location
//! identifier -- mapped to an array of contents. Each content element is
//! either a string (a monster identifier) or another single-key object (a
//! child location, hatch exits included):
//!
//! ```text
//! {"Location_0_tm0": ["Mob_exp10_tm0", {"Location_1_tm10400": []}]}
//! ```
//!
//! Identifiers are opaque here. Parsing of the time cost, experience reward
//! and hatch marker embedded in them lives in `hatchway-core`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raised when a decoded object does not have the single-key location shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationShapeError {
    /// The object has zero keys or more than one key.
    #[error("a location must be an object with exactly one key, found {keys}")]
    KeyCount {
        /// Number of keys found on the object.
        keys: usize,
    },
}

/// One place in the dungeon and everything found there.
///
/// The content order is the canonical presentation order for the actions
/// offered at this location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<Content>>",
    into = "BTreeMap<String, Vec<Content>>"
)]
pub struct LocationNode {
    /// Location identifier (may embed a time cost and the hatch marker).
    name: String,
    /// Monsters and neighbouring locations, in map order.
    contents: Vec<Content>,
}

/// A single element of a location's content list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// A monster identifier. Repeated identifiers are independent instances.
    Monster(String),
    /// A reachable neighbouring location.
    Child(LocationNode),
}

impl LocationNode {
    /// Create a location from its identifier and ordered contents.
    pub fn new(name: impl Into<String>, contents: Vec<Content>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    /// Return the location identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the ordered content list.
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Iterate over the monster identifiers present, duplicates included.
    pub fn monsters(&self) -> impl Iterator<Item = &str> {
        self.contents.iter().filter_map(|content| match content {
            Content::Monster(id) => Some(id.as_str()),
            Content::Child(_) => None,
        })
    }

    /// Iterate over the child locations reachable from here.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.contents.iter().filter_map(|content| match content {
            Content::Child(node) => Some(node),
            Content::Monster(_) => None,
        })
    }
}

impl Content {
    /// Shorthand for a monster entry.
    pub fn monster(id: impl Into<String>) -> Self {
        Self::Monster(id.into())
    }

    /// Shorthand for a child location entry.
    pub const fn child(node: LocationNode) -> Self {
        Self::Child(node)
    }
}

impl TryFrom<BTreeMap<String, Vec<Content>>> for LocationNode {
    type Error = LocationShapeError;

    fn try_from(map: BTreeMap<String, Vec<Content>>) -> Result<Self, Self::Error> {
        let keys = map.len();
        let mut entries = map.into_iter();
        match (entries.next(), entries.next()) {
            (Some((name, contents)), None) => Ok(Self { name, contents }),
            _ => Err(LocationShapeError::KeyCount { keys }),
        }
    }
}

impl From<LocationNode> for BTreeMap<String, Vec<Content>> {
    fn from(node: LocationNode) -> Self {
        Self::from([(node.name, node.contents)])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_document_in_order() {
        let json = r#"{"Location_0_tm0": [
            "Mob_exp10_tm0",
            {"Location_1_tm1040": ["Mob_exp30_tm50"]},
            "Mob_exp10_tm0",
            {"Hatch_tm159.098765432": []}
        ]}"#;

        let root: LocationNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.name(), "Location_0_tm0");
        assert_eq!(root.contents().len(), 4);
        assert_eq!(
            root.monsters().collect::<Vec<_>>(),
            vec!["Mob_exp10_tm0", "Mob_exp10_tm0"]
        );

        let children: Vec<&str> = root.children().map(LocationNode::name).collect();
        assert_eq!(children, vec!["Location_1_tm1040", "Hatch_tm159.098765432"]);
    }

    #[test]
    fn rejects_object_with_two_keys() {
        let json = r#"{"a_tm1": [], "b_tm2": []}"#;
        let result = serde_json::from_str::<LocationNode>(json);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_object() {
        let result = serde_json::from_str::<LocationNode>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn shape_error_reports_key_count() {
        let map = BTreeMap::from([
            ("a".to_owned(), Vec::new()),
            ("b".to_owned(), Vec::new()),
            ("c".to_owned(), Vec::new()),
        ]);
        let err = LocationNode::try_from(map).unwrap_err();
        assert_eq!(err, LocationShapeError::KeyCount { keys: 3 });
    }

    #[test]
    fn serializes_back_to_single_key_object() {
        let node = LocationNode::new(
            "tm10_entrance",
            vec![
                Content::monster("exp50_rat"),
                Content::child(LocationNode::new("tm0_hatch_exit", vec![])),
            ],
        );
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"tm10_entrance": ["exp50_rat", {"tm0_hatch_exit": []}]})
        );
    }
}
