//! Node entry of the network graph
//!
//! A node is an identifier plus an opaque property payload. Adjacency is
//! kept alongside so structural queries do not scan the edge set.

use super::property::{PropertyMap, PropertyValue};
use std::collections::BTreeSet;

/// A node in the network
#[derive(Debug, Clone)]
pub struct Node<N> {
    /// Caller-supplied identifier
    pub id: N,

    /// Properties associated with this node
    pub properties: PropertyMap,

    /// Successors (directed) or adjacent nodes (undirected), ascending
    pub(crate) outgoing: BTreeSet<N>,

    /// Predecessors; only maintained for directed graphs
    pub(crate) incoming: BTreeSet<N>,
}

impl<N: Ord> Node<N> {
    pub fn new(id: N) -> Self {
        Self::new_with_properties(id, PropertyMap::new())
    }

    pub fn new_with_properties(id: N, properties: PropertyMap) -> Self {
        Node {
            id,
            properties,
            outgoing: BTreeSet::new(),
            incoming: BTreeSet::new(),
        }
    }

    /// Set a property value, returning the previous one
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.remove(key)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Successors (directed) or adjacent nodes (undirected), ascending
    pub fn neighbors(&self) -> impl Iterator<Item = &N> {
        self.outgoing.iter()
    }
}

impl<N: PartialEq> PartialEq for Node<N> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<N: Eq> Eq for Node<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_properties() {
        let mut node = Node::new("Lisbon");

        node.set_property("population", 545_000i64);
        node.set_property("capital", true);
        assert_eq!(node.get_property("population").unwrap().as_integer(), Some(545_000));
        assert_eq!(node.get_property("capital").unwrap().as_boolean(), Some(true));
        assert_eq!(node.property_count(), 2);

        let old = node.set_property("population", 548_000i64);
        assert_eq!(old, Some(PropertyValue::Integer(545_000)));

        assert!(node.remove_property("capital").is_some());
        assert!(!node.has_property("capital"));
        assert_eq!(node.property_count(), 1);
    }

    #[test]
    fn test_node_equality_by_id() {
        let mut a = Node::new(7u64);
        a.set_property("k", "v");
        let b = Node::new(7u64);
        let c = Node::new(8u64);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
