//! Reference model.
//!
//! Typed descriptions of the graph entities a query starts from: single
//! identities, identity sets, index lookups and queries, wildcards, and raw
//! text that is passed through untouched. All values are immutable once
//! built; range checks on ids are left to the server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a reference addresses nodes or relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Node,
    Relationship,
}

impl EntityKind {
    /// Word used for this kind in start clauses (`node`, `relationship`)
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Relationship => "relationship",
        }
    }
}

/// Reference to a node by its server-assigned id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeReference(i64);

impl NodeReference {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Reference node advertised by the service root document
    pub fn root(id: i64) -> Self {
        Self(id)
    }

    pub fn id(self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeReference {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Reference to a relationship by its server-assigned id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipReference(i64);

impl RelationshipReference {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn id(self) -> i64 {
        self.0
    }
}

impl From<i64> for RelationshipReference {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A node fetched from the server together with its payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    pub reference: NodeReference,
    pub data: T,
}

impl<T> Node<T> {
    pub fn new(data: T, reference: impl Into<NodeReference>) -> Self {
        Self {
            reference: reference.into(),
            data,
        }
    }
}

/// An entity identity of either kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityReference {
    pub kind: EntityKind,
    pub id: i64,
}

impl IdentityReference {
    pub fn node(id: i64) -> Self {
        Self {
            kind: EntityKind::Node,
            id,
        }
    }

    pub fn relationship(id: i64) -> Self {
        Self {
            kind: EntityKind::Relationship,
            id,
        }
    }
}

impl From<NodeReference> for IdentityReference {
    fn from(r: NodeReference) -> Self {
        Self::node(r.id())
    }
}

impl From<RelationshipReference> for IdentityReference {
    fn from(r: RelationshipReference) -> Self {
        Self::relationship(r.id())
    }
}

/// Several identities of one kind bound under a single name.
///
/// An empty set is allowed and renders with an empty argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSet {
    pub kind: EntityKind,
    pub ids: Vec<i64>,
}

impl ReferenceSet {
    pub fn new(kind: EntityKind, ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            kind,
            ids: ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<NodeReference> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = NodeReference>>(iter: I) -> Self {
        Self::new(EntityKind::Node, iter.into_iter().map(NodeReference::id))
    }
}

impl FromIterator<RelationshipReference> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = RelationshipReference>>(iter: I) -> Self {
        Self::new(
            EntityKind::Relationship,
            iter.into_iter().map(RelationshipReference::id),
        )
    }
}

/// Wildcard over every entity of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum All {
    Nodes,
    Relationships,
}

impl All {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Nodes => EntityKind::Node,
            Self::Relationships => EntityKind::Relationship,
        }
    }
}

/// Exact-match lookup of `key = value` in a named index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexLookup {
    pub kind: EntityKind,
    pub index: String,
    pub key: String,
    pub value: Value,
}

impl IndexLookup {
    pub fn node(
        index: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::new(EntityKind::Node, index, key, value)
    }

    pub fn relationship(
        index: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::new(EntityKind::Relationship, index, key, value)
    }

    fn new(
        kind: EntityKind,
        index: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            kind,
            index: index.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Free-text query against a named index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub kind: EntityKind,
    pub index: String,
    pub query: String,
}

impl IndexQuery {
    pub fn node(index: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Node,
            index: index.into(),
            query: query.into(),
        }
    }

    pub fn relationship(index: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Relationship,
            index: index.into(),
            query: query.into(),
        }
    }
}

/// Any value that can be bound to a start clause name
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    Identity(IdentityReference),
    Set(ReferenceSet),
    IndexLookup(IndexLookup),
    IndexQuery(IndexQuery),
    Wildcard(EntityKind),
    /// Emitted verbatim, never parameterized
    Raw(String),
}

impl Reference {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Entity kind addressed, or `None` for raw text
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::Identity(r) => Some(r.kind),
            Self::Set(s) => Some(s.kind),
            Self::IndexLookup(l) => Some(l.kind),
            Self::IndexQuery(q) => Some(q.kind),
            Self::Wildcard(kind) => Some(*kind),
            Self::Raw(_) => None,
        }
    }
}

impl From<IdentityReference> for Reference {
    fn from(r: IdentityReference) -> Self {
        Self::Identity(r)
    }
}

impl From<NodeReference> for Reference {
    fn from(r: NodeReference) -> Self {
        Self::Identity(r.into())
    }
}

impl From<RelationshipReference> for Reference {
    fn from(r: RelationshipReference) -> Self {
        Self::Identity(r.into())
    }
}

impl<T> From<Node<T>> for Reference {
    fn from(node: Node<T>) -> Self {
        node.reference.into()
    }
}

impl<T> From<&Node<T>> for Reference {
    fn from(node: &Node<T>) -> Self {
        node.reference.into()
    }
}

impl From<ReferenceSet> for Reference {
    fn from(s: ReferenceSet) -> Self {
        Self::Set(s)
    }
}

impl From<Vec<NodeReference>> for Reference {
    fn from(refs: Vec<NodeReference>) -> Self {
        Self::Set(refs.into_iter().collect())
    }
}

impl From<Vec<RelationshipReference>> for Reference {
    fn from(refs: Vec<RelationshipReference>) -> Self {
        Self::Set(refs.into_iter().collect())
    }
}

impl<const N: usize> From<[NodeReference; N]> for Reference {
    fn from(refs: [NodeReference; N]) -> Self {
        Self::Set(refs.into_iter().collect())
    }
}

impl<const N: usize> From<[RelationshipReference; N]> for Reference {
    fn from(refs: [RelationshipReference; N]) -> Self {
        Self::Set(refs.into_iter().collect())
    }
}

impl From<IndexLookup> for Reference {
    fn from(l: IndexLookup) -> Self {
        Self::IndexLookup(l)
    }
}

impl From<IndexQuery> for Reference {
    fn from(q: IndexQuery) -> Self {
        Self::IndexQuery(q)
    }
}

impl From<All> for Reference {
    fn from(all: All) -> Self {
        Self::Wildcard(all.kind())
    }
}

impl From<&str> for Reference {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for Reference {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(EntityKind::Node.keyword(), "node");
        assert_eq!(EntityKind::Relationship.keyword(), "relationship");
    }

    #[test]
    fn test_node_payload_converts_to_its_identity() {
        let node = Node::new("payload", NodeReference::new(123));
        assert_eq!(
            Reference::from(&node),
            Reference::Identity(IdentityReference::node(123))
        );
    }

    #[test]
    fn test_reference_set_keeps_kind_and_order() {
        let set: ReferenceSet = [RelationshipReference::new(4), RelationshipReference::new(3)]
            .into_iter()
            .collect();
        assert_eq!(set.kind, EntityKind::Relationship);
        assert_eq!(set.ids, vec![4, 3]);
    }

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(
            Reference::from(All::Relationships).kind(),
            Some(EntityKind::Relationship)
        );
        assert_eq!(
            Reference::from(IndexQuery::node("idx", "name:A")).kind(),
            Some(EntityKind::Node)
        );
        assert_eq!(Reference::raw("foo").kind(), None);
    }

    #[test]
    fn test_references_compare_by_id() {
        assert_eq!(NodeReference::from(7), NodeReference::new(7));
        assert_eq!(NodeReference::root(0).id(), 0);
        assert_ne!(
            IdentityReference::from(NodeReference::new(1)),
            IdentityReference::from(RelationshipReference::new(1))
        );
    }
}
