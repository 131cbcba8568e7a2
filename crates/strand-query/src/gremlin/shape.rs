//! Typed result-shape wrappers.
//!
//! The wrapper a chain ends in records what the server is expected to send
//! back. It does not change the text or the parameters.

use super::GremlinQuery;
use crate::params::ParameterBag;
use crate::query::{Query, ResultShape};
use std::fmt;
use std::marker::PhantomData;

/// Chain yielding nodes whose payload deserializes as `T`
pub struct NodeSequence<T> {
    chain: GremlinQuery,
    _node: PhantomData<fn() -> T>,
}

impl<T> NodeSequence<T> {
    pub(crate) fn new(chain: GremlinQuery) -> Self {
        Self {
            chain,
            _node: PhantomData,
        }
    }

    pub fn text(&self) -> &str {
        self.chain.text()
    }

    pub fn parameters(&self) -> &ParameterBag {
        self.chain.parameters()
    }

    pub fn shape(&self) -> ResultShape {
        ResultShape::Nodes
    }

    /// Copy of the query built so far
    pub fn to_query(&self) -> Query {
        self.chain.snapshot(ResultShape::Nodes)
    }

    pub fn into_query(self) -> Query {
        self.chain.finish(ResultShape::Nodes)
    }

    pub fn into_chain(self) -> GremlinQuery {
        self.chain
    }
}

impl<T> fmt::Debug for NodeSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeSequence")
            .field("node", &std::any::type_name::<T>())
            .field("chain", &self.chain)
            .finish()
    }
}

/// Chain yielding relationships, optionally carrying payload of type `T`
pub struct RelationshipSequence<T = ()> {
    chain: GremlinQuery,
    shape: ResultShape,
    _data: PhantomData<fn() -> T>,
}

impl RelationshipSequence<()> {
    pub(crate) fn new(chain: GremlinQuery) -> Self {
        Self {
            chain,
            shape: ResultShape::Relationships,
            _data: PhantomData,
        }
    }

    /// Expect relationship payload deserializing as `T`
    pub fn with_data<T>(self) -> RelationshipSequence<T> {
        RelationshipSequence {
            chain: self.chain,
            shape: ResultShape::RelationshipsWithData,
            _data: PhantomData,
        }
    }
}

impl<T> RelationshipSequence<T> {
    pub fn text(&self) -> &str {
        self.chain.text()
    }

    pub fn parameters(&self) -> &ParameterBag {
        self.chain.parameters()
    }

    pub fn shape(&self) -> ResultShape {
        self.shape
    }

    /// Copy of the query built so far
    pub fn to_query(&self) -> Query {
        self.chain.snapshot(self.shape)
    }

    pub fn into_query(self) -> Query {
        self.chain.finish(self.shape)
    }

    pub fn into_chain(self) -> GremlinQuery {
        self.chain
    }
}

impl<T> fmt::Debug for RelationshipSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipSequence")
            .field("shape", &self.shape)
            .field("chain", &self.chain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::NodeReference;

    struct Person;

    #[test]
    fn test_wrapper_does_not_touch_text() {
        let chain = GremlinQuery::start(NodeReference::new(1));
        let text = chain.text().to_string();
        let nodes = NodeSequence::<Person>::new(chain);
        assert_eq!(nodes.text(), text);
        assert_eq!(nodes.into_query().shape(), ResultShape::Nodes);
    }

    #[test]
    fn test_with_data_switches_shape() {
        let rels = RelationshipSequence::new(GremlinQuery::start(NodeReference::new(1)));
        assert_eq!(rels.shape(), ResultShape::Relationships);
        let typed = rels.with_data::<Person>();
        assert_eq!(typed.shape(), ResultShape::RelationshipsWithData);
        assert_eq!(typed.to_query().text(), "g.v(p0)");
    }
}
