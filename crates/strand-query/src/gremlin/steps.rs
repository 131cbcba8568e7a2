//! Named traversal steps.

use super::{GremlinQuery, NodeSequence, RelationshipSequence, Step, StepArg};
use crate::reference::{All, NodeReference, RelationshipReference};

fn label_args(label: Option<&str>) -> Vec<StepArg> {
    label.map(StepArg::literal).into_iter().collect()
}

/// Step methods available on anything a chain can continue from.
///
/// Seeds (`NodeReference`, `RelationshipReference`, `All`) start a new chain
/// with the default configuration; wrappers continue their own chain.
pub trait GremlinSteps: Sized {
    /// The chain to append to
    fn into_chain(self) -> GremlinQuery;

    /// Append an arbitrary step
    fn step(self, name: &str, args: impl IntoIterator<Item = StepArg>) -> GremlinQuery {
        self.into_chain().push_step(name, args)
    }

    /// Append several steps in order
    fn steps(self, steps: impl IntoIterator<Item = Step>) -> GremlinQuery {
        steps
            .into_iter()
            .fold(self.into_chain(), |chain, step| {
                chain.push_step(&step.name, step.args)
            })
    }

    /// `.out(label)`: adjacent vertices over outgoing edges
    fn out_v<T>(self, label: Option<&str>) -> NodeSequence<T> {
        NodeSequence::new(self.step("out", label_args(label)))
    }

    /// `.in(label)`: adjacent vertices over incoming edges
    fn in_v<T>(self, label: Option<&str>) -> NodeSequence<T> {
        NodeSequence::new(self.step("in", label_args(label)))
    }

    /// `.both(label)`: adjacent vertices in either direction
    fn both_v<T>(self, label: Option<&str>) -> NodeSequence<T> {
        NodeSequence::new(self.step("both", label_args(label)))
    }

    /// `.outE(label)`
    fn out_e(self, label: Option<&str>) -> RelationshipSequence {
        RelationshipSequence::new(self.step("outE", label_args(label)))
    }

    /// `.inE(label)`
    fn in_e(self, label: Option<&str>) -> RelationshipSequence {
        RelationshipSequence::new(self.step("inE", label_args(label)))
    }

    /// `.bothE(label)`
    fn both_e(self, label: Option<&str>) -> RelationshipSequence {
        RelationshipSequence::new(self.step("bothE", label_args(label)))
    }

    /// `.except(var)` over vertices; `var` names a script collection
    fn except_v<T>(self, var: &str) -> NodeSequence<T> {
        NodeSequence::new(self.step("except", [StepArg::raw(var)]))
    }

    /// `.except(var)` over edges
    fn except_e(self, var: &str) -> RelationshipSequence {
        RelationshipSequence::new(self.step("except", [StepArg::raw(var)]))
    }

    /// `.except(var)` over edges carrying payload `T`
    fn except_e_typed<T>(self, var: &str) -> RelationshipSequence<T> {
        self.except_e(var).with_data()
    }

    /// `.retain(var)` over vertices
    fn retain_v<T>(self, var: &str) -> NodeSequence<T> {
        NodeSequence::new(self.step("retain", [StepArg::raw(var)]))
    }

    /// `.retain(var)` over edges
    fn retain_e(self, var: &str) -> RelationshipSequence {
        RelationshipSequence::new(self.step("retain", [StepArg::raw(var)]))
    }

    /// `.aggregate(var)`: collect the current vertices into `var`
    fn aggregate_v<T>(self, var: &str) -> NodeSequence<T> {
        NodeSequence::new(self.step("aggregate", [StepArg::raw(var)]))
    }

    /// `.as(label)`: name the current position for a later `back`
    fn as_step(self, label: &str) -> GremlinQuery {
        self.step("as", [StepArg::literal(label)])
    }

    /// `.back(label)`: return to a position named with `as`
    fn back_v<T>(self, label: &str) -> NodeSequence<T> {
        NodeSequence::new(self.step("back", [StepArg::literal(label)]))
    }
}

impl GremlinSteps for GremlinQuery {
    fn into_chain(self) -> GremlinQuery {
        self
    }
}

impl<T> GremlinSteps for NodeSequence<T> {
    fn into_chain(self) -> GremlinQuery {
        NodeSequence::into_chain(self)
    }
}

impl<T> GremlinSteps for RelationshipSequence<T> {
    fn into_chain(self) -> GremlinQuery {
        RelationshipSequence::into_chain(self)
    }
}

impl GremlinSteps for NodeReference {
    fn into_chain(self) -> GremlinQuery {
        GremlinQuery::start(self)
    }
}

impl GremlinSteps for RelationshipReference {
    fn into_chain(self) -> GremlinQuery {
        GremlinQuery::start(self)
    }
}

impl GremlinSteps for All {
    fn into_chain(self) -> GremlinQuery {
        GremlinQuery::start(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResultShape;
    use serde_json::json;

    struct Person;

    #[test]
    fn test_vertex_steps_bind_label() {
        let people = NodeReference::new(1).out_v::<Person>(Some("KNOWS"));
        assert_eq!(people.text(), "g.v(p0).out(p1)");
        assert_eq!(people.parameters().get("p1"), Some(&json!("KNOWS")));
    }

    #[test]
    fn test_unlabelled_steps_have_no_arguments() {
        let rels = NodeReference::new(1).in_v::<Person>(None).both_e(None);
        assert_eq!(rels.text(), "g.v(p0).in().bothE()");
        assert_eq!(rels.parameters().len(), 1);
    }

    #[test]
    fn test_edge_steps_shape() {
        let rels = All::Nodes.out_e(Some("LIKES"));
        assert_eq!(rels.text(), "g.V.outE(p0)");
        assert_eq!(rels.shape(), ResultShape::Relationships);

        let back = rels.in_e(None).in_v::<Person>(None);
        assert_eq!(back.text(), "g.V.outE(p0).inE().in()");
    }

    #[test]
    fn test_as_and_back() {
        let query = NodeReference::new(3)
            .as_step("start")
            .out_v::<Person>(None)
            .back_v::<Person>("start")
            .into_query();
        assert_eq!(query.text(), "g.v(p0).as(p1).out().back(p2)");
        assert_eq!(query.parameters().get("p2"), Some(&json!("start")));
        assert_eq!(query.shape(), ResultShape::Nodes);
    }

    #[test]
    fn test_aggregate_then_except() {
        let query = NodeReference::new(1)
            .aggregate_v::<Person>("seen")
            .out_v::<Person>(None)
            .except_v::<Person>("seen")
            .into_query();
        assert_eq!(query.text(), "g.v(p0).aggregate(seen).out().except(seen)");
        assert_eq!(query.parameters().len(), 1);
    }

    #[test]
    fn test_retain_edges() {
        let rels = RelationshipReference::new(8).retain_e("keep");
        assert_eq!(rels.text(), "g.e(p0).retain(keep)");
        let nodes = NodeReference::new(8).retain_v::<Person>("keep");
        assert_eq!(nodes.shape(), ResultShape::Nodes);
    }
}
