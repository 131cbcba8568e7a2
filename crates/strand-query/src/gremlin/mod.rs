//! Gremlin step chains.
//!
//! A chain starts from a seed reference (`g.v(p0)`) and grows one
//! `.<step>(<args>)` at a time. Literal arguments go through the chain's own
//! [`ParameterBinder`], raw arguments (script variables, closures) are
//! written as-is.
//!
//! Chains are moved through every append, so a half-built chain is never
//! shared; what a caller finally observes is always the fully appended text.

mod shape;
mod steps;

pub use shape::{NodeSequence, RelationshipSequence};
pub use steps::GremlinSteps;

use crate::error::FormatResult;
use crate::params::{ParameterBag, ParameterBinder};
use crate::query::{Query, QueryLanguage, ResultShape};
use crate::reference::{All, NodeReference, RelationshipReference};
use serde_json::Value;
use strand_config::QueryConfig;
use tracing::debug;

/// One argument of a step
#[derive(Debug, Clone, PartialEq)]
pub enum StepArg {
    /// Bound as a parameter
    Literal(Value),
    /// Written verbatim
    Raw(String),
}

impl StepArg {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }
}

/// A step to append: name plus ordered arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    pub args: Vec<StepArg>,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: StepArg) -> Self {
        self.args.push(arg);
        self
    }
}

/// Where a chain starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GremlinSeed {
    Node(NodeReference),
    Relationship(RelationshipReference),
    All(All),
}

impl From<NodeReference> for GremlinSeed {
    fn from(r: NodeReference) -> Self {
        Self::Node(r)
    }
}

impl From<RelationshipReference> for GremlinSeed {
    fn from(r: RelationshipReference) -> Self {
        Self::Relationship(r)
    }
}

impl From<All> for GremlinSeed {
    fn from(all: All) -> Self {
        Self::All(all)
    }
}

/// Step chain under construction
#[derive(Debug)]
pub struct GremlinQuery {
    text: String,
    binder: ParameterBinder,
}

impl GremlinQuery {
    /// Seed a chain using the default configuration
    pub fn start(seed: impl Into<GremlinSeed>) -> Self {
        let config = QueryConfig::default();
        let binder =
            ParameterBinder::from_parts(config.gremlin_placeholder, &config.parameter_prefix);
        Self::seeded(seed.into(), binder)
    }

    /// Seed a chain with parameter naming taken from `config`, which must validate
    pub fn start_with(seed: impl Into<GremlinSeed>, config: &QueryConfig) -> FormatResult<Self> {
        let binder = ParameterBinder::for_gremlin(config)?;
        Ok(Self::seeded(seed.into(), binder))
    }

    fn seeded(seed: GremlinSeed, mut binder: ParameterBinder) -> Self {
        let text = match seed {
            GremlinSeed::Node(r) => format!("g.v({})", binder.placeholder(r.id())),
            GremlinSeed::Relationship(r) => format!("g.e({})", binder.placeholder(r.id())),
            GremlinSeed::All(All::Nodes) => "g.V".to_string(),
            GremlinSeed::All(All::Relationships) => "g.E".to_string(),
        };
        Self { text, binder }
    }

    /// Append `.<name>(<args>)`
    pub fn push_step(
        mut self,
        name: &str,
        args: impl IntoIterator<Item = StepArg>,
    ) -> Self {
        let rendered: Vec<String> = args
            .into_iter()
            .map(|arg| match arg {
                StepArg::Literal(value) => self.binder.placeholder(value),
                StepArg::Raw(text) => text,
            })
            .collect();
        self.text.push('.');
        self.text.push_str(name);
        self.text.push('(');
        self.text.push_str(&rendered.join(", "));
        self.text.push(')');
        debug!(
            step = name,
            params = self.binder.parameters().len(),
            "Appended gremlin step"
        );
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &ParameterBag {
        self.binder.parameters()
    }

    /// Finish the chain as an untyped projection
    pub fn into_query(self) -> Query {
        self.finish(ResultShape::Projection)
    }

    pub(crate) fn finish(self, shape: ResultShape) -> Query {
        Query::new(
            self.text,
            self.binder.into_parameters(),
            shape,
            QueryLanguage::Gremlin,
        )
    }

    pub(crate) fn snapshot(&self, shape: ResultShape) -> Query {
        Query::new(
            self.text.clone(),
            self.binder.parameters().clone(),
            shape,
            QueryLanguage::Gremlin,
        )
    }
}
