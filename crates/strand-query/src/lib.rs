//! # Strand Query
//!
//! Typed construction of graph query text with bound parameters.
//!
//! - [`cypher`]: `START` clauses from named references (`n1=node({p0})`)
//! - [`gremlin`]: step chains from a seed reference (`g.v(p0).out(p1)`)
//!
//! Every literal is externalized through a [`ParameterBinder`], so the output
//! is always text plus an ordered [`ParameterBag`]. Nothing here performs
//! I/O; running a [`Query`] is the job of a [`QueryExecutor`].
//!
//! ```rust
//! use strand_query::{start_record, CypherStart, All, NodeReference};
//!
//! let query = CypherStart::build(start_record! {
//!     n1 = "custom",
//!     n2 = NodeReference::new(2),
//!     all = All::Nodes,
//! })
//! .unwrap();
//!
//! assert_eq!(query.text(), "START n1=custom, n2=node({p0}), all=node(*)");
//! assert_eq!(query.parameters().len(), 1);
//! ```

pub mod cypher;
pub mod error;
pub mod exec;
pub mod gremlin;
pub mod params;
pub mod query;
pub mod reference;

pub use cypher::{format_start_bits, format_start_clause, CypherStart, StartBits, StartRecord};
pub use error::{FormatError, FormatResult};
pub use exec::QueryExecutor;
pub use gremlin::{
    GremlinQuery, GremlinSeed, GremlinSteps, NodeSequence, RelationshipSequence, Step, StepArg,
};
pub use params::{ParameterBag, ParameterBinder};
pub use query::{Query, QueryLanguage, ResultShape};
pub use reference::{
    All, EntityKind, IdentityReference, IndexLookup, IndexQuery, Node, NodeReference, Reference,
    ReferenceSet, RelationshipReference,
};
pub use strand_config::{PlaceholderStyle, QueryConfig};
