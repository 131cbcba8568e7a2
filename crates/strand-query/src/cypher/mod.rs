//! Cypher start clauses.
//!
//! Turns named references into the comma-separated binding list of a
//! `START` clause, externalizing every literal through a
//! [`ParameterBinder`](crate::params::ParameterBinder).

mod record;
mod start;

#[doc(hidden)]
pub use record::__private;
pub use record::{StartRecord, START_BITS_PARAM};
pub use start::{format_start_bits, format_start_clause, CypherStart, StartBits, StartSource};
