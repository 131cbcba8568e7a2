//! Start clause formatting.

use crate::error::FormatResult;
use crate::params::{ParameterBag, ParameterBinder};
use crate::query::{Query, QueryLanguage, ResultShape};
use crate::reference::Reference;
use indexmap::IndexMap;
use strand_config::QueryConfig;
use tracing::debug;

use super::record::StartRecord;

const CLAUSE_SEPARATOR: &str = ", ";

/// Explicit ordered mapping from binding name to reference.
///
/// Unlike a [`StartRecord`], an empty `StartBits` is valid and formats to
/// empty text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartBits(IndexMap<String, Reference>);

impl StartBits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style
    pub fn with(mut self, name: impl Into<String>, reference: impl Into<Reference>) -> Self {
        self.insert(name, reference);
        self
    }

    /// Add a binding. Re-using a name replaces the value but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, reference: impl Into<Reference>) {
        self.0.insert(name.into(), reference.into());
    }

    pub fn get(&self, name: &str) -> Option<&Reference> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reference)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, R> FromIterator<(K, R)> for StartBits
where
    K: Into<String>,
    R: Into<Reference>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut bits = Self::new();
        for (name, reference) in iter {
            bits.insert(name, reference);
        }
        bits
    }
}

/// The two accepted input shapes for start bits
#[derive(Debug)]
pub enum StartSource {
    /// Explicit mapping; may be empty
    Bits(StartBits),
    /// Structural record; must have at least one field
    Record(StartRecord),
}

impl From<StartBits> for StartSource {
    fn from(bits: StartBits) -> Self {
        Self::Bits(bits)
    }
}

impl From<StartRecord> for StartSource {
    fn from(record: StartRecord) -> Self {
        Self::Record(record)
    }
}

impl StartSource {
    fn into_bits(self) -> FormatResult<StartBits> {
        match self {
            Self::Bits(bits) => Ok(bits),
            Self::Record(record) => record.resolve(),
        }
    }
}

/// Format start bits as clause text, binding literals into `binder`.
///
/// Record fields are resolved before anything is bound, so a failed call
/// leaves `binder` untouched.
pub fn format_start_bits(
    source: impl Into<StartSource>,
    binder: &mut ParameterBinder,
) -> FormatResult<String> {
    let bits = source.into().into_bits()?;
    let clauses: Vec<String> = bits
        .iter()
        .map(|(name, reference)| format_bit(name, reference, binder))
        .collect();
    debug!(
        clauses = clauses.len(),
        params = binder.parameters().len(),
        "Formatted start bits"
    );
    Ok(clauses.join(CLAUSE_SEPARATOR))
}

/// Format start bits with a fresh default binder
pub fn format_start_clause(
    source: impl Into<StartSource>,
) -> FormatResult<(String, ParameterBag)> {
    let mut binder = ParameterBinder::for_cypher(&QueryConfig::default())?;
    let text = format_start_bits(source, &mut binder)?;
    Ok((text, binder.into_parameters()))
}

fn format_bit(name: &str, reference: &Reference, binder: &mut ParameterBinder) -> String {
    match reference {
        Reference::Identity(r) => {
            format!("{}={}({})", name, r.kind.keyword(), binder.placeholder(r.id))
        }
        Reference::Set(set) => {
            let args: Vec<String> = set.ids.iter().map(|id| binder.placeholder(*id)).collect();
            format!("{}={}({})", name, set.kind.keyword(), args.join(", "))
        }
        Reference::IndexLookup(lookup) => format!(
            "{}={}:{}({} = {})",
            name,
            lookup.kind.keyword(),
            lookup.index,
            lookup.key,
            binder.placeholder(lookup.value.clone())
        ),
        Reference::IndexQuery(query) => format!(
            "{}={}:{}({})",
            name,
            query.kind.keyword(),
            query.index,
            binder.placeholder(query.query.clone())
        ),
        Reference::Wildcard(kind) => format!("{}={}(*)", name, kind.keyword()),
        Reference::Raw(text) => format!("{}={}", name, text),
    }
}

/// Builds complete `START` queries
pub struct CypherStart;

impl CypherStart {
    /// `START <bits>` with the default configuration
    pub fn build(source: impl Into<StartSource>) -> FormatResult<Query> {
        Self::build_with(source, &QueryConfig::default())
    }

    /// `START <bits>` with parameter naming taken from `config`.
    ///
    /// `config` is validated first; an unusable prefix is reported as
    /// [`FormatError::Config`](crate::error::FormatError::Config).
    pub fn build_with(
        source: impl Into<StartSource>,
        config: &QueryConfig,
    ) -> FormatResult<Query> {
        let mut binder = ParameterBinder::for_cypher(config)?;
        let clause = format_start_bits(source, &mut binder)?;
        Ok(Query::new(
            format!("START {}", clause),
            binder.into_parameters(),
            ResultShape::Projection,
            QueryLanguage::Cypher,
        ))
    }
}
