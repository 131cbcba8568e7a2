//! Parameter binding.
//!
//! Every literal that ends up in query text is externalized through a
//! [`ParameterBinder`]: the value is stored in an ordered [`ParameterBag`]
//! under a generated name and only its placeholder is written into the text.
//! Names are `<prefix><count>`, so with the default prefix they run
//! `p0, p1, p2, ...` in bind order and can never collide within one bag.

use crate::error::FormatResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strand_config::{PlaceholderStyle, QueryConfig};
use tracing::trace;

/// Ordered, append-only mapping from generated parameter name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag(IndexMap<String, Value>);

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Parameter names in bind order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in bind order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }

    fn push(&mut self, name: String, value: Value) {
        let previous = self.0.insert(name, value);
        debug_assert!(previous.is_none(), "parameter names are generated uniquely");
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Allocates parameter names and records bound values.
///
/// One binder serves exactly one query build. It is deliberately not
/// `Clone`: two copies would hand out the same names.
#[derive(Debug)]
pub struct ParameterBinder {
    bag: ParameterBag,
    prefix: String,
    style: PlaceholderStyle,
}

impl Default for ParameterBinder {
    fn default() -> Self {
        Self::new(PlaceholderStyle::Braced)
    }
}

impl ParameterBinder {
    /// Binder with the default `p` prefix and the given placeholder style
    pub fn new(style: PlaceholderStyle) -> Self {
        Self::from_parts(style, "p")
    }

    /// Binder configured for Cypher text; fails if `config` does not validate
    pub fn for_cypher(config: &QueryConfig) -> FormatResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            config.cypher_placeholder,
            &config.parameter_prefix,
        ))
    }

    /// Binder configured for Gremlin text; fails if `config` does not validate
    pub fn for_gremlin(config: &QueryConfig) -> FormatResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            config.gremlin_placeholder,
            &config.parameter_prefix,
        ))
    }

    /// Caller guarantees `prefix` is a valid identifier start
    pub(crate) fn from_parts(style: PlaceholderStyle, prefix: &str) -> Self {
        Self {
            bag: ParameterBag::new(),
            prefix: prefix.to_string(),
            style,
        }
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Store `value` under a fresh name and return that name
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        let name = format!("{}{}", self.prefix, self.bag.len());
        trace!(param = %name, "Bound query parameter");
        self.bag.push(name.clone(), value.into());
        name
    }

    /// Bind `value` and return the placeholder text to write in its place
    pub fn placeholder(&mut self, value: impl Into<Value>) -> String {
        let name = self.bind(value);
        self.style.render(&name)
    }

    pub fn parameters(&self) -> &ParameterBag {
        &self.bag
    }

    pub fn into_parameters(self) -> ParameterBag {
        self.bag
    }
}
