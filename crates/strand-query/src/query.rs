//! Built queries.
//!
//! A [`Query`] is the finished product of a build: text, the parameters its
//! placeholders refer to, and tags telling the execution side which language
//! the text is in and what shape of result to expect.

use crate::params::ParameterBag;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Language the query text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLanguage {
    Cypher,
    Gremlin,
}

/// Expected result shape, read by whoever deserializes the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// Arbitrary columns
    Projection,
    /// A sequence of nodes
    Nodes,
    /// A sequence of relationships without payload
    Relationships,
    /// A sequence of relationships carrying typed payload
    RelationshipsWithData,
}

/// Query text plus its bound parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    text: String,
    parameters: ParameterBag,
    shape: ResultShape,
    language: QueryLanguage,
}

impl Query {
    pub fn new(
        text: impl Into<String>,
        parameters: ParameterBag,
        shape: ResultShape,
        language: QueryLanguage,
    ) -> Self {
        Self {
            text: text.into(),
            parameters,
            shape,
            language,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    pub fn shape(&self) -> ResultShape {
        self.shape
    }

    pub fn language(&self) -> QueryLanguage {
        self.language
    }

    /// Same text and parameters under a different result shape
    pub fn with_shape(self, shape: ResultShape) -> Self {
        Self { shape, ..self }
    }

    pub fn into_parts(self) -> (String, ParameterBag) {
        (self.text, self.parameters)
    }

    /// JSON payload for the server endpoint of this query's language.
    ///
    /// Cypher uses `{"query": .., "params": ..}`, Gremlin scripts use
    /// `{"script": .., "params": ..}`.
    pub fn request_body(&self) -> Value {
        let text_key = match self.language {
            QueryLanguage::Cypher => "query",
            QueryLanguage::Gremlin => "script",
        };
        json!({
            text_key: self.text,
            "params": self.parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterBinder;

    fn sample(language: QueryLanguage) -> Query {
        let mut binder = ParameterBinder::default();
        let placeholder = binder.placeholder(123);
        Query::new(
            format!("START n=node({})", placeholder),
            binder.into_parameters(),
            ResultShape::Projection,
            language,
        )
    }

    #[test]
    fn test_cypher_request_body() {
        let body = sample(QueryLanguage::Cypher).request_body();
        assert_eq!(
            body,
            json!({"query": "START n=node({p0})", "params": {"p0": 123}})
        );
    }

    #[test]
    fn test_gremlin_request_body_uses_script_key() {
        let body = sample(QueryLanguage::Gremlin).request_body();
        assert!(body.get("script").is_some());
        assert!(body.get("query").is_none());
    }

    #[test]
    fn test_with_shape_keeps_text_and_params() {
        let query = sample(QueryLanguage::Gremlin);
        let reshaped = query.clone().with_shape(ResultShape::Nodes);
        assert_eq!(reshaped.text(), query.text());
        assert_eq!(reshaped.parameters(), query.parameters());
        assert_eq!(reshaped.shape(), ResultShape::Nodes);
    }
}
