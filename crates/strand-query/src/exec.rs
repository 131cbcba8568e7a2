//! Execution boundary.
//!
//! Sending a query, authenticating and decoding the response belong to
//! whoever implements [`QueryExecutor`]; this crate only hands over finished
//! [`Query`] values.

use crate::query::Query;
use serde_json::Value;

/// Something that can run a built query
pub trait QueryExecutor {
    /// Transport or server error type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Unique name for this executor
    fn name(&self) -> &str;

    /// Run `query`, returning raw result rows
    fn execute(&self, query: &Query) -> Result<Vec<Value>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gremlin::GremlinSteps;
    use crate::reference::NodeReference;
    use serde_json::json;
    use std::cell::RefCell;
    use std::convert::Infallible;

    #[derive(Default)]
    struct RecordingExecutor {
        bodies: RefCell<Vec<Value>>,
    }

    impl QueryExecutor for RecordingExecutor {
        type Error = Infallible;

        fn name(&self) -> &str {
            "recording"
        }

        fn execute(&self, query: &Query) -> Result<Vec<Value>, Self::Error> {
            self.bodies.borrow_mut().push(query.request_body());
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_executor_receives_request_body() {
        let executor = RecordingExecutor::default();
        let query = NodeReference::new(123).except_e("foo").into_query();

        let rows = executor.execute(&query).unwrap();

        assert!(rows.is_empty());
        assert_eq!(executor.name(), "recording");
        assert_eq!(
            executor.bodies.borrow()[0],
            json!({"script": "g.v(p0).except(foo)", "params": {"p0": 123}})
        );
    }
}
