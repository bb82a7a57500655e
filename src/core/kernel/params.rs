//! Request parameter builder.
//!
//! Inserts only present fields, so optional parameters never appear as nulls
//! in a body or query string. One builder serves both shapes: JSON bodies
//! and query pairs.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert the field only when the value is present.
    #[must_use]
    pub fn insert_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.insert(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON object for a request body.
    pub fn into_body(self) -> Value {
        Value::Object(self.0)
    }

    /// Key/value pairs for a query string. Scalars are stringified without
    /// JSON quoting.
    pub fn into_query(self) -> Vec<(String, String)> {
        self.0
            .into_iter()
            .map(|(k, v)| {
                let rendered = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, rendered)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_options_are_dropped() {
        let body = Params::new()
            .insert("type", "buy")
            .insert_opt("clientOrderId", None::<&str>)
            .insert_opt("stopPrice", Some(1200.5))
            .into_body();
        assert_eq!(body, json!({"type": "buy", "stopPrice": 1200.5}));
    }

    #[test]
    fn query_pairs_are_plain_strings() {
        let query = Params::new()
            .insert("wallet", 42)
            .insert("type", "spot")
            .into_query();
        assert!(query.contains(&("wallet".to_string(), "42".to_string())));
        assert!(query.contains(&("type".to_string(), "spot".to_string())));
    }
}
