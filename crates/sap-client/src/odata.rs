//! OData v2 queries against SAP Gateway services.

use common::as_array;
use serde_json::Value;
use url::Url;

use crate::error::{Result, SapError};

/// A read against one entity set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ODataQuery {
    /// `<EntitySet>?$filter=<field> eq '<value>'`
    Filter {
        entity_set: String,
        field: String,
        value: String,
    },
    /// `<EntitySet>(<key>='<value>',...)`, or `<EntitySet>('<value>')` for an unnamed key.
    Key {
        entity_set: String,
        keys: Vec<(Option<String>, String)>,
    },
}

impl ODataQuery {
    /// Collection read filtered by `field eq 'value'`.
    pub fn filter_eq(
        entity_set: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ODataQuery::Filter {
            entity_set: entity_set.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Single-entity read addressed by named key properties.
    pub fn by_keys<K, V>(
        entity_set: impl Into<String>,
        keys: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ODataQuery::Key {
            entity_set: entity_set.into(),
            keys: keys
                .into_iter()
                .map(|(k, v)| (Some(k.into()), v.into()))
                .collect(),
        }
    }

    /// Single-entity read addressed by its only key property.
    pub fn by_key(entity_set: impl Into<String>, value: impl Into<String>) -> Self {
        ODataQuery::Key {
            entity_set: entity_set.into(),
            keys: vec![(None, value.into())],
        }
    }

    pub fn entity_set(&self) -> &str {
        match self {
            ODataQuery::Filter { entity_set, .. } | ODataQuery::Key { entity_set, .. } => {
                entity_set
            }
        }
    }

    /// The `$filter` expression, for filter queries.
    pub fn filter_expression(&self) -> Option<String> {
        match self {
            ODataQuery::Filter { field, value, .. } => {
                Some(format!("{field} eq {}", literal(value)))
            }
            ODataQuery::Key { .. } => None,
        }
    }

    /// Full request URL below the service root.
    pub fn url(&self, root: &str) -> Result<Url> {
        let root = root.trim_end_matches('/');
        let raw = match self {
            ODataQuery::Filter { entity_set, .. } => {
                let filter = self.filter_expression().unwrap_or_default();
                format!(
                    "{root}/{entity_set}?$filter={}&$format=json",
                    urlencoding::encode(&filter)
                )
            }
            ODataQuery::Key { entity_set, keys } => {
                let rendered: Vec<String> = keys
                    .iter()
                    .map(|(name, value)| {
                        let escaped = value.replace('\'', "''");
                        let quoted = format!("'{}'", urlencoding::encode(&escaped));
                        match name {
                            Some(name) => format!("{name}={quoted}"),
                            None => quoted,
                        }
                    })
                    .collect();
                format!("{root}/{entity_set}({})?$format=json", rendered.join(","))
            }
        };
        Url::parse(&raw).map_err(|e| SapError::InvalidUrl(format!("{raw}: {e}")))
    }
}

/// Renders an OData string literal, doubling embedded single quotes.
fn literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Parsed JSON body of an OData v2 response.
#[derive(Debug, Clone, PartialEq)]
pub struct ODataResponse {
    body: Value,
}

impl ODataResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Rows of a collection read (`d.results`), always as a list.
    pub fn results(&self) -> Vec<&Value> {
        as_array(self.body.pointer("/d/results"))
    }

    /// The entity of a single-entity read (`d`), if present.
    pub fn entity(&self) -> Option<&Value> {
        self.body.get("d").filter(|d| !d.is_null())
    }
}

/// Extracts `error.message.value` from an SAP Gateway error body.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message/value")
        .and_then(Value::as_str)
        .map(str::to_string)
}
