//! Configuration targets: a tag or a single node

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QbeeError, Result};

/// What a configuration change applies to
///
/// Serialized the way the change endpoint expects the selector, so when
/// flattened into a payload it yields either `{"tag": ..}` or `{"node_id": ..}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    #[serde(rename = "tag")]
    Tag(String),
    #[serde(rename = "node_id")]
    Node(String),
}

impl Target {
    /// Build a target from optional tag/node values
    ///
    /// Exactly one of the two must be set.
    pub fn from_parts(tag: Option<&str>, node: Option<&str>) -> Result<Self> {
        match (tag, node) {
            (Some(tag), None) => Self::tag(tag),
            (None, Some(node)) => Self::node(node),
            (Some(_), Some(_)) => Err(QbeeError::Validation(
                "only one of 'tag' or 'node' can be set".to_string(),
            )),
            (None, None) => Err(QbeeError::Validation(
                "one of 'tag' or 'node' must be set".to_string(),
            )),
        }
    }

    pub fn tag(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(QbeeError::Validation("tag name cannot be empty".to_string()));
        }
        Ok(Target::Tag(name.to_string()))
    }

    pub fn node(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(QbeeError::Validation("node id cannot be empty".to_string()));
        }
        Ok(Target::Node(id.to_string()))
    }

    /// Parse an import identifier of the form `tag:<name>` or `node:<id>`
    ///
    /// Splits on the first `:` only, so identifiers may contain colons.
    pub fn parse_import_id(id: &str) -> Result<Self> {
        let (kind, identifier) = id.split_once(':').ok_or_else(|| {
            QbeeError::Validation(format!(
                "unexpected import identifier '{}', expected 'tag:<name>' or 'node:<id>'",
                id
            ))
        })?;

        match kind {
            "tag" => Self::tag(identifier),
            "node" => Self::node(identifier),
            other => Err(QbeeError::Validation(format!(
                "unknown target type '{}' in import identifier '{}', expected 'tag' or 'node'",
                other, id
            ))),
        }
    }

    /// Target type as used in API paths (`tag` or `node`)
    pub fn kind(&self) -> &'static str {
        match self {
            Target::Tag(_) => "tag",
            Target::Node(_) => "node",
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Target::Tag(name) => name,
            Target::Node(id) => id,
        }
    }

    /// Path segment `{tag|node}/{identifier}` with the identifier escaped
    pub fn path_segment(&self) -> String {
        format!(
            "{}/{}",
            self.kind(),
            urlencoding::encode(self.identifier())
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.identifier())
    }
}

impl FromStr for Target {
    type Err = QbeeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_import_id(s)
    }
}
