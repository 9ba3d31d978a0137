//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::qbee::Target;

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// JSON
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Output format for single documents (bundle payloads, roles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// YAML (default)
    Yaml,
    /// JSON
    Json,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Yaml => write!(f, "yaml"),
            DocumentFormat::Json => write!(f, "json"),
        }
    }
}

/// Selects the tag or node a command applies to
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Tag name
    #[arg(long)]
    pub tag: Option<String>,

    /// Node ID
    #[arg(long)]
    pub node: Option<String>,

    /// Combined identifier: 'tag:<name>' or 'node:<id>'
    #[arg(long)]
    pub id: Option<String>,
}

impl TargetArgs {
    /// Resolve to exactly one target
    pub fn resolve(&self) -> Result<Target> {
        match &self.id {
            Some(id) if self.tag.is_none() && self.node.is_none() => Target::parse_import_id(id),
            Some(_) => Err(crate::error::QbeeError::Validation(
                "--id cannot be combined with --tag or --node".to_string(),
            )),
            None => Target::from_parts(self.tag.as_deref(), self.node.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QbeeError;

    fn args(tag: Option<&str>, node: Option<&str>, id: Option<&str>) -> TargetArgs {
        TargetArgs {
            tag: tag.map(String::from),
            node: node.map(String::from),
            id: id.map(String::from),
        }
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
        assert_eq!(DocumentFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_resolve_tag() {
        assert_eq!(
            args(Some("t1"), None, None).resolve().unwrap(),
            Target::Tag("t1".to_string())
        );
    }

    #[test]
    fn test_resolve_id() {
        assert_eq!(
            args(None, None, Some("node:abc:def")).resolve().unwrap(),
            Target::Node("abc:def".to_string())
        );
    }

    #[test]
    fn test_resolve_both() {
        let err = args(Some("t1"), Some("n1"), None).resolve().unwrap_err();
        assert!(matches!(err, QbeeError::Validation(_)));
    }

    #[test]
    fn test_resolve_neither() {
        assert!(args(None, None, None).resolve().is_err());
    }

    #[test]
    fn test_resolve_id_with_tag() {
        let err = args(Some("t1"), None, Some("tag:t1")).resolve().unwrap_err();
        assert!(err.to_string().contains("--id"));
    }
}
