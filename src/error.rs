use miette::Diagnostic;
use thiserror::Error;

use crate::ast::NodeId;

/// Result type for comment queries
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for comment resolution and tree ingestion
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node{}: missing or unusable `{field}`", node_suffix(.node))]
    #[diagnostic(
        code(ast_jsdoc::invalid_node),
        help("the parser must populate this field before the node is queried")
    )]
    InvalidNode {
        node: Option<NodeId>,
        field: &'static str,
    },

    #[error("Malformed ESTree input: {message}")]
    #[diagnostic(code(ast_jsdoc::json_error))]
    Json { message: String },

    #[error("Invalid resolver options: {message}")]
    #[diagnostic(code(ast_jsdoc::config_error))]
    Config { message: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(ast_jsdoc::io_error))]
    Io(String),
}

fn node_suffix(node: &Option<NodeId>) -> String {
    match node {
        Some(id) => format!(" {}", id),
        None => String::new(),
    }
}

impl Error {
    /// Create an invalid-node error for a node in the arena
    pub fn invalid_node(node: NodeId, field: &'static str) -> Self {
        Error::InvalidNode {
            node: Some(node),
            field,
        }
    }

    /// Create a JSON ingestion error
    pub fn json(message: impl Into<String>) -> Self {
        Error::Json {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::json(err.to_string())
    }
}
