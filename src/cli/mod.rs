//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands. Both
//! read an ESTree JSON dump produced by an external parser.

use clap::ValueEnum;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::ast::{AstArena, Comment, CommentKind};
use crate::error::{Error, Result};

pub mod comments;
pub mod jsdoc;

/// Output format shared by the subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Read an ESTree JSON file (`-` for stdin) into an arena
pub fn load_tree(input_path: &Path) -> Result<AstArena> {
    let json = if input_path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input_path).map_err(|e| {
            Error::Io(format!("Failed to read {}: {}", input_path.display(), e))
        })?
    };

    let arena = AstArena::from_estree_str(&json)?;
    log::debug!("loaded {} nodes from {}", arena.len(), input_path.display());
    Ok(arena)
}

/// Render a comment on one line with its delimiters restored
pub(crate) fn render_comment(comment: &Comment) -> String {
    let value = comment.value.replace('\n', "\\n");
    match comment.kind {
        CommentKind::Block => format!("/*{}*/", value),
        CommentKind::Line => format!("//{}", value),
    }
}

pub(crate) fn serialize<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::Io(format!("Failed to serialize output: {}", e)))
}
