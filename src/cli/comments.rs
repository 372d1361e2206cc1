use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use super::{load_tree, render_comment, serialize, OutputFormat};
use crate::ast::{get_comments, AstArena, Comment, NodeId};
use crate::error::{Error, Result};

/// Arguments of the comments subcommand
#[derive(Debug, Clone)]
pub struct CommentsArgs {
    pub input_path: PathBuf,
    pub node: Option<u32>,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct NodeComments<'a> {
    node: NodeId,
    #[serde(rename = "type")]
    kind: &'a str,
    line: Option<u32>,
    leading: &'a [Comment],
    trailing: &'a [Comment],
}

/// Run the comments subcommand
pub fn comments(args: &CommentsArgs) -> Result<()> {
    let arena = load_tree(&args.input_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_comments(&arena, args.node.map(NodeId::new), args.format, &mut out)
}

/// Write leading/trailing comments of one node, or of every node that has any
pub fn write_comments<W: Write>(
    arena: &AstArena,
    node: Option<NodeId>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let ids: Vec<NodeId> = match node {
        Some(id) => {
            if arena.get(id).is_none() {
                return Err(Error::InvalidNode {
                    node: Some(id),
                    field: "id",
                });
            }
            vec![id]
        }
        None => arena
            .iter()
            .map(|(id, _)| id)
            .filter(|&id| !get_comments(arena, id).is_empty())
            .collect(),
    };

    let entries: Vec<NodeComments<'_>> = ids
        .into_iter()
        .map(|id| {
            let node = arena.node(id);
            let comments = get_comments(arena, id);
            NodeComments {
                node: id,
                kind: node.kind.as_str(),
                line: node.start_line(),
                leading: comments.leading,
                trailing: comments.trailing,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => writeln!(out, "{}", serialize(&entries)?)?,
        OutputFormat::Text => {
            for entry in &entries {
                writeln!(
                    out,
                    "{} {}{}",
                    entry.node,
                    entry.kind,
                    entry.line.map(|l| format!(" (line {})", l)).unwrap_or_default()
                )?;
                for comment in entry.leading {
                    writeln!(out, "  leading  {}", render_comment(comment))?;
                }
                for comment in entry.trailing {
                    writeln!(out, "  trailing {}", render_comment(comment))?;
                }
            }
        }
    }

    Ok(())
}
