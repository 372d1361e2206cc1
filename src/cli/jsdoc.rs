use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::{load_tree, render_comment, serialize, OutputFormat};
use crate::ast::{AstArena, Comment, JsDocResolver, NodeId};
use crate::config::JsDocOptions;
use crate::error::{Error, Result};

/// Arguments of the jsdoc subcommand
#[derive(Debug, Clone)]
pub struct JsDocArgs {
    pub input_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub max_line_gap: Option<u32>,
    pub documented_only: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct FunctionDoc<'a> {
    node: NodeId,
    #[serde(rename = "type")]
    kind: &'a str,
    line: Option<u32>,
    jsdoc: Option<&'a Comment>,
}

/// Run the jsdoc subcommand
pub fn jsdoc(args: &JsDocArgs) -> Result<()> {
    let mut options = match &args.config_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| Error::Io(format!("Failed to read {}: {}", path.display(), e)))?;
            JsDocOptions::from_json_str(&json)?
        }
        None => JsDocOptions::default(),
    };
    if let Some(gap) = args.max_line_gap {
        options = options.with_max_line_gap(gap);
    }

    let arena = load_tree(&args.input_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_jsdoc(&arena, options, args.documented_only, args.format, &mut out)
}

/// Write the resolved JSDoc comment of every function node
pub fn write_jsdoc<W: Write>(
    arena: &AstArena,
    options: JsDocOptions,
    documented_only: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let resolver = JsDocResolver::new(arena, options);

    let docs: Vec<FunctionDoc<'_>> = if documented_only {
        resolver
            .collect()?
            .into_iter()
            .map(|m| function_doc(arena, m.node, Some(m.comment)))
            .collect()
    } else {
        let mut docs = Vec::new();
        for (id, node) in arena.iter() {
            if node.kind.is_function() {
                docs.push(function_doc(arena, id, resolver.resolve(id)?));
            }
        }
        docs
    };

    match format {
        OutputFormat::Json => writeln!(out, "{}", serialize(&docs)?)?,
        OutputFormat::Text => {
            for doc in &docs {
                let rendered = doc
                    .jsdoc
                    .map(render_comment)
                    .unwrap_or_else(|| "no JSDoc".to_string());
                let line = doc.line.map(|l| format!(" line {}", l)).unwrap_or_default();
                writeln!(out, "{} {}{}: {}", doc.node, doc.kind, line, rendered)?;
            }
        }
    }

    Ok(())
}

fn function_doc<'a>(
    arena: &'a AstArena,
    id: NodeId,
    jsdoc: Option<&'a Comment>,
) -> FunctionDoc<'a> {
    let node = arena.node(id);
    FunctionDoc {
        node: id,
        kind: node.kind.as_str(),
        line: node.start_line(),
        jsdoc,
    }
}
