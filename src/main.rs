use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;

use ast_jsdoc_rs::cli::{self, comments::CommentsArgs, jsdoc::JsDocArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "ast-jsdoc")]
#[command(about = "Inspect comments and JSDoc attachment in ESTree JSON dumps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print leading and trailing comments attached to nodes
    Comments {
        /// ESTree JSON file (`-` for stdin)
        input: PathBuf,

        /// Only print this node id
        #[arg(short, long)]
        node: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the resolved JSDoc comment of every function node
    Jsdoc {
        /// ESTree JSON file (`-` for stdin)
        input: PathBuf,

        /// JSON file with resolver options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Largest allowed line gap between comment and function
        #[arg(long)]
        max_line_gap: Option<u32>,

        /// Only print functions that have a JSDoc comment
        #[arg(long)]
        documented: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Comments {
            input,
            node,
            format,
        } => {
            let args = CommentsArgs {
                input_path: input,
                node,
                format,
            };
            cli::comments::comments(&args)?;
        }
        Commands::Jsdoc {
            input,
            config,
            max_line_gap,
            documented,
            format,
        } => {
            let args = JsDocArgs {
                input_path: input,
                config_path: config,
                max_line_gap,
                documented_only: documented,
                format,
            };
            cli::jsdoc::jsdoc(&args)?;
        }
    }

    Ok(())
}
