mod summarize;
mod tree;

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use structscope_core::config::{OutputFormat, SummaryConfig};

#[derive(Parser)]
#[command(
    name = "structscope",
    version,
    about = "Structural summaries of Java source files",
    long_about = "Structscope parses a Java source file and prints an indented outline of its \
                  imports, classes, fields, methods and the method invocations inside them."
)]
pub struct Cli {
    /// Path to a JSON config file (defaults to ./structscope.json when present)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the structural summary of a source file
    #[command(
        long_about = "Walks the parse tree of the file and prints one indented line per import, \
                            class, field, method and invocation. Use '-' to read from stdin."
    )]
    Summarize {
        /// Source file to summarize, or '-' for stdin
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Emit the summary as JSON instead of indented text
        #[arg(long)]
        json: bool,
    },
    /// Print the raw parse tree with node kinds and spans
    Tree {
        /// Source file to parse, or '-' for stdin
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = SummaryConfig::load(cli.config.as_deref())?;

    let component = match &cli.command {
        Commands::Summarize { .. } => "summarize",
        Commands::Tree { .. } => "tree",
    };
    let _guard = structscope_core::logging::init_logging(
        component,
        config.log_to_stderr,
        &config.resolved_log_dir(),
        &config.log_filter,
    );

    match cli.command {
        Commands::Summarize { path, json } => {
            if json {
                config.format = OutputFormat::Json;
            }
            summarize::run(&path, &config)
        }
        Commands::Tree { path } => tree::run(&path),
    }
}

/// Reads `path`, treating `-` as stdin.
pub(crate) fn read_source(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_summarize_flags() {
        let cli = Cli::try_parse_from(["structscope", "summarize", "A.java", "--json"]).unwrap();
        match cli.command {
            Commands::Summarize { path, json } => {
                assert_eq!(path, PathBuf::from("A.java"));
                assert!(json);
            }
            _ => panic!("Expected summarize command"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["structscope", "tree", "-", "--config", "conf.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("conf.json")));
        assert!(matches!(cli.command, Commands::Tree { path } if path == Path::new("-")));
    }
}
