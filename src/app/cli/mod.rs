//! CLI Adapter.

mod list;
mod new;
mod show;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version)]
#[command(
    about = "Create source files from project ScriptTemplates",
    long_about = None
)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List templates in menu order
    #[clap(visible_alias = "ls")]
    List {
        /// Print menu labels only, one per line
        #[arg(long)]
        plain: bool,
    },
    /// Show a template's directives, placeholders and body
    Show {
        /// Menu label of the template
        template: String,
    },
    /// Create a file from a template
    #[clap(visible_alias = "n")]
    New {
        /// Value for ClassName; names the created file
        class_name: Option<String>,
        /// Menu label of the template (prompts when omitted on a terminal)
        #[arg(short, long)]
        template: Option<String>,
        /// Output directory relative to the project root
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Entry selected in the editor; its folder becomes the output directory
        #[arg(short, long, value_name = "PATH", conflicts_with = "dir")]
        selected: Option<PathBuf>,
        /// Placeholder value
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = resolve_root(cli.root).and_then(|root| match cli.command {
        Commands::List { plain } => list::run_list(&root, plain),
        Commands::Show { template } => show::run_show(&root, &template),
        Commands::New { class_name, template, dir, selected, values } => {
            let options = crate::app::api::CreateOptions {
                template,
                class_name,
                values,
                directory: dir,
                selected,
            };
            new::run_new(&root, &options)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.format_timestamp(None).init();
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) =
        raw.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing placeholder name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments() {
        assert_eq!(
            parse_assignment("Namespace=Game.Core").unwrap(),
            ("Namespace".to_string(), "Game.Core".to_string())
        );
        assert_eq!(parse_assignment("Note=a=b").unwrap().1, "a=b");
        assert_eq!(parse_assignment("Empty=").unwrap().1, "");
    }

    #[test]
    fn rejects_malformed_assignments() {
        assert!(parse_assignment("Namespace").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
