use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cmdtree_core::{CommandNode, ExecutorError, TreeConfig, executor};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "cmdtree")]
#[command(about = "Resolve and execute input against a sample command tree")]
struct Cli {
    /// YAML file with the tree delimiter and root name.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Token delimiter (overrides the config file).
    #[arg(long, global = true)]
    delimiter: Option<String>,
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute the input against the tree.
    Run(InputArgs),
    /// Show which command the input resolves to, without executing it.
    Resolve(InputArgs),
    /// Print the tree.
    Tree(TreeArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Input tokens, joined with the delimiter before resolution.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    input: Vec<String>,
}

#[derive(Debug, Args)]
struct TreeArgs {
    /// Print a JSON snapshot instead of the indented rendering.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum SqrtError {
    #[error("expected a number, got {0:?}")]
    NotANumber(String),
    #[error("cannot take the square root of a negative number: {0}")]
    Negative(f64),
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let result = load_config(&cli).and_then(|config| {
        let tree = build_tree(&config)?;
        match &cli.command {
            Command::Run(args) => run_execute(&tree, &config, args),
            Command::Resolve(args) => run_resolve(&tree, &config, args),
            Command::Tree(args) => run_tree(&tree, args),
        }
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<TreeConfig, String> {
    let mut config = match &cli.config {
        Some(path) => TreeConfig::load(path)
            .map_err(|err| format!("failed to load {}: {err}", path.display()))?,
        None => TreeConfig::default(),
    };
    if config.name.is_empty() {
        config.name = "help".to_string();
    }
    if let Some(delimiter) = &cli.delimiter {
        config.delimiter = delimiter.clone();
    }
    debug!(delimiter = ?config.delimiter, name = %config.name, "loaded tree config");
    Ok(config)
}

/// Builds the sample tree:
///
/// ```text
/// help            prints the requested topic
///     deep        prints the requested topic in depth
///     with        lists its own sub-commands
///         cmdtree
///         life
///         sleep
///     sqrt        square root of a non-negative number
/// ```
fn build_tree(config: &TreeConfig) -> Result<CommandNode, String> {
    let mut root = config
        .command(Some(|arg: &str| {
            println!("You requested help for \"{arg}\"");
            Ok::<(), ExecutorError>(())
        }))
        .map_err(|err| err.to_string())?;

    root.add_child(
        "deep",
        Some(|arg: &str| {
            println!("You requested deep help for \"{arg}\"");
            Ok::<(), ExecutorError>(())
        }),
    )
    .map_err(|err| err.to_string())?;

    let with = root
        .add_child(
            "with",
            Some(executor::with_node(|node: &CommandNode, _arg: &str| {
                println!("Available topics:");
                print!("{}", node.render());
                Ok::<(), ExecutorError>(())
            })),
        )
        .map_err(|err| err.to_string())?;
    for topic in ["cmdtree", "life", "sleep"] {
        with.add_child(
            topic,
            Some(move |_: &str| {
                println!("Help about {topic}");
                Ok::<(), ExecutorError>(())
            }),
        )
        .map_err(|err| err.to_string())?;
    }

    root.add_child(
        "sqrt",
        Some(|arg: &str| -> Result<(), SqrtError> {
            let value: f64 = arg
                .parse()
                .map_err(|_| SqrtError::NotANumber(arg.to_string()))?;
            if value < 0.0 {
                return Err(SqrtError::Negative(value));
            }
            println!("{}", value.sqrt());
            Ok(())
        }),
    )
    .map_err(|err| err.to_string())?;

    Ok(root)
}

fn join_input(config: &TreeConfig, args: &InputArgs) -> String {
    args.input.join(&config.delimiter)
}

fn run_execute(tree: &CommandNode, config: &TreeConfig, args: &InputArgs) -> Result<(), String> {
    let input = join_input(config, args);
    info!(input = %input, "executing");
    tree.execute(&input).map_err(|err| err.to_string())
}

fn run_resolve(tree: &CommandNode, config: &TreeConfig, args: &InputArgs) -> Result<(), String> {
    let input = join_input(config, args);
    let resolution = tree.resolve(&input);
    println!("command: {}", resolution.node.path());
    println!("argument: {:?}", resolution.argument);
    println!("executable: {}", resolution.node.is_executable());
    Ok(())
}

fn run_tree(tree: &CommandNode, args: &TreeArgs) -> Result<(), String> {
    if args.json {
        let json = tree.snapshot().to_json().map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        print!("{}", tree.render());
    }
    Ok(())
}
