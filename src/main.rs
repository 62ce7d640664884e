mod config;
mod figma;

use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokens::{ColorToken, TokenFilter, TokenSet};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error("{expression}: {source}")]
    Resolve {
        expression: String,
        source: colors::ResolveError,
    },
    #[error(transparent)]
    Token(#[from] tokens::TokenError),
    #[error("no token named {0}")]
    UnknownToken(String),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Figma(#[from] figma::FigmaError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tokensync", about = "Resolve stylesheet color tokens and sync them to Figma variables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one or more color expressions and print them as JSON.
    Resolve {
        #[arg(required = true)]
        expressions: Vec<String>,
    },
    /// Extract and resolve the color tokens of a stylesheet.
    Extract(ExtractArgs),
    /// Push the color tokens of a stylesheet into a Figma variable collection.
    Push(PushArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    #[arg(long, default_value = "-", help = "Stylesheet path, or - for stdin")]
    input: String,

    #[arg(long, env = "TOKENSYNC_PREFIX", default_value = tokens::DEFAULT_PREFIX, allow_hyphen_values = true)]
    prefix: String,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(long, allow_hyphen_values = true, help = "Print only the token with this property name")]
    token: Option<String>,
}

#[derive(Args, Debug)]
struct PushArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(long, env = "TOKENSYNC_COLLECTION", default_value = "Tokens")]
    collection: String,

    #[arg(long, default_value_t = false, help = "Print the request body instead of sending it")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Resolve { expressions } => run_resolve(&expressions),
        Command::Extract(args) => run_extract(&args),
        Command::Push(args) => run_push(&args).await,
    }
}

fn run_resolve(expressions: &[String]) -> Result<(), CliError> {
    for expression in expressions {
        let color = colors::resolve(expression).map_err(|source| CliError::Resolve {
            expression: expression.clone(),
            source,
        })?;
        print_json(&color)?;
    }
    Ok(())
}

fn run_extract(args: &ExtractArgs) -> Result<(), CliError> {
    let set = load_tokens(&args.source)?;
    match &args.token {
        Some(name) => print_json(select_token(&set, name)?),
        None => print_json(&set),
    }
}

fn select_token<'a>(set: &'a TokenSet, name: &str) -> Result<&'a ColorToken, CliError> {
    set.get(name).ok_or_else(|| CliError::UnknownToken(name.to_owned()))
}

async fn run_push(args: &PushArgs) -> Result<(), CliError> {
    let set = load_tokens(&args.source)?;
    let request = figma::build_variables_request(&set, &args.collection, &args.source.prefix);

    if args.dry_run {
        return print_json(&request);
    }

    let config = config::SyncConfig::from_env()?;
    let client = figma::FigmaClient::new(config)?;
    let summary = client
        .post_variables(&request)
        .await
        .inspect_err(|e| tracing::error!(error = %e, retryable = e.retryable(), "variables push failed"))?;
    tracing::info!(
        collection = %args.collection,
        variables = summary.variables_created(),
        "variables pushed"
    );
    print_json(&summary)
}

fn load_tokens(args: &SourceArgs) -> Result<TokenSet, CliError> {
    let css = read_input(&args.input)?;
    let set = tokens::build_token_set(&css, &TokenFilter::with_prefix(args.prefix.clone()))?;
    tracing::info!(input = %args.input, tokens = set.len(), "resolved color tokens");
    Ok(set)
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut css = String::new();
        io::stdin()
            .read_to_string(&mut css)
            .map_err(|source| CliError::Input { path: "stdin".to_owned(), source })?;
        return Ok(css);
    }
    fs::read_to_string(path).map_err(|source| CliError::Input { path: path.to_owned(), source })
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
