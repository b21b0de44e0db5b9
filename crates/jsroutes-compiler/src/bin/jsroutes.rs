/// Route helper generator CLI

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use regex::Regex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jsroutes_compiler::{CasingStyle, Config, GenerateOptions, Generator, Target};

#[derive(Parser, Debug)]
#[command(name = "jsroutes")]
#[command(about = "Generates JavaScript/TypeScript URL helpers from a Rails-style route table")]
#[command(version)]
struct Args {
    /// Route table JSON file: [{"name": "user", "path": "/users/:id"}, ...]
    #[arg(value_name = "ROUTES")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Target language: js or ts
    #[arg(short, long, default_value = "js")]
    target: String,

    /// Camel-case generated function names: lower or upper
    #[arg(long, value_name = "STYLE")]
    camelize: Option<String>,

    /// Keep only routes whose path matches this regex
    #[arg(long, value_name = "REGEX")]
    include_paths: Option<String>,

    /// Drop routes whose path matches this regex
    #[arg(long, value_name = "REGEX")]
    exclude_paths: Option<String>,

    /// Keep only routes whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    include_names: Option<String>,

    /// Drop routes whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    exclude_names: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn filter(flag: &str, value: Option<&str>) -> anyhow::Result<Option<Regex>> {
    value
        .map(|v| Regex::new(v).with_context(|| format!("Invalid {} regex '{}'", flag, v)))
        .transpose()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();

    let target: Target = args.target.parse()?;
    let config = Config {
        camelize: args
            .camelize
            .as_deref()
            .map(|style| style.parse::<CasingStyle>())
            .transpose()?,
        include_paths: filter("--include-paths", args.include_paths.as_deref())?,
        exclude_paths: filter("--exclude-paths", args.exclude_paths.as_deref())?,
        include_names: filter("--include-names", args.include_names.as_deref())?,
        exclude_names: filter("--exclude-names", args.exclude_names.as_deref())?,
    };

    let options = GenerateOptions::new(args.input).target(target).config(config);
    let output = Generator::new(options).generate()?;

    match args.output {
        Some(path) => {
            fs::write(&path, &output.code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(file = %path.display(), routes = output.routes.len(), "wrote route helpers");
        }
        None => print!("{}", output.code),
    }

    Ok(())
}
