use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stellar::SpectralType;

#[derive(Parser)]
#[command(
    name = "system-cli",
    about = "Deterministic star system generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log pipeline stages at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "summary")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Summary,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a system from a seed and optional specification
    Generate(GenerateArgs),
    /// Rebuild a system from the provenance record of an earlier run
    Regenerate(RegenerateArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Seed; overrides the seed in `--spec`
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML specification file
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Star count as `N` or `MIN..MAX`
    #[arg(long, value_name = "RANGE", value_parser = parse_star_range)]
    pub stars: Option<(usize, usize)>,

    /// Spectral class hint, one per star in order
    #[arg(long = "hint", value_name = "CLASS")]
    pub hints: Vec<SpectralType>,

    #[arg(long)]
    pub no_belts: bool,

    #[arg(long)]
    pub no_moons: bool,

    /// Override as `key=value`, e.g. `stars[0].mass=1.0`
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(String, String)>,
}

#[derive(Args)]
pub struct RegenerateArgs {
    /// JSON file holding a system or its `provenance` object
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

pub fn parse_star_range(s: &str) -> Result<(usize, usize), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("`{part}` is not a star count"))
    };
    match s.split_once("..") {
        Some((min, max)) => Ok((parse(min)?, parse(max.trim_start_matches('='))?)),
        None => {
            let n = parse(s)?;
            Ok((n, n))
        }
    }
}

pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}
