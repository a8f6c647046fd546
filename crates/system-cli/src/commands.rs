use std::fs;

use anyhow::{Context, bail};
use star_system::{Provenance, StarSystem, SystemSpec};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let system = match cli.command {
        Command::Generate(args) => cmd_generate(args)?,
        Command::Regenerate(args) => cmd_regenerate(args)?,
    };
    print_system(&system, cli.format)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<StarSystem> {
    let spec = build_spec(args)?;
    debug!(seed = spec.seed, "specification ready");
    StarSystem::from_spec(&spec).context("generation failed")
}

fn cmd_regenerate(args: RegenerateArgs) -> anyhow::Result<StarSystem> {
    let source = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let provenance = read_provenance(&source)
        .with_context(|| format!("no provenance record in {}", args.path.display()))?;
    StarSystem::regenerate(&provenance).context("regeneration failed")
}

/// Merge the TOML specification and command-line flags; flags win
pub fn build_spec(args: GenerateArgs) -> anyhow::Result<SystemSpec> {
    let mut spec = match &args.spec {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SystemSpec::from_toml_str(&source)
                .with_context(|| format!("invalid specification in {}", path.display()))?
        }
        None => SystemSpec::default(),
    };

    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some((min, max)) = args.stars {
        spec.min_stars = min;
        spec.max_stars = max;
    }
    if !args.hints.is_empty() {
        spec.spectral_hints = args.hints;
    }
    if args.no_belts {
        spec.include_belts = false;
    }
    if args.no_moons {
        spec.include_moons = false;
    }
    for (key, value) in &args.overrides {
        spec.overrides
            .set(key, value)
            .with_context(|| format!("cannot apply --set {key}={value}"))?;
    }

    spec.validate().context("invalid specification")?;
    Ok(spec)
}

/// Accept either a bare provenance object or a whole serialized system
fn read_provenance(source: &str) -> anyhow::Result<Provenance> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let record = match value.get("provenance") {
        Some(inner) => inner.clone(),
        None => value,
    };
    if !record.is_object() {
        bail!("expected a JSON object");
    }
    Ok(serde_json::from_value(record)?)
}

fn print_system(system: &StarSystem, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(system)?);
        }
        OutputFormat::Summary => {
            println!("{}", system.summary());
        }
    }
    Ok(())
}
