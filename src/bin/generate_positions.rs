use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use aprs_position::output::{OutputFormat, PositionRecord, create_formatter};
use aprs_position::simulation::{PositionGenerator, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "generate_positions")]
#[command(about = "Generate random APRS positions in any output encoding")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// TOML simulation configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of positions
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Seed for reproducibility (CLI override)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Precision codes: comma-separated (e.g., "0,3,-1") (CLI override)
    #[arg(short, long)]
    ambiguities: Option<String>,

    /// Scatter around "LAT,LON,SPREAD_MILES" instead of the whole globe (CLI override)
    #[arg(long)]
    cluster: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write a JSON manifest of every generated position
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Manifest {
    seed: Option<u64>,
    count: usize,
    positions: Vec<PositionRecord>,
}

fn parse_codes(s: &str) -> Result<Vec<i32>> {
    s.split(',')
        .map(|p| p.trim().parse::<i32>().context("Invalid precision code"))
        .collect()
}

fn parse_cluster(s: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().context("Invalid cluster value"))
        .collect::<Result<_>>()?;
    match parts.as_slice() {
        &[lat, lon, spread] => Ok((lat, lon, spread)),
        _ => anyhow::bail!("Cluster must be LAT,LON,SPREAD_MILES"),
    }
}

fn load_toml_config(path: &PathBuf) -> Result<SimulationConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    toml::from_str(&content).context("Failed to parse config file")
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match args.config {
        Some(ref path) => load_toml_config(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ref codes) = args.ambiguities {
        config = config.with_ambiguities(&parse_codes(codes)?);
    }
    if let Some(ref cluster) = args.cluster {
        let (lat, lon, spread) = parse_cluster(cluster)?;
        config = config.with_cluster(lat, lon, spread);
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let generator = PositionGenerator::new(&config).context("Invalid simulation config")?;

    let formatter = create_formatter(args.format, false);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }

    let mut records = Vec::new();
    for position in generator.take(args.count) {
        println!("{}", formatter.format(&position));
        if args.manifest.is_some() {
            records.push(PositionRecord::from(&position));
        }
    }

    if let Some(ref manifest_path) = args.manifest {
        let manifest = Manifest {
            seed: config.seed,
            count: args.count,
            positions: records,
        };
        let manifest_json =
            serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
        fs::write(manifest_path, manifest_json).context("Failed to write manifest")?;
        eprintln!("Manifest written to: {}", manifest_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(parse_codes("0,3,-1").unwrap(), vec![0, 3, -1]);
        assert!(parse_codes("0,x").is_err());
    }

    #[test]
    fn test_parse_cluster() {
        assert_eq!(parse_cluster("34,-84,2.5").unwrap(), (34.0, -84.0, 2.5));
        assert!(parse_cluster("34,-84").is_err());
    }
}
