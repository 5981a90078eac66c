use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use aprs_position::config::StationConfig;
use aprs_position::encoding::dao;
use aprs_position::geodesy::miles_to_km;
use aprs_position::output::{OutputFormat, create_formatter};
use aprs_position::{DaoMode, Position, Precision, Symbol};

#[derive(Parser, Debug)]
#[command(name = "aprs-position")]
#[command(about = "Encode a position as APRS uncompressed, DAO and compressed reports", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Latitude in decimal degrees (prints sample encodings when omitted)
    latitude: Option<f64>,

    /// Longitude in decimal degrees
    longitude: Option<f64>,

    /// Precision: 0-4 ambiguity, -1/dao or -2/dao91
    #[arg(short = 'a', long)]
    ambiguity: Option<Precision>,

    /// Symbol table and code (e.g., "/o")
    #[arg(short = 's', long)]
    symbol: Option<Symbol>,

    /// Three-character course/speed field for compressed output
    #[arg(long)]
    cst: Option<String>,

    /// Altitude in feet
    #[arg(long)]
    altitude: Option<i32>,

    /// TOML station configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also print distance and bearing from this point ("LAT,LON")
    #[arg(long)]
    from: Option<String>,

    /// Report distances in kilometers
    #[arg(long)]
    km: bool,

    /// Reject out-of-range coordinates instead of encoding them
    #[arg(long)]
    strict: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_point(s: &str) -> Result<(f64, f64)> {
    let (lat, lon) = s.split_once(',').context("Expected LAT,LON")?;
    let lat: f64 = lat.trim().parse().context("Invalid latitude")?;
    let lon: f64 = lon.trim().parse().context("Invalid longitude")?;
    Ok((lat, lon))
}

fn build_config(args: &Args) -> Result<StationConfig> {
    let mut config = match args.config {
        Some(ref path) => StationConfig::load(path).context("Failed to load config file")?,
        None => StationConfig::default(),
    };

    if let Some(precision) = args.ambiguity {
        config.ambiguity = precision.code();
    }
    if let Some(symbol) = args.symbol {
        config.symbol = symbol;
    }
    if let Some(ref cst) = args.cst {
        config.cst = Some(cst.clone());
    }
    config.strict |= args.strict;

    Ok(config)
}

fn print_samples() {
    let mut pos = Position::default();
    pos.set_precision(Precision::Dao(DaoMode::Plaintext));
    pos.set_latitude(34.1255911);
    pos.set_longitude(-84.13697);
    pos.set_symbol(Symbol::new('/', 'o'));

    println!("Latitude: {}", pos.latitude());
    println!("Position: {}", pos);
    println!("DAO: {}", pos.dao());
    println!("Compressed: {}", pos.to_compressed_string());
    println!();

    let samples = [
        ("15°", 15.0),
        ("15°00.04'", 15.0 + 4.0 / 6000.0),
        ("15°00.043'", 15.0 + 4.3 / 6000.0),
        ("-15°00.043'", -15.0 - 4.3 / 6000.0),
        ("-15°00.0499'", -15.0 - 4.99 / 6000.0),
    ];
    for (label, value) in samples {
        println!("dao91({}) = {}", label, dao::radix91_value(value));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (latitude, longitude) = match (args.latitude, args.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => {
            print_samples();
            return Ok(());
        }
        _ => bail!("Both latitude and longitude are required"),
    };

    let config = build_config(&args)?;
    let mut position = config
        .build_position(latitude, longitude)
        .context("Failed to build position")?;
    position.set_altitude(args.altitude);
    log::debug!(
        "Encoding {} with precision {}",
        position.to_decimal_string(),
        position.precision()
    );

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    println!("{}", formatter.format(&position));

    if let Some(ref from) = args.from {
        let (lat, lon) = parse_point(from)?;
        let origin = Position::new(lat, lon);
        let miles = position.distance(&origin);
        let (distance, unit) = if args.km {
            (miles_to_km(miles), "km")
        } else {
            (miles, "mi")
        };
        println!(
            "Distance: {:.2} {}, bearing: {:.1}°",
            distance,
            unit,
            position.direction(&origin)
        );
    }

    Ok(())
}
