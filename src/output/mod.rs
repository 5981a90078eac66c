mod compressed;
mod csv;
mod decimal;
mod json;
mod text;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::position::Position;

pub use self::compressed::CompressedFormatter;
pub use self::csv::CsvFormatter;
pub use self::decimal::DecimalFormatter;
pub use self::json::{JsonFormatter, PositionRecord};
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Compressed,
    Decimal,
    Json,
    Csv,
}

pub trait Formatter: Send {
    fn format(&self, position: &Position) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Compressed => Box::new(CompressedFormatter),
        OutputFormat::Decimal => Box::new(DecimalFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
