use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid position ambiguity code: {0} (expected -2..=4)")]
    InvalidAmbiguity(i32),

    #[error("Invalid symbol: {0:?} (expected table and code characters)")]
    InvalidSymbol(String),

    #[error("Invalid course/speed field: {0:?} (expected 3 characters)")]
    InvalidCsTField(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PositionError>;
