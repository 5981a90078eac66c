pub mod config;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod geodesy;
pub mod output;
pub mod position;
pub mod precision;
pub mod symbol;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::StationConfig;
pub use error::{PositionError, Result};
pub use position::Position;
pub use precision::{Ambiguity, DaoMode, Precision};
pub use symbol::{CsTField, Symbol};
