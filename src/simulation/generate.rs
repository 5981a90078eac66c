use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::EARTH_RADIUS_MILES;
use crate::error::{PositionError, Result};
use crate::position::Position;
use crate::precision::Precision;
use crate::symbol::Symbol;

/// Random position generation settings.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: Option<u64>,
    /// Precision codes to draw from; empty means full precision only
    pub ambiguities: Vec<i32>,
    pub symbol: Symbol,
    /// Scatter around a point instead of the whole globe
    pub cluster: Option<ClusterConfig>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ClusterConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Standard deviation of the scatter in statute miles
    pub spread_miles: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ambiguities: vec![0],
            symbol: Symbol::default(),
            cluster: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_ambiguities(mut self, codes: &[i32]) -> Self {
        self.ambiguities = codes.to_vec();
        self
    }

    pub fn with_cluster(mut self, latitude: f64, longitude: f64, spread_miles: f64) -> Self {
        self.cluster = Some(ClusterConfig {
            latitude,
            longitude,
            spread_miles,
        });
        self
    }
}

/// Length of one degree of great-circle arc in statute miles.
pub fn miles_per_degree() -> f64 {
    EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0
}

struct Cluster {
    latitude: f64,
    longitude: f64,
    scatter: Normal<f64>,
}

/// Endless stream of reproducible random positions.
///
/// # Example
/// ```
/// use aprs_position::simulation::{PositionGenerator, SimulationConfig};
///
/// let config = SimulationConfig::default().with_seed(7);
/// let positions: Vec<_> = PositionGenerator::new(&config).unwrap().take(3).collect();
/// assert!(positions.iter().all(|p| p.validate().is_ok()));
/// ```
pub struct PositionGenerator {
    rng: ChaCha8Rng,
    precisions: Vec<Precision>,
    symbol: Symbol,
    cluster: Option<Cluster>,
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

impl PositionGenerator {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let mut precisions = config
            .ambiguities
            .iter()
            .map(|&code| Precision::try_from(code))
            .collect::<Result<Vec<_>>>()?;
        if precisions.is_empty() {
            precisions.push(Precision::FULL);
        }

        let cluster = match config.cluster {
            Some(ref c) => {
                let sigma = c.spread_miles / miles_per_degree();
                let scatter = Normal::new(0.0, sigma)
                    .map_err(|e| PositionError::Config(format!("cluster spread: {}", e)))?;
                Some(Cluster {
                    latitude: c.latitude,
                    longitude: c.longitude,
                    scatter,
                })
            }
            None => None,
        };

        Ok(Self {
            rng: create_rng(config.seed),
            precisions,
            symbol: config.symbol,
            cluster,
        })
    }

    pub fn next_position(&mut self) -> Position {
        let (latitude, longitude) = match self.cluster {
            Some(ref cluster) => {
                let lat = cluster.latitude + cluster.scatter.sample(&mut self.rng);
                let lon = cluster.longitude + cluster.scatter.sample(&mut self.rng);
                (lat.clamp(-90.0, 90.0), wrap_longitude(lon))
            }
            None => (
                self.rng.random::<f64>() * 180.0 - 90.0,
                self.rng.random::<f64>() * 360.0 - 180.0,
            ),
        };

        let index = self.rng.random_range(0..self.precisions.len());
        Position::with_symbol(latitude, longitude, self.precisions[index], self.symbol)
    }
}

impl Iterator for PositionGenerator {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        Some(self.next_position())
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 { 180.0 } else { wrapped }
}
