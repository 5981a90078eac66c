mod generate;

pub use generate::{ClusterConfig, PositionGenerator, SimulationConfig, miles_per_degree};
