pub mod traits;
pub mod evolution;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::{DegeneratePolicy, EvolutionConfig, GenerationParams, OffspringPolicy, RouletteMode};
