use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Invalid population size: {0} (must be at least 1)")]
    InvalidPopulationSize(usize),

    #[error("Invalid bounds: x in [{x_min}, {x_max}], y in [{y_min}, {y_max}]")]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("Invalid probability: {0} (must be a percentage in [0, 100])")]
    InvalidProbability(f64),

    #[error("Degenerate selection: roulette wheel range is {total}")]
    DegenerateSelection { total: f64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvolutionError>;
