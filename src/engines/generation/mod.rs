pub mod codec;
pub mod candidate;
pub mod operators;
pub mod crossover;
pub mod generation;
pub mod evolution_engine;
pub mod progress;

pub use candidate::{Candidate, SharedEvaluator};
pub use codec::Genes;
pub use crossover::{crossover, Recipe, RECIPES};
pub use evolution_engine::{run_generations, EvolutionEngine, ProgressCallback};
pub use generation::{CycleOutcome, Generation};
pub use operators::{mutate, roulette_selection, sort_by_fitness};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage};
