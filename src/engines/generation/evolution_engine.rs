use crate::config::evolution::{EvolutionConfig, GenerationParams};
use crate::config::traits::ConfigSection;
use crate::engines::generation::candidate::SharedEvaluator;
use crate::engines::generation::generation::{CycleOutcome, Generation};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, outcome: &CycleOutcome);
}

/// Seed a generation and run `count` replacement cycles on it, one after
/// another.
pub fn run_generations<R: Rng>(
    count: usize,
    params: GenerationParams,
    evaluator: SharedEvaluator,
    rng: &mut R,
) -> Result<Generation> {
    let mut generation = Generation::new(params, evaluator, rng)?;
    for _ in 0..count {
        generation.regenerate(rng)?;
    }
    Ok(generation)
}

/// Owns the run's random generator so a seeded config replays exactly.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback>(&mut self, evaluator: SharedEvaluator, mut callback: C) -> Result<Generation> {
        let mut generation = Generation::new(self.config.params(), evaluator, &mut self.rng)?;
        log::info!(
            "Initial population of {}, best fitness {:.6}",
            generation.len(),
            generation.best_candidate().fitness()
        );

        for index in 0..self.config.generations {
            callback.on_generation_start(index);

            let outcome = generation.regenerate(&mut self.rng)?;

            callback.on_generation_complete(index, generation.best_candidate().fitness(), &outcome);
        }

        Ok(generation)
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}
