use super::traits::ConfigSection;
use crate::error::EvolutionError;
use crate::types::Bounds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mating_attempts: usize,
    /// Percent chance, per bred child, of one gene mutating.
    pub mutation_rate: f64,
    pub roulette: RouletteMode,
    pub on_degenerate: DegeneratePolicy,
    pub on_no_offspring: OffspringPolicy,
    pub seed: Option<u64>,
    pub bounds: Bounds,
}

/// Range the roulette spin is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouletteMode {
    /// Signed fitness total, while slots are sized by |fitness|.
    Literal,
    /// Sum of the slot sizes.
    Consistent,
}

/// What selection does when the spin range is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    Uniform,
    Fail,
}

/// What a cycle does with a mating that bred no in-bounds child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffspringPolicy {
    Skip,
    /// Add an all-zero, zero-fitness placeholder to the mating pool.
    ZeroSentinel,
}

/// The subset of [`EvolutionConfig`] a single generation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub population_size: usize,
    pub mating_attempts: usize,
    pub mutation_rate: f64,
    pub bounds: Bounds,
    pub roulette: RouletteMode,
    pub on_degenerate: DegeneratePolicy,
    pub on_no_offspring: OffspringPolicy,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            mating_attempts: 20,
            mutation_rate: 5.0,
            roulette: RouletteMode::Literal,
            on_degenerate: DegeneratePolicy::Uniform,
            on_no_offspring: OffspringPolicy::Skip,
            seed: None,
            bounds: Bounds::default(),
        }
    }
}

impl EvolutionConfig {
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            population_size: self.population_size,
            mating_attempts: self.mating_attempts,
            mutation_rate: self.mutation_rate,
            bounds: self.bounds,
            roulette: self.roulette,
            on_degenerate: self.on_degenerate,
            on_no_offspring: self.on_no_offspring,
        }
    }
}

impl GenerationParams {
    pub fn new(population_size: usize, mating_attempts: usize, mutation_rate: f64, bounds: Bounds) -> Self {
        let defaults = EvolutionConfig::default();
        Self {
            population_size,
            mating_attempts,
            mutation_rate,
            bounds,
            roulette: defaults.roulette,
            on_degenerate: defaults.on_degenerate,
            on_no_offspring: defaults.on_no_offspring,
        }
    }

    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.population_size == 0 {
            return Err(EvolutionError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=100.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::InvalidProbability(self.mutation_rate));
        }
        self.bounds.validate()
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), EvolutionError> {
        self.params().validate()
    }
}
