use crate::config::evolution::{GenerationParams, OffspringPolicy};
use crate::engines::generation::candidate::{Candidate, SharedEvaluator};
use crate::engines::generation::crossover::crossover;
use crate::engines::generation::operators::{roulette_selection, sort_by_fitness};
use crate::error::Result;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// What one replacement cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleOutcome {
    /// Matings that produced an in-bounds child.
    pub offspring: usize,
    /// Matings where every recipe fell outside the bounds.
    pub barren: usize,
}

/// A fixed-size population kept sorted by descending fitness.
///
/// [`Generation::regenerate`] takes `&mut self` and only swaps in the new
/// population once the whole cycle has succeeded, so the population is never
/// observed unsorted or over-sized, and a failed cycle leaves it untouched.
pub struct Generation {
    population: Vec<Candidate>,
    params: GenerationParams,
    evaluator: SharedEvaluator,
}

impl Generation {
    /// Seed a random population inside the bounds.
    pub fn new<R: Rng>(params: GenerationParams, evaluator: SharedEvaluator, rng: &mut R) -> Result<Self> {
        params.validate()?;

        let population = (0..params.population_size)
            .map(|_| {
                let (x, y) = params.bounds.sample(rng);
                Candidate::new(x, y, Arc::clone(&evaluator))
            })
            .collect();

        Self::with_population(population, params, evaluator)
    }

    /// Start from caller-provided candidates. `params.population_size` is
    /// taken from the number of candidates.
    pub fn with_population(
        mut population: Vec<Candidate>,
        mut params: GenerationParams,
        evaluator: SharedEvaluator,
    ) -> Result<Self> {
        params.population_size = population.len();
        params.validate()?;

        sort_by_fitness(&mut population);
        let generation = Self {
            population,
            params,
            evaluator,
        };
        log::debug!(
            "Seeded population of {}, best fitness {}",
            generation.population.len(),
            generation.best_candidate().fitness()
        );
        Ok(generation)
    }

    /// One replacement cycle: breed `mating_attempts` children into the
    /// mating pool, sort it, and keep the top `population_size`.
    ///
    /// Parents are drawn from the pool as it grows, so children bred earlier
    /// in the cycle can become parents later in it.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) -> Result<CycleOutcome> {
        let params = self.params;
        let mut mating_pool = self.population.clone();
        mating_pool.reserve(params.mating_attempts);
        let mut outcome = CycleOutcome::default();

        for attempt in 0..params.mating_attempts {
            let child = {
                let parent1 = roulette_selection(&mating_pool, params.roulette, params.on_degenerate, rng)?;
                let parent2 = roulette_selection(&mating_pool, params.roulette, params.on_degenerate, rng)?;
                crossover(parent1, parent2, &params.bounds, params.mutation_rate, rng)
            };

            match child {
                Some(child) => {
                    log::debug!(
                        "Mating {}: child ({}, {}) fitness {}",
                        attempt + 1,
                        child.x(),
                        child.y(),
                        child.fitness()
                    );
                    outcome.offspring += 1;
                    mating_pool.push(child);
                }
                None => {
                    outcome.barren += 1;
                    match params.on_no_offspring {
                        OffspringPolicy::Skip => {
                            log::debug!("Mating {}: no in-bounds child, skipped", attempt + 1);
                        }
                        OffspringPolicy::ZeroSentinel => {
                            log::debug!("Mating {}: no in-bounds child, adding placeholder", attempt + 1);
                            mating_pool.push(Candidate::placeholder(Arc::clone(&self.evaluator)));
                        }
                    }
                }
            }
        }

        if outcome.barren > 0 {
            log::warn!(
                "{} of {} matings bred no in-bounds child",
                outcome.barren,
                params.mating_attempts
            );
        }

        sort_by_fitness(&mut mating_pool);
        mating_pool.truncate(params.population_size);
        self.population = mating_pool;

        Ok(outcome)
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Fittest candidate; the population is never empty.
    pub fn best_candidate(&self) -> &Candidate {
        &self.population[0]
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, candidate) in self.population.iter().enumerate() {
            writeln!(f, "------ {} ------", i + 1)?;
            writeln!(f, "{}", candidate)?;
            writeln!(f, "------------------")?;
        }
        writeln!(f, "Best Chromosome :")?;
        write!(f, "{}", self.best_candidate())
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("population", &self.population)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::evolution::{DegeneratePolicy, RouletteMode};
    use crate::error::EvolutionError;
    use crate::types::Bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sphere() -> SharedEvaluator {
        Arc::new(|x: f64, y: f64| -(x * x + y * y))
    }

    fn params(population_size: usize, mating_attempts: usize) -> GenerationParams {
        GenerationParams::new(population_size, mating_attempts, 5.0, Bounds::default())
    }

    fn snapshot(generation: &Generation) -> Vec<(f64, f64, f64)> {
        generation
            .population()
            .iter()
            .map(|c| (c.x(), c.y(), c.fitness()))
            .collect()
    }

    fn is_sorted(generation: &Generation) -> bool {
        generation
            .population()
            .windows(2)
            .all(|w| w[0].fitness() >= w[1].fitness())
    }

    #[test]
    fn test_new_generation_is_sorted_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let generation = Generation::new(params(30, 10), sphere(), &mut rng).unwrap();

        assert_eq!(generation.len(), 30);
        assert!(is_sorted(&generation));
        assert!(std::ptr::eq(generation.best_candidate(), &generation.population()[0]));
        for c in generation.population() {
            assert!(Bounds::default().contains(c.x(), c.y()));
        }
    }

    #[test]
    fn test_new_generation_validates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Generation::new(params(0, 10), sphere(), &mut rng),
            Err(EvolutionError::InvalidPopulationSize(0))
        ));

        let mut bad_rate = params(5, 5);
        bad_rate.mutation_rate = -1.0;
        assert!(matches!(
            Generation::new(bad_rate, sphere(), &mut rng),
            Err(EvolutionError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_regenerate_keeps_size_and_never_loses_best() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut generation = Generation::new(params(20, 35), sphere(), &mut rng).unwrap();

        for _ in 0..25 {
            let before = generation.best_candidate().fitness();
            generation.regenerate(&mut rng).unwrap();
            assert_eq!(generation.len(), 20);
            assert!(is_sorted(&generation));
            assert!(generation.best_candidate().fitness() >= before);
        }
    }

    #[test]
    fn test_fewer_matings_than_population() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut generation = Generation::new(params(10, 2), sphere(), &mut rng).unwrap();
        let outcome = generation.regenerate(&mut rng).unwrap();
        assert_eq!(outcome.offspring + outcome.barren, 2);
        assert_eq!(generation.len(), 10);
    }

    #[test]
    fn test_single_candidate_population() {
        let mut rng = StdRng::seed_from_u64(4);
        let positive: SharedEvaluator = Arc::new(|x: f64, y: f64| 100.0 - (x * x + y * y));
        let mut generation = Generation::new(params(1, 5), positive, &mut rng).unwrap();

        for _ in 0..10 {
            generation.regenerate(&mut rng).unwrap();
            assert_eq!(generation.len(), 1);
        }
    }

    /// Bounds that exclude zero: truncation pulls every encoded value to 1.0,
    /// just below the box, so no crossover child is ever in bounds.
    fn unreachable_box() -> GenerationParams {
        GenerationParams::new(4, 6, 0.0, Bounds::new(1.0005, 1.0009, 1.0005, 1.0009))
    }

    #[test]
    fn test_barren_matings_are_skipped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut generation = Generation::new(unreachable_box(), sphere(), &mut rng).unwrap();
        let before = snapshot(&generation);

        let outcome = generation.regenerate(&mut rng).unwrap();
        assert_eq!(outcome, CycleOutcome { offspring: 0, barren: 6 });
        let after = snapshot(&generation);
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_sentinel_policy_injects_placeholders() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut params = unreachable_box();
        params.on_no_offspring = OffspringPolicy::ZeroSentinel;
        let mut generation = Generation::new(params, sphere(), &mut rng).unwrap();
        assert!(generation.best_candidate().fitness() < 0.0);

        generation.regenerate(&mut rng).unwrap();
        // The placeholder outranks every real, negative-fitness candidate
        assert_eq!(generation.best_candidate().fitness(), 0.0);
        assert_eq!(generation.best_candidate().genes(), &[0; 10]);
        assert_eq!(generation.len(), 4);
    }

    #[test]
    fn test_failed_cycle_leaves_population_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut params = params(6, 4);
        params.roulette = RouletteMode::Literal;
        params.on_degenerate = DegeneratePolicy::Fail;
        let mut generation = Generation::new(params, sphere(), &mut rng).unwrap();
        let before = snapshot(&generation);

        let result = generation.regenerate(&mut rng);
        assert!(matches!(result, Err(EvolutionError::DegenerateSelection { .. })));
        let after = snapshot(&generation);
        assert_eq!(before, after);
    }

    #[test]
    fn test_with_population_sorts_seed() {
        let evaluator = sphere();
        let seed = vec![
            Candidate::new(3.0, 0.0, Arc::clone(&evaluator)),
            Candidate::new(0.5, 0.0, Arc::clone(&evaluator)),
            Candidate::new(-2.0, 1.0, Arc::clone(&evaluator)),
        ];
        let generation = Generation::with_population(seed, params(99, 3), evaluator).unwrap();
        assert_eq!(generation.params().population_size, 3);
        assert_eq!(generation.best_candidate().x(), 0.5);

        assert!(Generation::with_population(Vec::new(), params(3, 3), sphere()).is_err());
    }

    #[test]
    fn test_display_ends_with_best() {
        let mut rng = StdRng::seed_from_u64(8);
        let generation = Generation::new(params(2, 1), sphere(), &mut rng).unwrap();
        let shown = generation.to_string();
        assert!(shown.starts_with("------ 1 ------"));
        assert!(shown.contains("------ 2 ------"));
        assert!(shown.contains("Best Chromosome :"));
    }
}
