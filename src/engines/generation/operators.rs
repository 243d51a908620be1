use crate::config::evolution::{DegeneratePolicy, RouletteMode};
use crate::engines::generation::candidate::Candidate;
use crate::engines::generation::codec::{is_sign_position, Genes, GENE_COUNT};
use crate::error::{EvolutionError, Result};
use rand::Rng;

/// Descending insertion sort by fitness.
///
/// Neighbours only swap when the earlier one is strictly worse, so candidates
/// with equal fitness keep their relative order.
pub fn sort_by_fitness(population: &mut [Candidate]) {
    for i in 1..population.len() {
        let mut j = i;
        while j > 0 && population[j - 1].fitness() < population[j].fitness() {
            population.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Roulette wheel selection: probability proportional to |fitness|
///
/// Slot boundaries are the running sum of absolute fitness. What range the
/// spin is drawn from depends on `mode`:
/// - `Literal`: the signed fitness total. With mixed signs the spin never
///   reaches the tail of the wheel, which biases toward the front.
/// - `Consistent`: the wheel's own total, so every slot is reachable.
///
/// A range that is zero, negative or NaN cannot be spun; `on_degenerate`
/// decides between a uniform pick and an error.
pub fn roulette_selection<'a, R: Rng>(
    population: &'a [Candidate],
    mode: RouletteMode,
    on_degenerate: DegeneratePolicy,
    rng: &mut R,
) -> Result<&'a Candidate> {
    if population.is_empty() {
        return Err(EvolutionError::InvalidPopulationSize(0));
    }

    let mut wheel = Vec::with_capacity(population.len());
    let mut cumulative = 0.0;
    let mut signed_total = 0.0;
    for candidate in population {
        cumulative += candidate.fitness().abs();
        wheel.push(cumulative);
        signed_total += candidate.fitness();
    }

    let range = match mode {
        RouletteMode::Literal => signed_total,
        RouletteMode::Consistent => cumulative,
    };

    if !(range > 0.0) {
        return match on_degenerate {
            DegeneratePolicy::Uniform => {
                log::warn!("Roulette range {} is not positive, picking uniformly", range);
                Ok(&population[rng.gen_range(0..population.len())])
            }
            DegeneratePolicy::Fail => Err(EvolutionError::DegenerateSelection { total: range }),
        };
    }

    let spin = rng.gen::<f64>() * range;
    let index = wheel
        .iter()
        .position(|&slot| slot >= spin)
        // Rounding can leave the spin a hair past the last slot
        .unwrap_or(population.len() - 1);

    Ok(&population[index])
}

/// Mutation: with probability `mutation_rate` percent, change one gene
///
/// A sign gene flips between -1 and +1; a magnitude gene is redrawn from 0-9.
/// Returns the index of the changed gene, if any. Callers must decode again
/// afterwards for the change to reach x/y.
pub fn mutate<R: Rng>(genes: &mut Genes, mutation_rate: f64, rng: &mut R) -> Option<usize> {
    let roll = rng.gen::<f64>() * 100.0;
    if roll > mutation_rate {
        return None;
    }

    let index = rng.gen_range(0..GENE_COUNT);
    if is_sign_position(index) {
        genes[index] = if genes[index] == 1 { -1 } else { 1 };
    } else {
        genes[index] = rng.gen_range(0..10);
    }
    Some(index)
}
