use crate::engines::generation::candidate::Candidate;
use crate::engines::generation::codec::{self, Genes, BLOCK_LEN, GENE_COUNT, X_BLOCK, Y_BLOCK};
use crate::engines::generation::operators::mutate;
use crate::types::Bounds;
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    First,
    Second,
}

/// Where one half of a child's genes comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSource {
    /// Copy a whole five-gene block. `offset` picks the parent's x block or
    /// y block, whichever half of the child is being filled.
    Whole { parent: Parent, offset: usize },
    /// Same half of both parents, odd positions from one and even positions
    /// (including the sign) from the other.
    Interleave { odd: Parent, even: Parent },
}

/// One deterministic rule for assembling a child from two parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub x: BlockSource,
    pub y: BlockSource,
}

use BlockSource::{Interleave, Whole};
use Parent::{First, Second};

const P1_X: BlockSource = Whole { parent: First, offset: X_BLOCK };
const P2_X: BlockSource = Whole { parent: Second, offset: X_BLOCK };
const P1_Y: BlockSource = Whole { parent: First, offset: Y_BLOCK };
const P2_Y: BlockSource = Whole { parent: Second, offset: Y_BLOCK };
const MIX_12: BlockSource = Interleave { odd: First, even: Second };
const MIX_21: BlockSource = Interleave { odd: Second, even: First };

/// Every child a single mating tries, in evaluation order.
pub const RECIPES: [Recipe; 16] = [
    Recipe { x: P1_X, y: P2_Y },
    Recipe { x: P2_X, y: P1_Y },
    Recipe { x: P2_Y, y: P1_X },
    Recipe { x: P1_Y, y: P2_X },
    Recipe { x: MIX_12, y: P2_Y },
    Recipe { x: P2_X, y: MIX_12 },
    Recipe { x: MIX_21, y: P2_Y },
    Recipe { x: P2_X, y: MIX_21 },
    Recipe { x: MIX_12, y: P1_Y },
    Recipe { x: P1_X, y: MIX_12 },
    Recipe { x: MIX_21, y: P1_Y },
    Recipe { x: P1_X, y: MIX_21 },
    Recipe { x: MIX_12, y: MIX_12 },
    Recipe { x: MIX_21, y: MIX_21 },
    Recipe { x: MIX_12, y: MIX_21 },
    Recipe { x: MIX_21, y: MIX_12 },
];

impl Recipe {
    pub fn assemble(&self, parent1: &Genes, parent2: &Genes) -> Genes {
        let mut child = [0i8; GENE_COUNT];
        fill_half(&mut child, X_BLOCK, self.x, parent1, parent2);
        fill_half(&mut child, Y_BLOCK, self.y, parent1, parent2);
        child
    }
}

fn fill_half(child: &mut Genes, target: usize, source: BlockSource, parent1: &Genes, parent2: &Genes) {
    let pick = |parent: Parent| match parent {
        First => parent1,
        Second => parent2,
    };

    match source {
        Whole { parent, offset } => {
            child[target..target + BLOCK_LEN].copy_from_slice(&pick(parent)[offset..offset + BLOCK_LEN]);
        }
        Interleave { odd, even } => {
            for i in 0..BLOCK_LEN {
                let parent = if i % 2 != 0 { odd } else { even };
                child[target + i] = pick(parent)[target + i];
            }
        }
    }
}

/// Breed two parents by trying every recipe and keeping the best child.
///
/// Each recipe's child is mutated once and decoded; children outside `bounds`
/// are dropped without being evaluated. Among the rest the fittest wins, and a
/// later recipe replaces an earlier one on equal fitness.
///
/// Returns `None` when no recipe produced an in-bounds child.
pub fn crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    bounds: &Bounds,
    mutation_rate: f64,
    rng: &mut R,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (n, recipe) in RECIPES.iter().enumerate() {
        let mut genes = recipe.assemble(parent1.genes(), parent2.genes());
        mutate(&mut genes, mutation_rate, rng);

        let (x, y) = codec::decode(&genes);
        if !bounds.contains(x, y) {
            log::trace!("Recipe {} out of bounds at ({}, {})", n + 1, x, y);
            continue;
        }

        let child = Candidate::from_genes(genes, Arc::clone(parent1.evaluator()));
        log::trace!("Recipe {} child fitness {}", n + 1, child.fitness());

        match &best {
            Some(current) if child.fitness() < current.fitness() => {}
            _ => best = Some(child),
        }
    }

    best
}
