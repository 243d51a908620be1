use crate::engines::generation::codec::{self, Genes, GENE_COUNT};
use crate::types::Evaluator;
use std::fmt;
use std::sync::Arc;

/// Shared handle to the caller's fitness function.
pub type SharedEvaluator = Arc<dyn Evaluator>;

/// One encoded solution point and its fitness.
///
/// `x` and `y` are always the decoded values of `genes`, and `fitness` is the
/// evaluator applied to them. The evaluator is shared with every other
/// candidate of the run and never owned by any one of them.
#[derive(Clone)]
pub struct Candidate {
    genes: Genes,
    x: f64,
    y: f64,
    fitness: f64,
    evaluator: SharedEvaluator,
}

impl Candidate {
    /// Encode `(x, y)` and evaluate the decoded point.
    ///
    /// The stored coordinates are the truncated values the genes actually
    /// represent, not the raw inputs. Values outside [-9.999, 9.999] wrap to
    /// their four lowest digits: `x = 12.5` is stored as 2.5.
    pub fn new(x: f64, y: f64, evaluator: SharedEvaluator) -> Self {
        Self::from_genes(codec::encode(x, y), evaluator)
    }

    pub fn from_genes(genes: Genes, evaluator: SharedEvaluator) -> Self {
        let (x, y) = codec::decode(&genes);
        let fitness = evaluator.evaluate(x, y);
        Self {
            genes,
            x,
            y,
            fitness,
            evaluator,
        }
    }

    /// All-zero, zero-fitness stand-in for a crossover that bred nothing.
    /// Never evaluated.
    pub fn placeholder(evaluator: SharedEvaluator) -> Self {
        Self {
            genes: [0; GENE_COUNT],
            x: 0.0,
            y: 0.0,
            fitness: 0.0,
            evaluator,
        }
    }

    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn evaluator(&self) -> &SharedEvaluator {
        &self.evaluator
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("genes", &self.genes)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("fitness", &self.fitness)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "[{}]", gene)?;
        }
        writeln!(f)?;
        writeln!(f, "x : {}", self.x)?;
        writeln!(f, "y : {}", self.y)?;
        write!(f, "fitness value : {}", self.fitness)
    }
}
