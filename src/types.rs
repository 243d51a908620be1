use crate::engines::generation::codec::MAX_MAGNITUDE;
use crate::error::{EvolutionError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fitness function of two variables. Higher is better.
///
/// Any `Fn(f64, f64) -> f64` closure is an evaluator, so callers rarely
/// implement this by hand:
///
/// ```
/// use evo2d::types::Evaluator;
/// let sphere = |x: f64, y: f64| -(x * x + y * y);
/// assert_eq!(sphere.evaluate(0.0, 0.0), 0.0);
/// ```
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Admissible search box. Both limits are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: -5.0,
            x_max: 5.0,
            y_min: -5.0,
            y_max: 5.0,
        }
    }
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Rejects inverted boxes and limits the fixed-point codec cannot hold.
    pub fn validate(&self) -> Result<()> {
        let limits = [self.x_min, self.x_max, self.y_min, self.y_max];
        let representable = limits
            .iter()
            .all(|v| v.is_finite() && v.abs() <= MAX_MAGNITUDE);

        if !representable || self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(EvolutionError::InvalidBounds {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Uniform point inside the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let x = self.x_min + rng.gen::<f64>() * (self.x_max - self.x_min);
        let y = self.y_min + rng.gen::<f64>() * (self.y_max - self.y_min);
        (x, y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x ∈ [{}, {}], y ∈ [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
