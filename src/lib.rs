//! Generational genetic algorithm for maximising a real function of two
//! variables inside a search box.
//!
//! ```
//! use evo2d::config::GenerationParams;
//! use evo2d::engines::generation::run_generations;
//! use evo2d::types::Bounds;
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let params = GenerationParams::new(20, 20, 5.0, Bounds::default());
//! let generation = run_generations(10, params, Arc::new(|x: f64, y: f64| 50.0 - (x * x + y * y)), &mut rng)?;
//! assert_eq!(generation.len(), 20);
//! # Ok::<(), evo2d::error::EvolutionError>(())
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod types;
