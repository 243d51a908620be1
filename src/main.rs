use anyhow::{bail, Context, Result};
use evo2d::config::ConfigManager;
use evo2d::engines::generation::{EvolutionEngine, LogProgressCallback, SharedEvaluator};
use std::env;
use std::f64::consts::PI;
use std::sync::Arc;

/// Built-in objectives, negated where needed so the optimum is a maximum.
fn objective(name: &str) -> Result<SharedEvaluator> {
    let evaluator: SharedEvaluator = match name {
        "sphere" => Arc::new(|x: f64, y: f64| -(x * x + y * y)),
        "rastrigin" => Arc::new(|x: f64, y: f64| {
            let term = |v: f64| v * v - 10.0 * (2.0 * PI * v).cos();
            -(20.0 + term(x) + term(y))
        }),
        "himmelblau" => Arc::new(|x: f64, y: f64| {
            -((x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2))
        }),
        other => bail!("Unknown objective '{}' (expected sphere, rastrigin or himmelblau)", other),
    };
    Ok(evaluator)
}

fn main() -> Result<()> {
    env_logger::init();

    // Usage: evo2d [CONFIG.toml] [OBJECTIVE]
    // EVO2D__EVOLUTION__* variables override the file, or the defaults without one.
    let args: Vec<String> = env::args().collect();
    let manager = ConfigManager::new();
    match args.get(1) {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("loading {}", path))?,
        None => manager.load_from_env().context("loading environment overrides")?,
    }
    let objective_name = args.get(2).map(|s| s.as_str()).unwrap_or("sphere");
    let evaluator = objective(objective_name)?;

    let config = manager.get().evolution;
    log::info!(
        "Running {} generations of {} on '{}' within {}",
        config.generations,
        config.population_size,
        objective_name,
        config.bounds
    );

    let callback = LogProgressCallback {
        total_generations: config.generations,
    };
    let mut engine = EvolutionEngine::new(config)?;
    let generation = engine.run(evaluator, callback)?;

    println!("{}", generation);
    Ok(())
}
