//! Rosenbrock Optimization Example
//!
//! Minimizes f(x, y) = (1 - x)² + 100(y - x²)² over [-5, 5]² with a colony
//! of 60 bees for 1000 iterations, then dumps the best food source.
//!
//! Run with: `cargo run --example rosenbrock`
//! Set `RUST_LOG=bee_colony=debug` to watch each iteration.

use bee_colony::metaheuristics::{benchmarks, Colony, ColonyConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bee_colony=info")),
        )
        .init();

    println!("=== Artificial Bee Colony: Rosenbrock ===\n");

    let config = ColonyConfig::new(2, -5.0, 5.0, 60, 1000);
    println!(
        "Food sources: {}, trial limit: {}, iterations: {}\n",
        config.food_source_count(),
        config.trial_limit(),
        config.max_iterations
    );

    let mut rng = StdRng::seed_from_u64(42);
    let mut colony = Colony::new(benchmarks::rosenbrock, config, &mut rng)?;
    let result = colony.run(&mut rng)?;

    colony.best_solution()?.dump();

    println!("\nEvaluations: {}", result.evaluations);
    for (i, best) in result.history.iter().enumerate().step_by(100) {
        println!("  iteration {:>4}: best f = {best:.6e}", i + 1);
    }

    Ok(())
}
