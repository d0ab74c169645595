// =========================================================================
// FALSIFY-ABC: behavioral contract of the bee colony
//
// Each test names one law the colony must never break. A failure message
// starts with "FALSIFIED" and the law's id.
//
// References:
//   - Karaboga & Basturk (2007) "A powerful and efficient algorithm for
//     numerical function optimization: artificial bee colony (ABC) algorithm"
// =========================================================================

use super::*;
use crate::error::AbcError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_colony(seed: u64, config: ColonyConfig) -> (Colony<fn(&[f64]) -> f64>, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let colony = Colony::new(benchmarks::rosenbrock as fn(&[f64]) -> f64, config, &mut rng)
        .expect("valid config");
    (colony, rng)
}

/// FALSIFY-ABC-001: solutions never leave the bounds
#[test]
fn falsify_abc_001_bounds_invariant() {
    let (mut colony, mut rng) = seeded_colony(42, ColonyConfig::new(3, -0.5, 0.5, 12, 100));
    for _ in 0..100 {
        colony.iterate(&mut rng).expect("rosenbrock");
        for source in colony.food_sources() {
            for &x in source.solution() {
                assert!(
                    (-0.5..=0.5).contains(&x),
                    "FALSIFIED ABC-001: coordinate {x} outside [-0.5, 0.5]"
                );
            }
        }
    }
}

/// FALSIFY-ABC-002: onlooker probabilities stay within [0.1, 1.0]
#[test]
fn falsify_abc_002_probability_floor() {
    let (mut colony, mut rng) = seeded_colony(7, ColonyConfig::default());
    for _ in 0..50 {
        colony.iterate(&mut rng).expect("rosenbrock");
        for p in colony.calculate_probabilities() {
            assert!(
                (0.1..=1.0).contains(&p),
                "FALSIFIED ABC-002: probability {p} outside [0.1, 1.0]"
            );
        }
    }
}

/// FALSIFY-ABC-003: a neighbor move never lowers a source's fitness
#[test]
fn falsify_abc_003_monotonic_improvement() {
    let (mut colony, mut rng) = seeded_colony(3, ColonyConfig::new(2, -5.0, 5.0, 10, 1));
    for step in 0..500 {
        let i = step % colony.food_sources().len();
        let before = colony.food_sources()[i].fitness();
        colony.explore_neighbor(i, &mut rng).expect("rosenbrock");
        let after = colony.food_sources()[i].fitness();
        assert!(
            after >= before,
            "FALSIFIED ABC-003: fitness dropped from {before} to {after}"
        );
    }
}

/// FALSIFY-ABC-004: accepted moves reset trials, rejected moves add exactly one
#[test]
fn falsify_abc_004_trial_laws() {
    let (mut colony, mut rng) = seeded_colony(11, ColonyConfig::new(2, -5.0, 5.0, 10, 1));
    for step in 0..500 {
        let i = step % colony.food_sources().len();
        let before = colony.food_sources()[i].clone();
        let improved = colony.explore_neighbor(i, &mut rng).expect("rosenbrock");
        let after = &colony.food_sources()[i];
        if improved {
            assert_eq!(after.trials(), 0, "FALSIFIED ABC-004: accepted move kept trials");
        } else {
            assert_eq!(
                after.trials(),
                before.trials() + 1,
                "FALSIFIED ABC-004: rejected move did not add one trial"
            );
            assert_eq!(
                after.solution(),
                before.solution(),
                "FALSIFIED ABC-004: rejected move changed the solution"
            );
        }
    }
}

/// FALSIFY-ABC-005: the onlooker phase makes exactly np + 1 moves
#[test]
fn falsify_abc_005_onlooker_selection_count() {
    for swarm_size in [4, 5, 10, 31, 60] {
        let (mut colony, mut rng) =
            seeded_colony(5, ColonyConfig::default().with_swarm_size(swarm_size));
        let np = colony.food_sources().len();
        let probabilities = colony.calculate_probabilities();
        let moves = colony
            .onlooker_bee_phase(&probabilities, &mut rng)
            .expect("rosenbrock");
        assert_eq!(
            moves,
            np + 1,
            "FALSIFIED ABC-005: {moves} onlooker moves for np = {np}"
        );
    }
}

/// FALSIFY-ABC-006: the remembered best never gets worse
#[test]
fn falsify_abc_006_best_never_regresses() {
    let (mut colony, mut rng) = seeded_colony(13, ColonyConfig::default());
    let mut previous = f64::NEG_INFINITY;
    for _ in 0..200 {
        let stats = colony.iterate(&mut rng).expect("rosenbrock");
        assert!(
            stats.best_fitness >= previous,
            "FALSIFIED ABC-006: best fitness fell from {previous} to {}",
            stats.best_fitness
        );
        previous = stats.best_fitness;
    }
}

/// FALSIFY-ABC-007: no iterations means no best solution, not a panic
#[test]
fn falsify_abc_007_degenerate_run() {
    let (mut colony, mut rng) =
        seeded_colony(17, ColonyConfig::default().with_max_iterations(0));
    assert!(
        matches!(colony.run(&mut rng), Err(AbcError::BestSolutionUnavailable)),
        "FALSIFIED ABC-007: zero-iteration run produced a best solution"
    );
}

/// FALSIFY-ABC-008: the classic Rosenbrock run converges near (1, 1)
#[test]
fn falsify_abc_008_rosenbrock_convergence() {
    let mut abc = ArtificialBeeColony::new(ColonyConfig::default()).with_seed(2024);
    let result = abc.optimize(benchmarks::rosenbrock).expect("rosenbrock");
    assert!(
        result.objective_value < 1.0,
        "FALSIFIED ABC-008: Rosenbrock objective {} >= 1.0",
        result.objective_value
    );
}
