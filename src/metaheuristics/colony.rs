//! Artificial Bee Colony iteration engine.
//!
//! # Algorithm
//!
//! ```text
//! np = floor(swarm_size / 2) food sources, trial_limit = np · dim
//! repeat max_iterations times:
//!   1. Employed bees: one neighbor move per food source
//!   2. pᵢ = 0.9 · fitᵢ / max(fit) + 0.1
//!   3. Onlooker bees: cycle over sources, move source i when u < pᵢ,
//!      until np + 1 moves were made
//!   4. Scout bee: remember the best source, restart the most stagnant
//!      source whose trials exceed trial_limit
//! ```
//!
//! A neighbor move on source i picks a partner k ≠ i and a dimension d:
//!
//! ```text
//! vᵢd = xᵢd + φ·(xᵢd − xkd),  φ ~ U[-1, 1],  clamped to the bounds
//! ```
//!
//! and keeps `v` only if its fitness is strictly better.
//!
//! # References
//!
//! - Karaboga (2005): "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization", Technical Report TR06, Erciyes University
//! - Karaboga & Basturk (2007): "A powerful and efficient algorithm for
//!   numerical function optimization: artificial bee colony (ABC) algorithm"

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use super::fitness::fitness_transform;
use super::objective::{self, Objective};
use super::traits::{IterationStats, OptimizationResult, TerminationReason};
use super::{ColonyConfig, FoodSource, SearchSpace};
use crate::error::{AbcError, Result};

/// Weight of the relative fitness in the onlooker selection probability.
const SELECTION_WEIGHT: f64 = 0.9;
/// Selection probability every food source gets regardless of fitness.
const SELECTION_FLOOR: f64 = 0.1;

/// A population of food sources and the state of an ABC run.
///
/// All randomness is drawn from the RNG handed to each call, so a seeded
/// RNG makes the whole run reproducible.
///
/// # Example
///
/// ```
/// use bee_colony::metaheuristics::{benchmarks, Colony, ColonyConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let config = ColonyConfig::default().with_max_iterations(200);
/// let mut colony = Colony::new(benchmarks::sphere, config, &mut rng).unwrap();
/// let result = colony.run(&mut rng).unwrap();
/// assert!(result.objective_value < 1e-3);
/// ```
pub struct Colony<O> {
    objective: O,
    config: ColonyConfig,
    space: SearchSpace,
    food_sources: Vec<FoodSource>,
    trial_limit: usize,
    best_solution: Option<FoodSource>,
    evaluations: usize,
    iterations: usize,
    history: Vec<f64>,
    onlooker_limit_hit: bool,
}

impl<O: Objective> Colony<O> {
    /// Validate `config` and initialize `floor(swarm_size / 2)` random food
    /// sources.
    #[instrument(
        level = "debug",
        skip_all,
        fields(solution_size = config.solution_size, swarm_size = config.swarm_size)
    )]
    pub fn new<R: Rng + ?Sized>(objective: O, config: ColonyConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let space = config.search_space();
        let np = config.food_source_count();

        let mut food_sources = Vec::with_capacity(np);
        for _ in 0..np {
            food_sources.push(FoodSource::random(&space, &objective, rng)?);
        }

        debug!(
            np,
            trial_limit = config.trial_limit(),
            lower = space.lower(),
            upper = space.upper(),
            "colony initialized"
        );

        Ok(Self {
            objective,
            trial_limit: config.trial_limit(),
            space,
            food_sources,
            best_solution: None,
            evaluations: np,
            iterations: 0,
            history: Vec::new(),
            onlooker_limit_hit: false,
            config,
        })
    }

    /// Run `max_iterations` iterations and report the best solution.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<OptimizationResult> {
        self.run_until(rng, |_| false)
    }

    /// Like [`Colony::run`], but calls `stop` after every iteration and ends
    /// the run early when it returns `true`.
    #[instrument(level = "debug", skip_all, fields(max_iterations = self.config.max_iterations))]
    pub fn run_until<R, S>(&mut self, rng: &mut R, mut stop: S) -> Result<OptimizationResult>
    where
        R: Rng + ?Sized,
        S: FnMut(&IterationStats) -> bool,
    {
        let mut cancelled = false;
        for _ in 0..self.config.max_iterations {
            let stats = self.iterate(rng)?;
            if stop(&stats) {
                debug!(iteration = stats.iteration, "run cancelled");
                cancelled = true;
                break;
            }
        }

        let best = self.best_solution()?;
        info!(
            objective_value = best.objective_value(),
            fitness = best.fitness(),
            iterations = self.iterations,
            evaluations = self.evaluations,
            "colony run finished"
        );

        let termination = if cancelled {
            TerminationReason::Cancelled
        } else if self.onlooker_limit_hit {
            TerminationReason::OnlookerCycleLimit
        } else {
            TerminationReason::MaxIterations
        };

        Ok(OptimizationResult {
            solution: best.solution_copy(),
            objective_value: best.objective_value(),
            fitness: best.fitness(),
            evaluations: self.evaluations,
            iterations: self.iterations,
            history: self.history.clone(),
            termination,
        })
    }

    /// One full iteration: employed, onlooker and scout phases.
    pub fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<IterationStats> {
        self.employed_bee_phase(rng)?;
        let probabilities = self.calculate_probabilities();
        self.onlooker_bee_phase(&probabilities, rng)?;
        let scouted = self.scout_bee_phase(rng)?;
        self.iterations += 1;

        let best = self.best_solution()?;
        let stats = IterationStats {
            iteration: self.iterations,
            best_objective: best.objective_value(),
            best_fitness: best.fitness(),
            evaluations: self.evaluations,
            scouted,
        };
        self.history.push(stats.best_objective);

        debug!(
            iteration = stats.iteration,
            best_objective = stats.best_objective,
            "iteration complete"
        );
        Ok(stats)
    }

    /// Employed bees: one neighbor move per food source, in index order.
    pub fn employed_bee_phase<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        for i in 0..self.food_sources.len() {
            self.explore_neighbor(i, rng)?;
        }
        Ok(())
    }

    /// Onlooker selection probabilities for the current fitness values.
    ///
    /// Each value lies in `[0.1, 1.0]` and the fittest source gets `1.0`.
    #[must_use]
    pub fn calculate_probabilities(&self) -> Vec<f64> {
        let max_fitness = self
            .food_sources
            .iter()
            .map(FoodSource::fitness)
            .fold(f64::NEG_INFINITY, f64::max);

        self.food_sources
            .iter()
            .map(|source| {
                let fitness = source.fitness();
                // inf/inf and 0/0 would yield NaN and starve every onlooker
                let ratio = if max_fitness.is_infinite() {
                    if fitness.is_infinite() {
                        1.0
                    } else {
                        0.0
                    }
                } else if max_fitness > 0.0 {
                    fitness / max_fitness
                } else {
                    1.0
                };
                SELECTION_WEIGHT * ratio + SELECTION_FLOOR
            })
            .collect()
    }

    /// Onlooker bees: Bernoulli selection over the sources in cyclic order
    /// until more than `np` neighbor moves were made.
    ///
    /// Returns the number of moves performed, `np + 1` unless the configured
    /// cycle bound stopped the phase early.
    ///
    /// # Panics
    ///
    /// Panics if `probabilities` is shorter than the population.
    pub fn onlooker_bee_phase<R: Rng + ?Sized>(
        &mut self,
        probabilities: &[f64],
        rng: &mut R,
    ) -> Result<usize> {
        let np = self.food_sources.len();
        let mut selections = 0;
        let mut cycles = 0;
        let mut i = 0;

        while selections <= np {
            if rng.random::<f64>() < probabilities[i] {
                self.explore_neighbor(i, rng)?;
                selections += 1;
            }

            i += 1;
            if i == np {
                i = 0;
                cycles += 1;
                if let Some(limit) = self.config.onlooker_cycle_limit {
                    if cycles >= limit && selections <= np {
                        warn!(cycles, selections, "onlooker phase hit its cycle bound");
                        self.onlooker_limit_hit = true;
                        break;
                    }
                }
            }
        }

        Ok(selections)
    }

    /// Scout bee: update the remembered best and restart the most stagnant
    /// food source whose trials exceed the trial limit.
    ///
    /// Returns the index of the restarted source, if any.
    pub fn scout_bee_phase<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<usize>> {
        let mut best_idx = 0;
        for (i, source) in self.food_sources.iter().enumerate().skip(1) {
            if source.fitness() > self.food_sources[best_idx].fitness() {
                best_idx = i;
            }
        }

        let iteration_best = &self.food_sources[best_idx];
        let improved = self
            .best_solution
            .as_ref()
            .map_or(true, |best| iteration_best.fitness() > best.fitness());
        if improved {
            self.best_solution = Some(iteration_best.clone());
        }

        let Some(max_trials) = self
            .food_sources
            .iter()
            .map(FoodSource::trials)
            .filter(|&trials| trials > self.trial_limit)
            .max()
        else {
            return Ok(None);
        };

        let stagnant: Vec<usize> = self
            .food_sources
            .iter()
            .enumerate()
            .filter(|(_, source)| source.trials() == max_trials)
            .map(|(i, _)| i)
            .collect();
        let Some(&idx) = stagnant.choose(rng) else {
            return Ok(None);
        };

        let solution = self.space.sample(rng);
        let objective_value = self.evaluate(&solution)?;
        debug!(
            index = idx,
            trials = max_trials,
            objective_value,
            "scout restarted food source"
        );
        self.food_sources[idx].update_solution(
            solution,
            objective_value,
            fitness_transform(objective_value),
        );

        Ok(Some(idx))
    }

    /// Greedy single-coordinate move on source `i` toward or away from a
    /// random partner. Returns whether the source improved.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn explore_neighbor<R: Rng + ?Sized>(&mut self, i: usize, rng: &mut R) -> Result<bool> {
        let np = self.food_sources.len();

        // uniform over every index except i
        let mut partner = rng.random_range(0..np - 1);
        if partner >= i {
            partner += 1;
        }
        let d = rng.random_range(0..self.space.dimension());
        let phi: f64 = rng.random_range(-1.0..=1.0);

        let mut candidate = self.food_sources[i].solution_copy();
        let partner_value = self.food_sources[partner].solution()[d];
        candidate[d] = self.space.clamp(candidate[d] + phi * (candidate[d] - partner_value));

        let objective_value = self.evaluate(&candidate)?;
        let fitness_value = fitness_transform(objective_value);

        let source = &mut self.food_sources[i];
        if fitness_value > source.fitness() {
            source.update_solution(candidate, objective_value, fitness_value);
            Ok(true)
        } else {
            source.record_failed_trial();
            Ok(false)
        }
    }

    /// Best food source seen at the end of any scout phase so far.
    pub fn best_solution(&self) -> Result<&FoodSource> {
        self.best_solution
            .as_ref()
            .ok_or(AbcError::BestSolutionUnavailable)
    }

    /// Current food sources in index order.
    #[must_use]
    pub fn food_sources(&self) -> &[FoodSource] {
        &self.food_sources
    }

    /// Failed attempts tolerated before a source is abandoned.
    #[must_use]
    pub fn trial_limit(&self) -> usize {
        self.trial_limit
    }

    /// Validated configuration the colony was built with.
    #[must_use]
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Objective evaluations so far, including initialization.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Completed iterations.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Best-so-far objective value after each completed iteration.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    fn evaluate(&mut self, solution: &[f64]) -> Result<f64> {
        self.evaluations += 1;
        objective::evaluate(&self.objective, solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristics::{benchmarks, fallible};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_colony(seed: u64) -> (Colony<fn(&[f64]) -> f64>, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = ColonyConfig::new(3, -5.0, 5.0, 20, 50);
        let colony = Colony::new(benchmarks::sphere as fn(&[f64]) -> f64, config, &mut rng)
            .expect("valid config");
        (colony, rng)
    }

    #[test]
    fn test_new_allocates_half_swarm() {
        let (colony, _) = small_colony(1);
        assert_eq!(colony.food_sources().len(), 10);
        assert_eq!(colony.trial_limit(), 30);
        assert_eq!(colony.evaluations(), 10);
        assert!(colony.best_solution().is_err());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = ColonyConfig::new(2, -1.0, 1.0, 3, 10);
        let result = Colony::new(benchmarks::sphere, config, &mut rng);
        assert!(matches!(result, Err(AbcError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_explore_neighbor_changes_one_coordinate() {
        let (mut colony, mut rng) = small_colony(3);
        for _ in 0..200 {
            let before = colony.food_sources()[4].clone();
            let improved = colony.explore_neighbor(4, &mut rng).expect("sphere");
            let after = &colony.food_sources()[4];

            if improved {
                let changed = before
                    .solution()
                    .iter()
                    .zip(after.solution())
                    .filter(|(a, b)| a != b)
                    .count();
                assert!(changed <= 1);
                assert!(after.fitness() > before.fitness());
                assert_eq!(after.trials(), 0);
            } else {
                assert_eq!(after.solution(), before.solution());
                assert_eq!(after.trials(), before.trials() + 1);
            }
        }
    }

    #[test]
    fn test_employed_phase_one_evaluation_per_source() {
        let (mut colony, mut rng) = small_colony(5);
        let before = colony.evaluations();
        colony.employed_bee_phase(&mut rng).expect("sphere");
        assert_eq!(colony.evaluations() - before, 10);
    }

    #[test]
    fn test_onlooker_phase_makes_np_plus_one_moves() {
        let (mut colony, mut rng) = small_colony(7);
        let probabilities = colony.calculate_probabilities();
        let before = colony.evaluations();
        let moves = colony
            .onlooker_bee_phase(&probabilities, &mut rng)
            .expect("sphere");
        assert_eq!(moves, 11);
        assert_eq!(colony.evaluations() - before, 11);
    }

    #[test]
    fn test_onlooker_cycle_limit_stops_early() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = ColonyConfig::new(2, -5.0, 5.0, 20, 1).with_onlooker_cycle_limit(1);
        let mut colony = Colony::new(benchmarks::sphere, config, &mut rng).expect("valid");

        // with the floor probability, one pass cannot reach 11 selections
        let probabilities = vec![SELECTION_FLOOR; 10];
        let moves = colony
            .onlooker_bee_phase(&probabilities, &mut rng)
            .expect("sphere");
        assert!(moves <= 10);

        let result = colony.run(&mut rng).expect("one iteration");
        assert_eq!(result.termination, TerminationReason::OnlookerCycleLimit);
    }

    #[test]
    fn test_probabilities_floor_and_peak() {
        let (colony, _) = small_colony(9);
        let probabilities = colony.calculate_probabilities();
        assert_eq!(probabilities.len(), 10);
        assert!(probabilities.iter().all(|&p| (0.1..=1.0).contains(&p)));
        let peak = probabilities.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((peak - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_with_infinite_fitness() {
        let mut rng = StdRng::seed_from_u64(2);
        let objective = |x: &[f64]| if x[0] > 0.0 { f64::NEG_INFINITY } else { 1.0 };
        let config = ColonyConfig::new(1, -1.0, 1.0, 20, 1);
        let colony = Colony::new(objective, config, &mut rng).expect("valid");
        let probabilities = colony.calculate_probabilities();
        assert!(probabilities.iter().all(|p| !p.is_nan()));
        assert!(probabilities.iter().all(|&p| (0.1..=1.0).contains(&p)));
    }

    #[test]
    fn test_scout_sets_best_snapshot() {
        let (mut colony, mut rng) = small_colony(13);
        assert!(colony.scout_bee_phase(&mut rng).expect("sphere").is_none());

        let best = colony.best_solution().expect("set by scout").clone();
        let max_fitness = colony
            .food_sources()
            .iter()
            .map(FoodSource::fitness)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((best.fitness() - max_fitness).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scout_restarts_most_stagnant_source() {
        let (mut colony, mut rng) = small_colony(17);
        let limit = colony.trial_limit();
        for _ in 0..=limit {
            colony.food_sources[2].record_failed_trial();
        }
        for _ in 0..=limit + 3 {
            colony.food_sources[6].record_failed_trial();
        }

        let restarted = colony.scout_bee_phase(&mut rng).expect("sphere");
        assert_eq!(restarted, Some(6));
        assert_eq!(colony.food_sources()[6].trials(), 0);
        assert_eq!(colony.food_sources()[2].trials(), limit + 1);
    }

    #[test]
    fn test_scout_ignores_source_at_limit() {
        let (mut colony, mut rng) = small_colony(19);
        for _ in 0..colony.trial_limit() {
            colony.food_sources[0].record_failed_trial();
        }
        assert_eq!(colony.scout_bee_phase(&mut rng).expect("sphere"), None);
    }

    #[test]
    fn test_scout_breaks_ties_among_stagnant() {
        let mut picked = [false; 2];
        for seed in 0..32 {
            let (mut colony, mut rng) = small_colony(seed);
            let limit = colony.trial_limit();
            for idx in [1, 8] {
                for _ in 0..=limit {
                    colony.food_sources[idx].record_failed_trial();
                }
            }
            match colony.scout_bee_phase(&mut rng).expect("sphere") {
                Some(1) => picked[0] = true,
                Some(8) => picked[1] = true,
                other => panic!("restarted {other:?}, expected 1 or 8"),
            }
        }
        assert!(picked[0] && picked[1], "tie-break never varied: {picked:?}");
    }

    #[test]
    fn test_new_rejects_overflowing_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = ColonyConfig::new(2, -f64::MAX, f64::MAX, 10, 5);
        let result = Colony::new(benchmarks::sphere, config, &mut rng);
        assert!(matches!(result, Err(AbcError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_best_snapshot_unaffected_by_later_moves() {
        let (mut colony, mut rng) = small_colony(29);
        colony.scout_bee_phase(&mut rng).expect("sphere");
        let snapshot = colony.best_solution().expect("set").clone();
        for _ in 0..5 {
            colony.employed_bee_phase(&mut rng).expect("sphere");
        }
        assert_eq!(colony.best_solution().expect("set"), &snapshot);
    }

    #[test]
    fn test_zero_iterations_reports_unavailable() {
        let mut rng = StdRng::seed_from_u64(31);
        let config = ColonyConfig::default().with_max_iterations(0);
        let mut colony = Colony::new(benchmarks::rosenbrock, config, &mut rng).expect("valid");
        assert!(matches!(
            colony.run(&mut rng),
            Err(AbcError::BestSolutionUnavailable)
        ));
    }

    #[test]
    fn test_run_until_cancels() {
        let (mut colony, mut rng) = small_colony(37);
        let result = colony
            .run_until(&mut rng, |stats| stats.iteration == 5)
            .expect("sphere");
        assert_eq!(result.iterations, 5);
        assert_eq!(result.history.len(), 5);
        assert_eq!(result.termination, TerminationReason::Cancelled);
    }

    #[test]
    fn test_history_is_non_increasing() {
        let (mut colony, mut rng) = small_colony(41);
        let result = colony.run(&mut rng).expect("sphere");
        assert_eq!(result.termination, TerminationReason::MaxIterations);
        assert_eq!(result.history.len(), 50);
        for w in result.history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_objective_error_aborts_run() {
        let mut rng = StdRng::seed_from_u64(43);
        let objective = fallible(|x: &[f64]| {
            anyhow::ensure!(x[0] <= 0.0, "left the trust region");
            Ok(x[0] * x[0])
        });
        let config = ColonyConfig::new(1, -5.0, 5.0, 40, 100);
        let outcome = Colony::new(objective, config, &mut rng).and_then(|mut c| c.run(&mut rng));
        assert!(matches!(outcome, Err(AbcError::Evaluation(_))));
    }
}
