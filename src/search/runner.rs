//! Local search execution loop.
//!
//! # Algorithm
//!
//! 1. Seed the state from the caller's sequence or a random draw
//! 2. For each of `steps` rounds:
//!    a. Draw `B` flip positions uniformly from `[0, N)` with replacement
//!    b. Build the single-flip neighbor batch of the current sequence
//!    c. Score the batch and take its lowest-energy row
//!    d. Replace the current state if the acceptance rule allows
//! 3. Return the final state
//!
//! Rounds are strictly sequential: a round's positions are drawn only
//! after the previous round's acceptance decision.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};
use rand::Rng;

use super::config::SearchConfig;
use crate::batch::Batch;
use crate::energy::energy;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use crate::scorer::{BatchBest, BatchScorer};
use crate::sequence::Sequence;

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The final current sequence.
    pub best: Sequence,

    /// Energy of `best`.
    pub best_energy: u64,

    /// Energy of the starting sequence.
    pub initial_energy: u64,

    /// Rounds executed.
    pub rounds: usize,

    /// Rounds whose candidate was accepted, including lateral moves.
    pub accepted_moves: usize,

    /// Rounds whose candidate strictly lowered the energy.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// The seed the run's generator was created from.
    pub seed: u64,

    /// Energy after initialization and after every round.
    pub energy_history: Vec<u64>,
}

/// Current sequence, its energy, and the number of completed rounds.
#[derive(Debug, Clone)]
struct SearchState {
    current: Sequence,
    energy: u64,
    round: usize,
}

/// Outcome of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundOutcome {
    Improved,
    Lateral,
    Rejected,
}

/// Executes the batched single-flip local search.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs from a random sequence of length `config.length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use labs_search::search::{LocalSearchRunner, SearchConfig};
    ///
    /// let config = SearchConfig::default()
    ///     .with_length(20)
    ///     .with_batch_size(64)
    ///     .with_steps(10)
    ///     .with_seed(0);
    /// let result = LocalSearchRunner::run(&config).unwrap();
    /// assert_eq!(result.rounds, 10);
    /// assert!(result.best_energy <= result.initial_energy);
    /// ```
    pub fn run(config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_cancel(None, config, None)
    }

    /// Runs from `initial`. `config.length` is ignored.
    pub fn run_from(initial: Sequence, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_cancel(Some(initial), config, None)
    }

    /// Runs with an optional starting sequence and cancellation token.
    ///
    /// The flag is checked before each round; a set flag ends the run with
    /// the state reached so far.
    pub fn run_with_cancel(
        initial: Option<Sequence>,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        match initial {
            Some(_) => config.validate_rounds()?,
            None => config.validate()?,
        }

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let current = match initial {
            Some(seq) => seq,
            None => Sequence::random(config.length, &mut rng)?,
        };
        let initial_energy = energy(&current);
        let mut state = SearchState {
            current,
            energy: initial_energy,
            round: 0,
        };

        info!(
            "local search start: n={} batch_size={} steps={} seed={} energy={}",
            state.current.len(),
            config.batch_size,
            config.steps,
            seed,
            initial_energy
        );

        let scorer = BatchScorer::new(config.scoring, config.parallel);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut energy_history = Vec::with_capacity(config.steps + 1);
        energy_history.push(state.energy);

        while state.round < config.steps {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            match run_round(&mut state, config, &scorer, &mut rng)? {
                RoundOutcome::Improved => {
                    accepted_moves += 1;
                    improving_moves += 1;
                }
                RoundOutcome::Lateral => accepted_moves += 1,
                RoundOutcome::Rejected => {}
            }
            energy_history.push(state.energy);
        }

        info!(
            "local search done: rounds={} energy={} accepted={} improving={} cancelled={}",
            state.round, state.energy, accepted_moves, improving_moves, cancelled
        );

        Ok(SearchResult {
            best: state.current,
            best_energy: state.energy,
            initial_energy,
            rounds: state.round,
            accepted_moves,
            improving_moves,
            cancelled,
            seed,
            energy_history,
        })
    }
}

/// Draws `count` flip positions uniformly from `[0, n)`, with replacement.
fn draw_flips<R: Rng>(rng: &mut R, n: usize, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.random_range(0..n)).collect()
}

/// Generates, scores, and applies one round.
fn run_round<R: Rng>(
    state: &mut SearchState,
    config: &SearchConfig,
    scorer: &BatchScorer,
    rng: &mut R,
) -> Result<RoundOutcome> {
    let flips = draw_flips(rng, state.current.len(), config.batch_size);
    let batch = Batch::from_flips(&state.current, &flips)?;
    let BatchBest { index, energy } = scorer.best(&batch);

    let outcome = if !config.acceptance.accepts(energy, state.energy) {
        RoundOutcome::Rejected
    } else if energy < state.energy {
        RoundOutcome::Improved
    } else {
        RoundOutcome::Lateral
    };

    if outcome == RoundOutcome::Rejected {
        trace!(
            "round {}: rejected candidate energy {} (current {})",
            state.round,
            energy,
            state.energy
        );
    } else {
        debug!(
            "round {}: accepted flip {} energy {} -> {}",
            state.round, flips[index], state.energy, energy
        );
        state.current = batch.sequence(index)?;
        state.energy = energy;
    }

    state.round += 1;
    Ok(outcome)
}
