//! Batch scoring: energies plus the minimum-energy row.
//!
//! Two strategies produce identical answers:
//!
//! - [`ScoreMode::Materialized`]: the full energy vector is computed with
//!   the lag-major batched evaluator, then reduced to its minimum.
//! - [`ScoreMode::Streaming`]: each row's energy is folded straight into a
//!   running `(energy, index)` minimum and the vector is never stored.
//!
//! Ties resolve to the lowest row index in both modes, sequential or
//! parallel, because the reduction compares `(energy, index)` pairs.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::batch::Batch;
use crate::energy::{batch_energies, row_energy};

/// How a batch is reduced to its best row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreMode {
    /// Compute every energy, then take the minimum.
    #[default]
    Materialized,
    /// Fold energies into the minimum without storing them.
    Streaming,
}

/// The lowest-energy row of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchBest {
    /// Smallest row index achieving `energy`.
    pub index: usize,

    /// Minimum energy over the batch.
    pub energy: u64,
}

/// Per-row energies together with their minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredBatch {
    /// Energy of every row, in row order.
    pub energies: Vec<u64>,

    /// Lowest-energy row of `energies`.
    pub best: BatchBest,
}

/// Scores batches with a fixed strategy.
///
/// # Examples
///
/// ```
/// use labs_search::batch::Batch;
/// use labs_search::scorer::{BatchScorer, ScoreMode};
/// use labs_search::sequence::Sequence;
///
/// let base = Sequence::new(vec![1, 1, 1]).unwrap();
/// let batch = Batch::from_flips(&base, &[0, 1, 2]).unwrap();
/// let best = BatchScorer::new(ScoreMode::Streaming, false).best(&batch);
/// assert_eq!((best.index, best.energy), (0, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchScorer {
    mode: ScoreMode,
    parallel: bool,
}

impl Default for BatchScorer {
    fn default() -> Self {
        Self::new(ScoreMode::default(), true)
    }
}

impl BatchScorer {
    pub fn new(mode: ScoreMode, parallel: bool) -> Self {
        Self { mode, parallel }
    }

    /// Best row of `batch` using the configured strategy.
    pub fn best(&self, batch: &Batch) -> BatchBest {
        match self.mode {
            ScoreMode::Materialized => {
                let energies = batch_energies(batch, self.parallel);
                min_pair(&energies, self.parallel)
            }
            ScoreMode::Streaming => streaming_min(batch, self.parallel),
        }
    }

    /// Every row's energy plus the best row. Always materializes.
    pub fn score_all(&self, batch: &Batch) -> ScoredBatch {
        let energies = batch_energies(batch, self.parallel);
        let best = min_pair(&energies, self.parallel);
        ScoredBatch { energies, best }
    }
}

/// Minimum of `energies` with lowest-index tie-break; `None` when empty.
///
/// ```
/// use labs_search::scorer::argmin;
///
/// let best = argmin(&[5, 2, 7, 2]).unwrap();
/// assert_eq!((best.index, best.energy), (1, 2));
/// assert!(argmin(&[]).is_none());
/// ```
pub fn argmin(energies: &[u64]) -> Option<BatchBest> {
    if energies.is_empty() {
        return None;
    }
    Some(min_pair(energies, false))
}

const NO_ROW: (u64, usize) = (u64::MAX, usize::MAX);

fn to_best((energy, index): (u64, usize)) -> BatchBest {
    BatchBest { index, energy }
}

#[cfg(feature = "parallel")]
fn min_pair(energies: &[u64], parallel: bool) -> BatchBest {
    let pair = if parallel {
        energies
            .par_iter()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .reduce(|| NO_ROW, std::cmp::min)
    } else {
        sequential_min_pair(energies)
    };
    to_best(pair)
}

#[cfg(not(feature = "parallel"))]
fn min_pair(energies: &[u64], _parallel: bool) -> BatchBest {
    to_best(sequential_min_pair(energies))
}

fn sequential_min_pair(energies: &[u64]) -> (u64, usize) {
    energies
        .iter()
        .enumerate()
        .map(|(i, &e)| (e, i))
        .fold(NO_ROW, std::cmp::min)
}

#[cfg(feature = "parallel")]
fn streaming_min(batch: &Batch, parallel: bool) -> BatchBest {
    let pair = if parallel {
        batch
            .as_slice()
            .par_chunks_exact(batch.seq_len())
            .enumerate()
            .map(|(i, row)| (row_energy(row), i))
            .reduce(|| NO_ROW, std::cmp::min)
    } else {
        sequential_streaming_min(batch)
    };
    to_best(pair)
}

#[cfg(not(feature = "parallel"))]
fn streaming_min(batch: &Batch, _parallel: bool) -> BatchBest {
    to_best(sequential_streaming_min(batch))
}

fn sequential_streaming_min(batch: &Batch) -> (u64, usize) {
    batch
        .rows()
        .enumerate()
        .map(|(i, row)| (row_energy(row), i))
        .fold(NO_ROW, std::cmp::min)
}
