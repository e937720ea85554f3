//! Batched local search for the Low Autocorrelation Binary Sequence problem.
//!
//! Given `N` spins `s[i]` in `{+1, -1}`, LABS asks for the sequence that
//! minimizes `E(s) = sum_{k=1}^{N-1} C_k(s)^2`, where `C_k` is the lag-`k`
//! aperiodic autocorrelation.
//!
//! - **Energy**: scalar and batched evaluation of `E`, plus the
//!   autocorrelation profile and merit factor.
//! - **Batch**: contiguous `(B, N)` buffers of single-flip neighbors.
//! - **Scorer**: parallel minimum reduction over a batch, lowest index on
//!   ties.
//! - **Search**: the greedy round loop that ties the pieces together.
//! - **Exhaustive**: exact optimum for small `N`.
//! - **Sampling**: the boundary where external samplers hand in
//!   bit-strings to be scored.
//!
//! # Architecture
//!
//! Data flows one way: the search runner builds a [`batch::Batch`] of
//! neighbors, the [`scorer::BatchScorer`] reduces it with the
//! [`energy`] functions, and the runner consumes only the batch minimum.
//! Parallelism comes from rayon behind the default `parallel` feature.

pub mod batch;
pub mod energy;
pub mod error;
pub mod exhaustive;
pub mod random;
pub mod sampling;
pub mod scorer;
pub mod search;
pub mod sequence;

pub use error::{LabsError, Result};
pub use sequence::Sequence;
