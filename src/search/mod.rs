//! Batched single-flip local search.
//!
//! Each round draws `B` random flip positions, scores the resulting
//! neighbor batch in one pass, and moves to the best neighbor when the
//! [`Acceptance`] rule allows. The run lasts exactly `steps` rounds.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: sizes, step budget, seed, acceptance and scoring
//! - [`LocalSearchRunner`]: executes the search loop
//! - [`SearchResult`]: final sequence, energy, and run statistics

mod config;
mod runner;

pub use config::{Acceptance, SearchConfig};
pub use runner::{LocalSearchRunner, SearchResult};
