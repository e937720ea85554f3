//! LABS energy functional.
//!
//! For a spin sequence `s` of length `N`:
//!
//! ```text
//! C_k(s) = sum_{i=0}^{N-1-k} s[i] * s[i+k]
//! E(s)   = sum_{k=1}^{N-1} C_k(s)^2
//! ```
//!
//! All arithmetic is integer, so the batched and scalar forms agree
//! exactly regardless of evaluation order.
//!
//! # References
//!
//! - Golay (1972), "A class of finite binary sequences with alternate
//!   auto-correlation values equal to zero"
//! - Packebusch & Mertens (2016), "Low autocorrelation binary sequences"

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::batch::Batch;
use crate::error::Result;
use crate::sequence::{validate_spins, Sequence};

/// Energy of a validated sequence. `N = 1` gives `0`.
///
/// # Examples
///
/// ```
/// use labs_search::energy::energy;
/// use labs_search::sequence::Sequence;
///
/// let s = Sequence::new(vec![1, 1, -1, 1]).unwrap();
/// assert_eq!(energy(&s), 2);
/// ```
pub fn energy(seq: &Sequence) -> u64 {
    row_energy(seq.spins())
}

/// Energy of raw spins, validating them first.
///
/// This is the standalone entry point for callers that hold plain spin
/// slices, such as external samplers checking their own results.
pub fn energy_of_spins(spins: &[i8]) -> Result<u64> {
    validate_spins(spins)?;
    Ok(row_energy(spins))
}

/// Lag autocorrelations `C_1 ..= C_{N-1}`.
pub fn autocorrelations(seq: &Sequence) -> Vec<i64> {
    let s = seq.spins();
    (1..s.len()).map(|k| lag_correlation(s, k)).collect()
}

/// Merit factor `N^2 / (2 E)`; infinite when `E == 0`.
pub fn merit_factor(seq: &Sequence) -> f64 {
    let e = energy(seq);
    if e == 0 {
        return f64::INFINITY;
    }
    let n = seq.len() as f64;
    n * n / (2.0 * e as f64)
}

/// Energies of every row in `batch`, in row order.
///
/// Evaluated lag by lag: for each `k`, every row's `C_k` is reduced over
/// the two shifted views and its square added into that row's running
/// total. With `parallel` set (and the `parallel` feature enabled) the
/// per-row reductions of a lag run on the rayon pool; lags are
/// accumulated one after another.
pub fn batch_energies(batch: &Batch, parallel: bool) -> Vec<u64> {
    let mut energies = vec![0u64; batch.batch_size()];
    for k in 1..batch.seq_len() {
        accumulate_lag(batch, k, &mut energies, parallel);
    }
    energies
}

/// Energy of one row, computed lag by lag.
pub(crate) fn row_energy(row: &[i8]) -> u64 {
    (1..row.len()).map(|k| lag_square(row, k)).sum()
}

#[inline]
fn lag_correlation(row: &[i8], k: usize) -> i64 {
    let n = row.len();
    row[..n - k]
        .iter()
        .zip(&row[k..])
        .map(|(&a, &b)| i64::from(a * b))
        .sum()
}

#[inline]
fn lag_square(row: &[i8], k: usize) -> u64 {
    let c = lag_correlation(row, k);
    (c * c) as u64
}

#[cfg(feature = "parallel")]
fn accumulate_lag(batch: &Batch, k: usize, energies: &mut [u64], parallel: bool) {
    if parallel {
        energies
            .par_iter_mut()
            .zip(batch.as_slice().par_chunks_exact(batch.seq_len()))
            .for_each(|(e, row)| *e += lag_square(row, k));
    } else {
        for (e, row) in energies.iter_mut().zip(batch.rows()) {
            *e += lag_square(row, k);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn accumulate_lag(batch: &Batch, k: usize, energies: &mut [u64], _parallel: bool) {
    for (e, row) in energies.iter_mut().zip(batch.rows()) {
        *e += lag_square(row, k);
    }
}
