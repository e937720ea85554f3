//! Exhaustive enumeration for small sequence lengths.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::energy::row_energy;
use crate::error::{LabsError, Result};
use crate::sequence::Sequence;

/// Largest `N` accepted by [`brute_force_best`].
pub const MAX_BRUTE_FORCE_LENGTH: usize = 24;

/// Minimum energy over all `2^N` sequences, and the first sequence that
/// reaches it.
///
/// Sequences are enumerated with position 0 as the most significant bit
/// and `+1` before `-1`, so the all-`+1` sequence comes first.
///
/// # Examples
///
/// ```
/// use labs_search::exhaustive::brute_force_best;
///
/// let (e, s) = brute_force_best(4).unwrap();
/// assert_eq!(e, 2);
/// assert_eq!(s.len(), 4);
/// ```
pub fn brute_force_best(n: usize) -> Result<(u64, Sequence)> {
    if n == 0 || n > MAX_BRUTE_FORCE_LENGTH {
        return Err(LabsError::config(format!(
            "brute force length must be in [1, {MAX_BRUTE_FORCE_LENGTH}], got {n}"
        )));
    }

    let (energy, mask) = min_over_masks(n)
        .ok_or_else(|| LabsError::config(format!("no sequences of length {n}")))?;
    Ok((energy, Sequence::from_validated(mask_to_spins(mask, n))))
}

fn mask_to_spins(mask: u64, n: usize) -> Vec<i8> {
    (0..n)
        .map(|i| if (mask >> (n - 1 - i)) & 1 == 0 { 1 } else { -1 })
        .collect()
}

fn mask_energy(mask: u64, n: usize) -> u64 {
    row_energy(&mask_to_spins(mask, n))
}

#[cfg(feature = "parallel")]
fn min_over_masks(n: usize) -> Option<(u64, u64)> {
    (0..1u64 << n)
        .into_par_iter()
        .map(|mask| (mask_energy(mask, n), mask))
        .min()
}

#[cfg(not(feature = "parallel"))]
fn min_over_masks(n: usize) -> Option<(u64, u64)> {
    (0..1u64 << n).map(|mask| (mask_energy(mask, n), mask)).min()
}
