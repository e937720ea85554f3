//! Boundary for external bit-string samplers.
//!
//! Samplers live outside this crate. They hand back measurement
//! bit-strings, which are mapped to spins (`'0'` is `+1`, `'1'` is `-1`)
//! and scored with the same energy function the local search uses.

use crate::energy::energy;
use crate::error::{LabsError, Result};
use crate::sequence::Sequence;

/// A source of candidate bit-strings of a requested length.
pub trait SpinSampler {
    /// Returns sampled bit-strings of length `n`.
    fn sample(&mut self, n: usize) -> Result<Vec<String>>;
}

/// Lowest-energy sample seen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleBest {
    pub bitstring: String,
    pub spins: Sequence,
    pub energy: u64,
}

/// Scores every bit-string and keeps the first one of minimum energy.
///
/// Returns `Ok(None)` for an empty input. Any malformed bit-string fails
/// the whole call.
///
/// ```
/// use labs_search::sampling::best_of_bitstrings;
///
/// let best = best_of_bitstrings(["000", "001", "010"]).unwrap().unwrap();
/// assert_eq!(best.bitstring, "001");
/// assert_eq!(best.energy, 1);
/// ```
pub fn best_of_bitstrings<I, S>(samples: I) -> Result<Option<SampleBest>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<SampleBest> = None;
    for sample in samples {
        let bits = sample.as_ref();
        let spins = Sequence::from_bitstring(bits)?;
        let e = energy(&spins);
        if best.as_ref().is_none_or(|b| e < b.energy) {
            best = Some(SampleBest {
                bitstring: bits.to_string(),
                spins,
                energy: e,
            });
        }
    }
    Ok(best)
}

/// Draws one batch from `sampler` and returns its best sample.
///
/// Fails if the sampler returns nothing or a bit-string of the wrong length.
pub fn best_sample<T: SpinSampler + ?Sized>(sampler: &mut T, n: usize) -> Result<SampleBest> {
    if n == 0 {
        return Err(LabsError::config("sequence length must be at least 1, got 0"));
    }
    let samples = sampler.sample(n)?;
    if let Some(bad) = samples.iter().find(|s| s.len() != n) {
        return Err(LabsError::config(format!(
            "sampler returned bit-string {bad:?} of length {}, expected {n}",
            bad.len()
        )));
    }
    best_of_bitstrings(&samples)?
        .ok_or_else(|| LabsError::config(format!("sampler returned no samples for n={n}")))
}
