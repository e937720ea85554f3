//! Binary spin sequences.
//!
//! A [`Sequence`] is a non-empty, fixed-length run of spins, each exactly
//! `+1` or `-1`. Sequences are immutable: flipping or negating produces a
//! new value and leaves the original untouched.

use std::fmt;

use rand::Rng;

use crate::error::{LabsError, Result};

/// A validated `±1` spin sequence of length `N >= 1`.
///
/// # Examples
///
/// ```
/// use labs_search::sequence::Sequence;
///
/// let s = Sequence::new(vec![1, -1, 1]).unwrap();
/// let t = s.flipped(1).unwrap();
/// assert_eq!(t.spins(), &[1, 1, 1]);
/// assert_eq!(s.spins(), &[1, -1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<i8>", into = "Vec<i8>")
)]
pub struct Sequence {
    spins: Vec<i8>,
}

impl Sequence {
    /// Builds a sequence, rejecting empty input and entries other than `±1`.
    pub fn new(spins: Vec<i8>) -> Result<Self> {
        validate_spins(&spins)?;
        Ok(Self { spins })
    }

    /// Wraps spins already known to be valid.
    pub(crate) fn from_validated(spins: Vec<i8>) -> Self {
        debug_assert!(validate_spins(&spins).is_ok());
        Self { spins }
    }

    /// Maps a measurement bit-string to spins: `'0'` is `+1`, `'1'` is `-1`.
    ///
    /// ```
    /// use labs_search::sequence::Sequence;
    ///
    /// let s = Sequence::from_bitstring("0110").unwrap();
    /// assert_eq!(s.spins(), &[1, -1, -1, 1]);
    /// ```
    pub fn from_bitstring(bits: &str) -> Result<Self> {
        if bits.is_empty() {
            return Err(LabsError::config("sequence length must be at least 1, got 0"));
        }
        let spins = bits
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(1),
                '1' => Ok(-1),
                other => Err(LabsError::invalid_spin(i, format!("{other:?}"))),
            })
            .collect::<Result<Vec<i8>>>()?;
        Ok(Self { spins })
    }

    /// Inverse of [`from_bitstring`](Self::from_bitstring).
    pub fn to_bitstring(&self) -> String {
        self.spins
            .iter()
            .map(|&s| if s == 1 { '0' } else { '1' })
            .collect()
    }

    /// Draws each spin independently and uniformly from `{+1, -1}`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(LabsError::config("sequence length must be at least 1, got 0"));
        }
        let spins = (0..n)
            .map(|_| if rng.random_bool(0.5) { 1 } else { -1 })
            .collect();
        Ok(Self { spins })
    }

    /// Number of spins.
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    /// Always `false`; sequences hold at least one spin.
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Returns a copy with the spin at `position` negated.
    pub fn flipped(&self, position: usize) -> Result<Self> {
        check_position(position, self.len())?;
        let mut spins = self.spins.clone();
        spins[position] = -spins[position];
        Ok(Self { spins })
    }

    /// Returns the globally sign-flipped sequence `-s`.
    pub fn negated(&self) -> Self {
        Self {
            spins: self.spins.iter().map(|&s| -s).collect(),
        }
    }
}

impl TryFrom<Vec<i8>> for Sequence {
    type Error = LabsError;

    fn try_from(spins: Vec<i8>) -> Result<Self> {
        Self::new(spins)
    }
}

impl From<Sequence> for Vec<i8> {
    fn from(seq: Sequence) -> Self {
        seq.spins
    }
}

impl AsRef<[i8]> for Sequence {
    fn as_ref(&self) -> &[i8] {
        &self.spins
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.spins {
            f.write_str(if s == 1 { "+" } else { "-" })?;
        }
        Ok(())
    }
}

/// Checks that `spins` is non-empty and every entry is `+1` or `-1`.
pub fn validate_spins(spins: &[i8]) -> Result<()> {
    if spins.is_empty() {
        return Err(LabsError::config("sequence length must be at least 1, got 0"));
    }
    match spins.iter().position(|&s| s != 1 && s != -1) {
        Some(i) => Err(LabsError::invalid_spin(i, spins[i])),
        None => Ok(()),
    }
}

pub(crate) fn check_position(position: usize, n: usize) -> Result<()> {
    if position >= n {
        return Err(LabsError::config(format!(
            "flip position {position} out of range [0, {n})"
        )));
    }
    Ok(())
}
