//! Contiguous batches of candidate sequences.
//!
//! A [`Batch`] stores `B` sequences of common length `N` in one row-major
//! `B * N` buffer, so the batched evaluator can walk lag-shifted views of
//! every row without chasing per-sequence allocations.

use std::slice::ChunksExact;

use crate::error::{LabsError, Result};
use crate::sequence::{check_position, Sequence};

/// `B` spin rows of length `N`, stored contiguously with stride `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    data: Vec<i8>,
    batch_size: usize,
    seq_len: usize,
}

impl Batch {
    /// Single-flip neighbors of `base`.
    ///
    /// Row `j` equals `base` with position `flips[j]` negated. Every row is
    /// derived from the same `base`; repeated positions yield repeated rows.
    ///
    /// # Errors
    ///
    /// [`LabsError::Configuration`] if `flips` is empty or any position is
    /// outside `[0, N)`. Nothing is allocated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use labs_search::batch::Batch;
    /// use labs_search::sequence::Sequence;
    ///
    /// let base = Sequence::new(vec![1, -1, 1]).unwrap();
    /// let batch = Batch::from_flips(&base, &[1, 0]).unwrap();
    /// assert_eq!(batch.row(0), &[1, 1, 1]);
    /// assert_eq!(batch.row(1), &[-1, -1, 1]);
    /// ```
    pub fn from_flips(base: &Sequence, flips: &[usize]) -> Result<Self> {
        let n = base.len();
        if flips.is_empty() {
            return Err(LabsError::config("batch_size must be at least 1, got 0"));
        }
        for &pos in flips {
            check_position(pos, n)?;
        }

        let mut data = Vec::with_capacity(flips.len() * n);
        for &pos in flips {
            let start = data.len();
            data.extend_from_slice(base.spins());
            data[start + pos] = -data[start + pos];
        }

        Ok(Self {
            data,
            batch_size: flips.len(),
            seq_len: n,
        })
    }

    /// Packs existing sequences into a batch. All must share one length.
    pub fn from_sequences(sequences: &[Sequence]) -> Result<Self> {
        let first = sequences
            .first()
            .ok_or_else(|| LabsError::config("batch_size must be at least 1, got 0"))?;
        let n = first.len();

        let mut data = Vec::with_capacity(sequences.len() * n);
        for (j, seq) in sequences.iter().enumerate() {
            if seq.len() != n {
                return Err(LabsError::config(format!(
                    "sequence {j} has length {}, expected {n}",
                    seq.len()
                )));
            }
            data.extend_from_slice(seq.spins());
        }

        Ok(Self {
            data,
            batch_size: sequences.len(),
            seq_len: n,
        })
    }

    /// Number of rows `B`.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Length `N` of every row.
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Row `j` as a spin slice.
    ///
    /// # Panics
    ///
    /// Panics if `j >= batch_size()`.
    pub fn row(&self, j: usize) -> &[i8] {
        let start = j * self.seq_len;
        &self.data[start..start + self.seq_len]
    }

    /// Iterates the rows in order.
    pub fn rows(&self) -> ChunksExact<'_, i8> {
        self.data.chunks_exact(self.seq_len)
    }

    /// The whole row-major buffer.
    pub fn as_slice(&self) -> &[i8] {
        &self.data
    }

    /// Copies row `j` out as an owned [`Sequence`].
    pub fn sequence(&self, j: usize) -> Result<Sequence> {
        if j >= self.batch_size {
            return Err(LabsError::config(format!(
                "row index {j} out of range [0, {})",
                self.batch_size
            )));
        }
        Ok(Sequence::from_validated(self.row(j).to_vec()))
    }
}
