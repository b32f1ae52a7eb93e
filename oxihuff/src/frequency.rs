//! Byte frequency histograms.

use std::fmt;

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;

/// Inputs at least this large are split across threads by
/// [`Frequencies::from_bytes_parallel`].
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK_SIZE: usize = 1 << 20;

/// Occurrence count of every byte value in a buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Frequencies {
    counts: [u64; ALPHABET_SIZE],
}

impl Frequencies {
    /// Create an all-zero histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut freqs = Self::new();
        freqs.update(data);
        freqs
    }

    /// Count every byte of `data`, splitting large inputs across threads
    /// (requires `parallel` feature).
    ///
    /// Per-chunk histograms are merged before returning, so the result is
    /// identical to [`from_bytes`](Self::from_bytes).
    #[cfg(feature = "parallel")]
    pub fn from_bytes_parallel(data: &[u8]) -> Self {
        use rayon::prelude::*;

        if data.len() < PARALLEL_CHUNK_SIZE {
            return Self::from_bytes(data);
        }

        data.par_chunks(PARALLEL_CHUNK_SIZE)
            .map(Self::from_bytes)
            .reduce(Self::new, |mut acc, chunk| {
                acc.merge(&chunk);
                acc
            })
    }

    /// Add the bytes of `data` to the histogram.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Add another histogram to this one.
    pub fn merge(&mut self, other: &Frequencies) {
        for (count, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
    }

    /// Occurrence count of `byte`.
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of counted bytes.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Check if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(byte, count)` for every occurring byte, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
    }
}

impl Default for Frequencies {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u64; ALPHABET_SIZE]> for Frequencies {
    fn from(counts: [u64; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }
}

impl fmt::Debug for Frequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
