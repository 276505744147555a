// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Parameter region words
//!
//! Host-written regions are flat sequences of little-endian 32-bit signed
//! words with no headers or padding. Offsets are counted in words.

use super::error::{NeuralError, Result};

/// Size of one region word in bytes
pub const WORD_BYTES: usize = 4;

/// Decode a little-endian byte region into words
///
/// # Example
/// ```
/// use lifdv_npu_neural::types::region::words_from_le_bytes;
///
/// let words = words_from_le_bytes(&[1, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]).unwrap();
/// assert_eq!(words, vec![1, -1]);
/// ```
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<i32>> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(NeuralError::UnalignedRegion { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Encode words as a little-endian byte region
pub fn words_to_le_bytes(words: &[i32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Forward-only cursor over a word region
#[derive(Debug, Clone)]
pub struct RegionReader<'a> {
    region: &'static str,
    words: &'a [i32],
    offset: usize,
}

impl<'a> RegionReader<'a> {
    /// Start reading `words` at word `offset`; `region` names the region in errors
    pub fn new(region: &'static str, words: &'a [i32], offset: usize) -> Self {
        Self {
            region,
            words,
            offset,
        }
    }

    /// Consume the next `count` words
    pub fn take(&mut self, count: usize) -> Result<&'a [i32]> {
        let available = self.words.len().saturating_sub(self.offset);
        if available < count {
            return Err(NeuralError::RegionTooShort {
                region: self.region,
                expected: count,
                actual: available,
            });
        }
        let start = self.offset;
        self.offset += count;
        // Empty take past the end yields an empty slice
        Ok(self.words.get(start..self.offset).unwrap_or(&[]))
    }

    /// Offset of the first unconsumed word
    pub fn offset(&self) -> usize {
        self.offset
    }
}
