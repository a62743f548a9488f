//! Packed fixed-width PUF response.
//!
//! A [`Response`] is validated once when it is built and stored as 64-bit
//! words, so every metric works on bits rather than re-parsing characters.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseResponseError;

const WORD_BITS: usize = 64;

/// An immutable binary response captured from a PUF instance.
///
/// Bit `i` lives in `words[i / 64]` at bit `i % 64`. Bits past `len` are
/// always zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Response {
    words: Vec<u64>,
    len: usize,
}

impl Response {
    /// Parse a string of '0' and '1' characters.
    pub fn parse(s: &str) -> Result<Self, ParseResponseError> {
        let mut bits = Vec::with_capacity(s.len());
        for (index, symbol) in s.chars().enumerate() {
            match symbol {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(ParseResponseError::InvalidSymbol { index, symbol }),
            }
        }
        Ok(Self::from_bits(&bits))
    }

    /// Build a response from individual bits, index 0 first.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut words = vec![0u64; bits.len().div_ceil(WORD_BITS)];
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
            }
        }
        Self {
            words,
            len: bits.len(),
        }
    }

    /// Unpack the first `n_bits` bits of `data`, MSB first per byte.
    pub fn from_bytes(data: &[u8], n_bits: usize) -> Result<Self, ParseResponseError> {
        let available = data.len() * 8;
        if n_bits > available {
            return Err(ParseResponseError::TooFewBytes { n_bits, available });
        }
        let bits: Vec<bool> = (0..n_bits)
            .map(|i| (data[i / 8] >> (7 - i % 8)) & 1 == 1)
            .collect();
        Ok(Self::from_bits(&bits))
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of bit `i`, or `None` past the end.
    pub fn bit(&self, i: usize) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some((self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
    }

    /// Iterate over bits, index 0 first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Packed storage, used by the distance kernels.
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<&[bool]> for Response {
    fn from(bits: &[bool]) -> Self {
        Self::from_bits(bits)
    }
}
