use num_bigint::BigUint;
use num_traits::Zero;

use super::alphabet::Base64;
use super::Encoder;
use crate::error::{Error, Result};

/// Slices UTF-8 bytes into fixed-length chunks and reads each as a
/// little-endian unsigned integer.
///
/// Decoding re-emits every integer as exactly `chunk_length`
/// little-endian bytes and concatenates, then strips the trailing NUL
/// bytes the final short chunk was padded with. Text containing
/// embedded NUL bytes is therefore outside this encoder's domain.
#[derive(Clone, Copy, Debug)]
pub struct ChunkEncoder {
    chunk_length: usize,
}

impl ChunkEncoder {
    pub fn new(chunk_length: usize) -> Self {
        assert!(chunk_length > 0, "chunk length must be positive");
        Self { chunk_length }
    }

    pub fn chunk_length(&self) -> usize {
        self.chunk_length
    }
}

impl Encoder for ChunkEncoder {
    type Code = BigUint;

    fn encode(&self, text: &str) -> Result<Vec<BigUint>> {
        Ok(text
            .as_bytes()
            .chunks(self.chunk_length)
            .map(BigUint::from_bytes_le)
            .collect())
    }

    fn decode(&self, code: &[BigUint]) -> Result<String> {
        let mut bytes = Vec::with_capacity(code.len() * self.chunk_length);
        for c in code {
            let mut chunk = c.to_bytes_le();
            if chunk.len() > self.chunk_length {
                return Err(Error::ChunkOverflow {
                    value_bytes: chunk.len(),
                    chunk_length: self.chunk_length,
                });
            }
            chunk.resize(self.chunk_length, 0);
            bytes.extend_from_slice(&chunk);
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
    }
}

/// Groups a primary integer stream into vectors of up to `list_length`
/// elements, right-padded with zeros.
///
/// Decoding aligns each incoming list back to `list_length` and
/// flattens before handing off to the primary decoder; the padding is
/// never explicitly stripped, so trailing zero elements are
/// indistinguishable from zero-valued plaintext. Accepted limitation
/// of the format.
#[derive(Clone, Debug)]
pub struct ListEncoder<P> {
    primary: P,
    list_length: usize,
}

impl<P> ListEncoder<P> {
    pub fn new(primary: P, list_length: usize) -> Self {
        assert!(list_length > 0, "list length must be positive");
        Self {
            primary,
            list_length,
        }
    }
}

impl<P: Encoder<Code = BigUint>> Encoder for ListEncoder<P> {
    type Code = Vec<BigUint>;

    fn encode(&self, text: &str) -> Result<Vec<Vec<BigUint>>> {
        let nums = self.primary.encode(text)?;
        Ok(nums
            .chunks(self.list_length)
            .map(|c| c.to_vec())
            .collect())
    }

    fn decode(&self, code: &[Vec<BigUint>]) -> Result<String> {
        let mut flat = Vec::with_capacity(code.len() * self.list_length);
        for lst in code {
            let mut aligned = lst.clone();
            aligned.resize(self.list_length, BigUint::zero());
            flat.extend(aligned);
        }
        self.primary.decode(&flat)
    }
}

/// One packed base-64 integer per line of text.
#[derive(Clone, Copy, Debug)]
pub struct LineEncoder {
    digit: Base64,
}

impl LineEncoder {
    pub fn new(digit: Base64) -> Self {
        Self { digit }
    }
}

impl Encoder for LineEncoder {
    type Code = BigUint;

    fn encode(&self, text: &str) -> Result<Vec<BigUint>> {
        text.split('\n').map(|line| self.digit.encode(line)).collect()
    }

    fn decode(&self, code: &[BigUint]) -> Result<String> {
        let lines = code
            .iter()
            .map(|c| self.digit.decode(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

/// Packs the whole text into one big integer, then re-expresses it in
/// base `base`, least-significant digit first.
///
/// Suits groups whose elements are integers below `base`, e.g. a prime
/// field with `base = N`.
#[derive(Clone, Debug)]
pub struct BaseEncoder {
    base: BigUint,
    digit: Base64,
}

impl BaseEncoder {
    pub fn new(base: BigUint, digit: Base64) -> Self {
        assert!(base > BigUint::from(1u32), "base must exceed 1");
        Self { base, digit }
    }
}

impl Encoder for BaseEncoder {
    type Code = BigUint;

    fn encode(&self, text: &str) -> Result<Vec<BigUint>> {
        let mut packed = self.digit.encode(text)?;
        let mut digits = Vec::new();
        while !packed.is_zero() {
            digits.push(&packed % &self.base);
            packed /= &self.base;
        }
        Ok(digits)
    }

    fn decode(&self, code: &[BigUint]) -> Result<String> {
        let mut packed = BigUint::zero();
        for c in code.iter().rev() {
            packed = packed * &self.base + c;
        }
        self.digit.decode(&packed)
    }
}
