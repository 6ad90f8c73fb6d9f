use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, Result};

/// A 64-symbol digit alphabet: `0-9`, `A-Z`, `a-z` and two
/// configurable punctuation symbols for the last two digit values.
///
/// Both punctuation choices seen in the wild are provided as
/// constructors; the alphabet is configuration, neither is canonical.
#[derive(Clone, Copy, Debug)]
pub struct Alphabet {
    sym62: char,
    sym63: char,
}

impl Alphabet {
    /// `_` for 62 and `.` for 63.
    pub fn underscore_dot() -> Self {
        Self {
            sym62: '_',
            sym63: '.',
        }
    }

    /// Space for 62 and `.` for 63.
    pub fn space_dot() -> Self {
        Self {
            sym62: ' ',
            sym63: '.',
        }
    }

    /// Digit value of a single character.
    pub fn index_of(&self, c: char) -> Result<u8> {
        match c {
            '0'..='9' => Ok(c as u8 - b'0'),
            'A'..='Z' => Ok(c as u8 - b'A' + 10),
            'a'..='z' => Ok(c as u8 - b'a' + 36),
            _ if c == self.sym62 => Ok(62),
            _ if c == self.sym63 => Ok(63),
            _ => Err(Error::BadCharacter(c)),
        }
    }

    /// Character for a digit value in `[0, 64)`.
    pub fn char_at(&self, digit: u8) -> Result<char> {
        match digit {
            0..=9 => Ok((b'0' + digit) as char),
            10..=35 => Ok((b'A' + digit - 10) as char),
            36..=61 => Ok((b'a' + digit - 36) as char),
            62 => Ok(self.sym62),
            63 => Ok(self.sym63),
            _ => Err(Error::BadDigit(digit)),
        }
    }
}

/// Packs a line of text into a single big integer by reading it as a
/// base-64 number, first character least significant.
///
/// Unpacking divides the integer down to zero, so a trailing run of
/// zero-digit characters (`'0'`) vanishes on a round trip. That is the
/// defined behavior of this packing, not a defect to compensate for.
#[derive(Clone, Copy, Debug)]
pub struct Base64 {
    alphabet: Alphabet,
}

impl Base64 {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn encode(&self, text: &str) -> Result<BigUint> {
        let mut packed = BigUint::zero();
        for c in text.chars().rev() {
            packed = packed * 64u32 + self.alphabet.index_of(c)?;
        }
        Ok(packed)
    }

    pub fn decode(&self, code: &BigUint) -> Result<String> {
        let mut code = code.clone();
        let mut text = String::new();
        let base = BigUint::from(64u32);
        while !code.is_zero() {
            let digit = (&code % &base)
                .to_u8()
                .expect("remainder of division by 64 fits in u8");
            text.push(self.alphabet.char_at(digit)?);
            code /= &base;
        }
        Ok(text)
    }
}
