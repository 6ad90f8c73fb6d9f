//! Bidirectional mappings between text and sequences of group elements.
//!
//! The pipeline is assembled from small encoders: a 64-symbol digit
//! alphabet packs lines into big integers, chunk encoders slice UTF-8
//! bytes into fixed-width little-endian integers, and point encoders
//! lift integers onto an elliptic curve. Every encoder is immutable
//! configuration; encode and decode are pure functions of their input.

pub mod alphabet;
pub mod chunk;
pub mod point;

pub use alphabet::{Alphabet, Base64};
pub use chunk::{BaseEncoder, ChunkEncoder, LineEncoder, ListEncoder};
pub use point::{ExactPointEncoder, RandomPointEncoder};

use crate::error::Result;

/// Text to and from a sequence of codes of some group-element type.
pub trait Encoder {
    /// One unit of encoded output, matching the element type of the
    /// group the ciphertext will live in.
    type Code;

    fn encode(&self, text: &str) -> Result<Vec<Self::Code>>;

    fn decode(&self, code: &[Self::Code]) -> Result<String>;
}
