//! Ready-made ElGamal wiring for each concrete group, deriving the
//! encoder parameters from the group's own configuration.

use num_bigint::BigUint;
use rand::Rng;

use crate::algebra::field::{Field, SqrtField};
use crate::algebra::group::Group;
use crate::elgamal::ElGamal;
use crate::encoding::chunk::{ChunkEncoder, ListEncoder};
use crate::encoding::point::RandomPointEncoder;
use crate::structures::binary::BinaryField;
use crate::structures::curve::{EllipticGroup, Point};
use crate::structures::quotient::QuotientField;
use crate::structures::zn::Zn;

/// ElGamal over a prime field, one chunk per element.
///
/// The chunk width keeps every payload strictly below the modulus,
/// so encoded elements are already canonical.
pub fn prime_scheme(group: Zn, generator: BigUint) -> ElGamal<Zn, ChunkEncoder> {
    let chunk_length = ((group.modulus().bits() - 1) / 8) as usize;
    assert!(chunk_length > 0, "prime modulus must have at least 9 bits");
    ElGamal::new(group, generator, ChunkEncoder::new(chunk_length))
}

/// ElGamal over GF(2^n), one chunk per element.
pub fn binary_scheme(group: BinaryField, generator: BigUint) -> ElGamal<BinaryField, ChunkEncoder> {
    let chunk_length = (group.degree() / 8) as usize;
    assert!(chunk_length > 0, "field degree must be at least 8");
    ElGamal::new(group, generator, ChunkEncoder::new(chunk_length))
}

/// ElGamal over a quotient-polynomial field: the chunk stream is
/// grouped into coefficient vectors of the field's degree.
pub fn polynomial_scheme<F>(
    group: QuotientField<F>,
    generator: Vec<BigUint>,
) -> ElGamal<QuotientField<F>, ListEncoder<ChunkEncoder>>
where
    F: Field<Elem = BigUint>,
{
    let chunk_length = ((group.base().order().bits() - 1) / 8) as usize;
    assert!(chunk_length > 0, "base field must have at least 9 bits");
    let list_length = group.degree();
    let encoder = ListEncoder::new(ChunkEncoder::new(chunk_length), list_length);
    ElGamal::new(group, generator, encoder)
}

/// ElGamal over an elliptic-curve group with redundancy point encoding.
///
/// The shift takes half the field's bit length and the chunk width
/// fills at most the other half, so `(payload << shift) | fill` never
/// reaches the modulus and decoding can undo the shift exactly.
pub fn elliptic_scheme<F, R>(
    group: EllipticGroup<F>,
    generator: Point<BigUint>,
    rng: R,
) -> ElGamal<EllipticGroup<F>, RandomPointEncoder<F, ChunkEncoder, R>>
where
    F: SqrtField<Elem = BigUint> + Clone,
    R: Rng,
{
    let field_bits = group.curve().field().order().bits();
    let rand_shift = (field_bits - 1) / 2;
    let chunk_length = (rand_shift / 8) as usize;
    assert!(chunk_length > 0, "coordinate field must have at least 17 bits");
    let encoder = RandomPointEncoder::new(
        ChunkEncoder::new(chunk_length),
        group.curve().clone(),
        rand_shift,
        rng,
    );
    ElGamal::new(group, generator, encoder)
}
