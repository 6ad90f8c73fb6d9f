use std::cell::RefCell;

use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

use super::Encoder;
use crate::algebra::field::SqrtField;
use crate::error::Result;
use crate::structures::curve::{Curve, Point};

/// Maps integers onto curve points by redundancy: the payload occupies
/// the high bits of the x-coordinate and the low `rand_shift` bits are
/// filled with fresh randomness, retried until the candidate x has a
/// point.
///
/// The caller picks `rand_shift` and the primary chunk width so that
/// `(payload << rand_shift) | fill` stays below the field modulus;
/// otherwise canonicalization would wrap the candidate and decoding
/// could not undo the shift.
///
/// The generator is injected at construction and drawn from behind a
/// `RefCell`, keeping `encode(&self, ..)` aligned with the pure
/// encoders while tests supply a seeded generator.
#[derive(Debug)]
pub struct RandomPointEncoder<F: SqrtField<Elem = BigUint>, P, R> {
    primary: P,
    curve: Curve<F>,
    rand_shift: u64,
    rng: RefCell<R>,
}

impl<F: SqrtField<Elem = BigUint>, P, R: Rng> RandomPointEncoder<F, P, R> {
    pub fn new(primary: P, curve: Curve<F>, rand_shift: u64, rng: R) -> Self {
        Self {
            primary,
            curve,
            rand_shift,
            rng: RefCell::new(rng),
        }
    }

    fn encode_one(&self, num: &BigUint) -> Point<BigUint> {
        loop {
            let fill = self.rng.borrow_mut().gen_biguint(self.rand_shift);
            let x = (num.clone() << self.rand_shift) | fill;
            if let Some(point) = self.curve.solve_for_x(&x) {
                return point;
            }
        }
    }

    fn decode_one(&self, point: &Point<BigUint>) -> Result<BigUint> {
        let (x, _) = self.curve.intern(point)?;
        Ok(x >> self.rand_shift)
    }
}

impl<F, P, R> Encoder for RandomPointEncoder<F, P, R>
where
    F: SqrtField<Elem = BigUint>,
    P: Encoder<Code = BigUint>,
    R: Rng,
{
    type Code = Point<BigUint>;

    fn encode(&self, text: &str) -> Result<Vec<Point<BigUint>>> {
        let nums = self.primary.encode(text)?;
        Ok(nums.iter().map(|n| self.encode_one(n)).collect())
    }

    fn decode(&self, code: &[Point<BigUint>]) -> Result<String> {
        let nums = code
            .iter()
            .map(|p| self.decode_one(p))
            .collect::<Result<Vec<_>>>()?;
        self.primary.decode(&nums)
    }
}

/// Maps integers onto curve points with no redundancy: every payload
/// must itself be a valid x-coordinate, and a payload without a point
/// is a fatal [`crate::Error::NotOnCurve`]. No retry.
#[derive(Clone, Debug)]
pub struct ExactPointEncoder<F: SqrtField<Elem = BigUint>, P> {
    primary: P,
    curve: Curve<F>,
}

impl<F: SqrtField<Elem = BigUint>, P> ExactPointEncoder<F, P> {
    pub fn new(primary: P, curve: Curve<F>) -> Self {
        Self { primary, curve }
    }
}

impl<F, P> Encoder for ExactPointEncoder<F, P>
where
    F: SqrtField<Elem = BigUint>,
    P: Encoder<Code = BigUint>,
{
    type Code = Point<BigUint>;

    fn encode(&self, text: &str) -> Result<Vec<Point<BigUint>>> {
        self.primary
            .encode(text)?
            .iter()
            .map(|x| self.curve.asserted(x))
            .collect()
    }

    fn decode(&self, code: &[Point<BigUint>]) -> Result<String> {
        let xs = code
            .iter()
            .map(|p| Ok(self.curve.intern(p)?.0))
            .collect::<Result<Vec<_>>>()?;
        self.primary.decode(&xs)
    }
}
