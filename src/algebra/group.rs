use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::Result;

/// Abstract group with a single binary operation, written multiplicatively.
///
/// The implementing type is the *structure* (it carries the modulus, curve
/// parameters, and so on); `Elem` is the opaque element value it operates
/// on. Laws (tested property-based in `tests/group_properties.rs`):
/// - associativity: `mul(mul(a, b), c) == mul(a, mul(b, c))`
/// - identity: `mul(unit(), a) == a`
/// - inverse: `mul(a, inv(a)) == unit()`
///
/// Canonical form is produced by [`Group::normalize`]; every other
/// operation may assume its inputs are canonical, and `normalize` is
/// idempotent.
pub trait Group {
    /// Element values this structure operates on.
    type Elem: Clone + fmt::Debug;

    /// Number of elements (the range ephemeral exponents are drawn from).
    fn order(&self) -> BigUint;

    /// Semantic equality of two canonical elements.
    fn eq(&self, x: &Self::Elem, y: &Self::Elem) -> bool;

    /// Bring an element into canonical form.
    fn normalize(&self, x: Self::Elem) -> Self::Elem;

    /// Identity element.
    fn unit(&self) -> Self::Elem;

    /// Group operation.
    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Inverse element.
    ///
    /// Fails with [`crate::Error::DivisionByZero`] in multiplicative groups of
    /// fields, where the additive zero has no inverse.
    fn inv(&self, x: &Self::Elem) -> Result<Self::Elem>;

    /// `x / y`, defined as `mul(x, inv(y))`.
    fn true_div(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem> {
        Ok(self.mul(x, &self.inv(y)?))
    }

    /// Exponentiation by a signed integer.
    ///
    /// `k == 0` yields `unit()`; `k < 0` inverts the base first and may
    /// therefore fail. Positive exponents delegate to
    /// [`Group::pow_unsigned`].
    fn pow(&self, x: &Self::Elem, k: &BigInt) -> Result<Self::Elem> {
        match k.sign() {
            Sign::NoSign => Ok(self.unit()),
            Sign::Minus => {
                let inverted = self.inv(x)?;
                Ok(self.pow_unsigned(&inverted, k.magnitude()))
            }
            Sign::Plus => Ok(self.pow_unsigned(x, k.magnitude())),
        }
    }

    /// Exponentiation by a non-negative integer using square-and-multiply.
    ///
    /// This is the one exponentiation algorithm every group instance
    /// reuses. Concrete fields may override it with a faster modular
    /// primitive; observable results must agree.
    fn pow_unsigned(&self, x: &Self::Elem, k: &BigUint) -> Self::Elem {
        let mut result = self.unit();
        let mut base = x.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = self.mul(&result, &base);
            }
            base = self.mul(&base, &base);
        }
        result
    }
}
