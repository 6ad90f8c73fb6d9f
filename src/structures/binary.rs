use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::algebra::field::Field;
use crate::algebra::gcd::GcdField;
use crate::algebra::group::Group;
use crate::error::{Error, Result};

/// Binary extension field GF(2^n) as bit-packed polynomials over GF(2).
///
/// Bit `i` of an element is the coefficient of `x^i`; the field is
/// defined by an irreducible modulus polynomial whose leading bit marks
/// its degree. Canonical elements have bit length strictly below the
/// modulus's. Addition is carryless (XOR), so every element is its own
/// additive inverse.
///
/// # Example
///
/// ```
/// use gamal::{BinaryField, Group};
/// use num_bigint::BigUint;
///
/// // GF(2^3) with modulus x^3 + x + 1
/// let f = BinaryField::new(BigUint::from(0b1011u32)).unwrap();
///
/// // x * (x + 1) = x^2 + x
/// let prod = f.mul(&BigUint::from(2u32), &BigUint::from(3u32));
/// assert_eq!(prod, BigUint::from(6u32));
/// ```
#[derive(Clone, Debug)]
pub struct BinaryField {
    modulus: BigUint,
}

impl BinaryField {
    /// Create GF(2^n) from its defining irreducible polynomial.
    ///
    /// Rejects polynomials of degree below 1. Irreducibility itself is
    /// not verified here; a reducible modulus surfaces later as
    /// [`Error::NotInvertible`] from `inv`.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus.bits() < 2 {
            return Err(Error::BadModulus("binary modulus must have degree >= 1"));
        }
        Ok(Self { modulus })
    }

    /// The defining polynomial.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Degree of the extension, `n = deg(modulus)`.
    pub fn degree(&self) -> u64 {
        self.modulus.bits() - 1
    }
}

impl Group for BinaryField {
    type Elem = BigUint;

    fn order(&self) -> BigUint {
        BigUint::one() << self.degree()
    }

    fn eq(&self, x: &BigUint, y: &BigUint) -> bool {
        x == y
    }

    /// Polynomial long-division remainder: XOR the modulus, shifted to
    /// align leading bits, until the degree drops below `n`.
    fn normalize(&self, mut x: BigUint) -> BigUint {
        while x.bits() >= self.modulus.bits() {
            let shift = x.bits() - self.modulus.bits();
            x ^= &self.modulus << shift;
        }
        x
    }

    fn unit(&self) -> BigUint {
        BigUint::one()
    }

    fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.normalize(self.mul_raw(x, y))
    }

    fn inv(&self, x: &BigUint) -> Result<BigUint> {
        if x.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (g, s, _) = self.xgcd(x, &self.modulus);
        if !g.is_one() {
            return Err(Error::NotInvertible);
        }
        Ok(self.normalize(s))
    }
}

impl Field for BinaryField {
    fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        x ^ y
    }

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn neg(&self, x: &BigUint) -> BigUint {
        x.clone()
    }

    fn is_zero(&self, x: &BigUint) -> bool {
        x.is_zero()
    }
}

impl GcdField for BinaryField {
    /// Long division over GF(2)[x]: cancel the current leading bit with
    /// a shifted copy of `y`, recording each shift as a quotient bit.
    fn div(&self, x: &BigUint, y: &BigUint) -> BigUint {
        assert!(!y.is_zero(), "binary polynomial division by zero");

        let mut x = x.clone();
        let mut quotient = BigUint::zero();
        while x.bits() >= y.bits() && !x.is_zero() {
            let shift = x.bits() - y.bits();
            x ^= y << shift;
            quotient.set_bit(shift, true);
        }
        quotient
    }

    /// Carryless multiply: for each set bit `i` of `x`, XOR in `y`
    /// shifted up by `i` (degree addition, not integer multiplication).
    fn mul_raw(&self, x: &BigUint, y: &BigUint) -> BigUint {
        let mut acc = BigUint::zero();
        for i in 0..x.bits() {
            if x.bit(i) {
                acc ^= y << i;
            }
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(x: u32) -> BigUint {
        BigUint::from(x)
    }

    /// GF(8) with modulus x^3 + x + 1.
    fn gf8() -> BinaryField {
        BinaryField::new(b(0b1011)).unwrap()
    }

    #[test]
    fn degenerate_modulus_rejected() {
        // degree 0
        assert!(matches!(
            BinaryField::new(b(1)),
            Err(Error::BadModulus(_))
        ));
        assert!(BinaryField::new(b(0)).is_err());
    }

    #[test]
    fn order_is_two_to_degree() {
        assert_eq!(gf8().order(), b(8));
        let aes = BinaryField::new(b(0x11b)).unwrap(); // x^8+x^4+x^3+x+1
        assert_eq!(aes.order(), b(256));
    }

    #[test]
    fn normalize_reduces_degree() {
        let f = gf8();
        // x^3 ≡ x + 1
        assert_eq!(f.normalize(b(0b1000)), b(0b011));
        // x^4 ≡ x^2 + x
        assert_eq!(f.normalize(b(0b10000)), b(0b110));
        // already canonical values are untouched
        for x in 0..8u32 {
            assert_eq!(f.normalize(b(x)), b(x));
        }
    }

    #[test]
    fn add_is_xor() {
        let f = gf8();
        assert_eq!(f.add(&b(0b101), &b(0b011)), b(0b110));
        assert_eq!(f.sub(&b(0b101), &b(0b011)), b(0b110));
        assert!(f.is_zero(&f.add(&b(5), &f.neg(&b(5)))));
    }

    #[test]
    fn mul_reduces() {
        let f = gf8();
        // x * (x + 1) = x^2 + x, no reduction needed
        assert_eq!(f.mul(&b(2), &b(3)), b(6));
        // x^2 * x = x^3 ≡ x + 1
        assert_eq!(f.mul(&b(4), &b(2)), b(3));
    }

    #[test]
    fn div_examples() {
        let f = gf8();
        // (x^3 + x + 1) / x = x^2 + 1, quotient of the modulus itself
        assert_eq!(f.div(&b(0b1011), &b(0b10)), b(0b101));
        // degree(x) < degree(y) gives quotient zero
        assert_eq!(f.div(&b(0b10), &b(0b100)), b(0));
    }

    #[test]
    fn inv_of_two_exists() {
        let f = gf8();
        let inv = f.inv(&b(2)).unwrap();
        assert_eq!(f.mul(&b(2), &inv), f.unit());
    }

    #[test]
    fn inv_all_nonzero() {
        let f = gf8();
        for x in 1..8u32 {
            let inv = f.inv(&b(x)).expect("nonzero element must be invertible");
            assert_eq!(f.mul(&b(x), &inv), f.unit());
        }
    }

    #[test]
    fn inv_of_zero_fails() {
        assert_eq!(gf8().inv(&b(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn xgcd_bezout_identity() {
        let f = gf8();
        for x in 1..8u32 {
            for y in 1..8u32 {
                let (g, s, t) = f.xgcd(&b(x), &b(y));
                let lhs = f.add(&f.mul_raw(&s, &b(x)), &f.mul_raw(&t, &b(y)));
                assert_eq!(lhs, g, "Bezout identity failed for {} {}", x, y);
            }
        }
    }

    #[test]
    fn pow_respects_group_order() {
        let f = gf8();
        // multiplicative group has order 7
        for x in 1..8u32 {
            assert_eq!(f.pow_unsigned(&b(x), &b(7)), f.unit());
        }
    }
}
