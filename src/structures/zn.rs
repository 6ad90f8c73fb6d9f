use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::algebra::field::{Field, SqrtField};
use crate::algebra::group::Group;
use crate::error::{Error, Result};
use crate::utils::{egcd, is_prime};

/// Prime field Z/NZ with an arbitrary-precision modulus.
///
/// Elements are `BigUint` representatives in `[0, N)`. The modulus is
/// fixed at construction and never mutated.
///
/// # Example
///
/// ```
/// use gamal::{Group, Zn};
/// use num_bigint::BigUint;
///
/// let f = Zn::new(BigUint::from(23u32));
/// let five = BigUint::from(5u32);
///
/// // 5 * 14 = 70 ≡ 1 (mod 23)
/// assert_eq!(f.inv(&five).unwrap(), BigUint::from(14u32));
/// assert_eq!(f.mul(&five, &f.inv(&five).unwrap()), f.unit());
/// ```
#[derive(Clone, Debug)]
pub struct Zn {
    n: BigUint,
}

impl Zn {
    /// Create the field Z/NZ.
    ///
    /// `N` must be prime for field behavior. Primality is debug-asserted
    /// for moduli that fit in a `u64`; larger moduli are taken on trust
    /// (trial division is impractical at cryptographic sizes).
    pub fn new(n: BigUint) -> Self {
        debug_assert!(n > BigUint::one(), "Zn modulus must exceed 1");
        debug_assert!(
            n.to_u64().map_or(true, is_prime),
            "Zn modulus {} is not prime",
            n
        );
        Self { n }
    }

    /// The modulus `N`.
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }
}

impl Group for Zn {
    type Elem = BigUint;

    fn order(&self) -> BigUint {
        self.n.clone()
    }

    fn eq(&self, x: &BigUint, y: &BigUint) -> bool {
        x % &self.n == y % &self.n
    }

    fn normalize(&self, x: BigUint) -> BigUint {
        x % &self.n
    }

    fn unit(&self) -> BigUint {
        BigUint::one()
    }

    fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.n
    }

    /// Multiplicative inverse via the extended Euclidean algorithm on
    /// plain integers (the specialization of the generic loop for Z).
    fn inv(&self, x: &BigUint) -> Result<BigUint> {
        let x = self.normalize(x.clone());
        if x.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let n = BigInt::from(self.n.clone());
        let (g, s, _) = egcd(&BigInt::from(x), &n);
        if !g.is_one() {
            return Err(Error::NotInvertible);
        }

        Ok(s.mod_floor(&n).magnitude().clone())
    }

    /// Overrides the generic square-and-multiply with `BigUint::modpow`.
    fn pow_unsigned(&self, x: &BigUint, k: &BigUint) -> BigUint {
        if k.is_zero() {
            return self.unit();
        }
        x.modpow(k, &self.n)
    }
}

impl Field for Zn {
    fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x + y) % &self.n
    }

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn neg(&self, x: &BigUint) -> BigUint {
        (&self.n - x % &self.n) % &self.n
    }
}

impl SqrtField for Zn {
    /// Square root for moduli with `N ≡ 3 (mod 4)`.
    ///
    /// Computes the candidate `x^((N+1)/4)` and returns it only if its
    /// square really is `x`; otherwise `x` is a non-residue and `None`
    /// is returned.
    ///
    /// # Panics
    ///
    /// Panics if `N % 4 != 3`; other residue classes would need
    /// Tonelli-Shanks and are outside this field's contract.
    fn sqrt(&self, x: &BigUint) -> Option<BigUint> {
        assert!(
            &self.n % 4u32 == BigUint::from(3u32),
            "Zn::sqrt requires N ≡ 3 (mod 4), got N = {}",
            self.n
        );

        let x = self.normalize(x.clone());
        let exp = (&self.n + BigUint::one()) >> 2;
        let root = x.modpow(&exp, &self.n);
        if (&root * &root) % &self.n == x {
            Some(root)
        } else {
            None
        }
    }
}
