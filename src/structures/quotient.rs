use num_bigint::BigUint;

use crate::algebra::field::Field;
use crate::algebra::gcd::GcdField;
use crate::algebra::group::Group;
use crate::error::{Error, Result};

/// Quotient-polynomial field F[x]/M(x) over any base [`Field`].
///
/// Elements are coefficient vectors, low degree first, with trailing
/// base-field zeros trimmed; the empty vector is the zero polynomial.
/// Arithmetic always builds fresh trimmed vectors (no shared backing
/// storage is truncated in place).
///
/// The modulus need not be monic: reduction scales by the inverse of
/// its leading coefficient, which the constructor computes once.
///
/// # Example
///
/// ```
/// use gamal::{Group, QuotientField, Zn};
/// use num_bigint::BigUint;
///
/// let base = Zn::new(BigUint::from(23u32));
/// // modulus x^2 + 1, irreducible over Z/23Z
/// let modulus = vec![
///     BigUint::from(1u32),
///     BigUint::from(0u32),
///     BigUint::from(1u32),
/// ];
/// let f = QuotientField::new(base, modulus).unwrap();
///
/// // x * x = x^2 ≡ -1 ≡ 22
/// let x = vec![BigUint::from(0u32), BigUint::from(1u32)];
/// assert_eq!(f.mul(&x, &x), vec![BigUint::from(22u32)]);
/// ```
#[derive(Clone, Debug)]
pub struct QuotientField<F: Field> {
    base: F,
    modulus: Vec<F::Elem>,
    // inverse of the modulus's leading coefficient, precomputed
    lc_inv: F::Elem,
}

impl<F: Field> QuotientField<F> {
    /// Build F[x]/M(x) from a base field and the modulus coefficients
    /// (low degree first).
    ///
    /// The modulus is normalized and trimmed; it must have degree at
    /// least 1 after trimming. Irreducibility is not verified; a
    /// reducible modulus surfaces later as [`Error::NotInvertible`].
    pub fn new(base: F, modulus: Vec<F::Elem>) -> Result<Self> {
        let modulus = trim(&base, modulus.into_iter().map(|c| base.normalize(c)).collect());
        if modulus.len() < 2 {
            return Err(Error::BadModulus("quotient modulus must have degree >= 1"));
        }

        let lc_inv = base.inv(&modulus[modulus.len() - 1])?;
        Ok(Self {
            base,
            modulus,
            lc_inv,
        })
    }

    /// The base field.
    pub fn base(&self) -> &F {
        &self.base
    }

    /// The modulus coefficients, low degree first.
    pub fn modulus(&self) -> &[F::Elem] {
        &self.modulus
    }

    /// Degree of the modulus polynomial.
    pub fn degree(&self) -> usize {
        self.modulus.len() - 1
    }

    /// Embed a base-field element as a constant polynomial.
    pub fn constant(&self, c: F::Elem) -> Vec<F::Elem> {
        trim(&self.base, vec![self.base.normalize(c)])
    }

    fn trim(&self, x: Vec<F::Elem>) -> Vec<F::Elem> {
        trim(&self.base, x)
    }

    /// Long-division remainder modulo `self.modulus`, eliminating
    /// leading terms from the top degree down.
    fn reduce(&self, mut x: Vec<F::Elem>) -> Vec<F::Elem> {
        let m = self.modulus.len();
        if x.len() < m {
            return self.trim(x);
        }

        for i in (m - 1..x.len()).rev() {
            let k = self.base.mul(&x[i], &self.lc_inv);
            if self.base.is_zero(&k) {
                continue;
            }
            let shift = i - (m - 1);
            for (j, mc) in self.modulus.iter().enumerate() {
                x[shift + j] = self.base.sub(&x[shift + j], &self.base.mul(mc, &k));
            }
        }
        self.trim(x)
    }
}

fn trim<F: Field>(base: &F, mut x: Vec<F::Elem>) -> Vec<F::Elem> {
    while x.last().is_some_and(|c| base.is_zero(c)) {
        x.pop();
    }
    x
}

impl<F: Field> Group for QuotientField<F> {
    type Elem = Vec<F::Elem>;

    fn order(&self) -> BigUint {
        self.base.order().pow(self.degree() as u32)
    }

    fn eq(&self, x: &Self::Elem, y: &Self::Elem) -> bool {
        self.is_zero(&self.sub(x, y))
    }

    fn normalize(&self, x: Self::Elem) -> Self::Elem {
        let x = x.into_iter().map(|c| self.base.normalize(c)).collect();
        self.reduce(x)
    }

    fn unit(&self) -> Self::Elem {
        vec![self.base.unit()]
    }

    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        self.reduce(self.mul_raw(x, y))
    }

    fn inv(&self, x: &Self::Elem) -> Result<Self::Elem> {
        if self.is_zero(x) {
            return Err(Error::DivisionByZero);
        }

        let (g, s, _) = self.xgcd(x, &self.modulus);
        if g.len() != 1 {
            // gcd has positive degree: x shares a factor with the modulus
            return Err(Error::NotInvertible);
        }

        let k = self.base.inv(&g[0])?;
        let scaled = s.iter().map(|c| self.base.mul(c, &k)).collect();
        Ok(self.reduce(scaled))
    }
}

impl<F: Field> Field for QuotientField<F> {
    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        let len = x.len().max(y.len());
        let zero = self.base.zero();
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let xi = x.get(i).unwrap_or(&zero);
            let yi = y.get(i).unwrap_or(&zero);
            out.push(self.base.add(xi, yi));
        }
        self.trim(out)
    }

    fn zero(&self) -> Self::Elem {
        Vec::new()
    }

    fn neg(&self, x: &Self::Elem) -> Self::Elem {
        self.trim(x.iter().map(|c| self.base.neg(c)).collect())
    }

    fn is_zero(&self, x: &Self::Elem) -> bool {
        x.iter().all(|c| self.base.is_zero(c))
    }
}

impl<F: Field> GcdField for QuotientField<F> {
    /// Long division that keeps the quotient instead of the remainder.
    /// Used by the shared extended-Euclid loop; the divisor may exceed
    /// the modulus degree, so this never reduces modulo `M`.
    fn div(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        let y = self.trim(y.clone());
        assert!(!y.is_empty(), "polynomial division by zero");

        let mut x = self.trim(x.clone());
        if x.len() < y.len() {
            return Vec::new();
        }

        let lc_inv = self
            .base
            .inv(&y[y.len() - 1])
            .expect("trimmed leading coefficient is nonzero");
        let mut quotient = vec![self.base.zero(); x.len() - y.len() + 1];

        for i in (y.len() - 1..x.len()).rev() {
            let k = self.base.mul(&x[i], &lc_inv);
            if self.base.is_zero(&k) {
                continue;
            }
            let shift = i - (y.len() - 1);
            for (j, yc) in y.iter().enumerate() {
                x[shift + j] = self.base.sub(&x[shift + j], &self.base.mul(yc, &k));
            }
            quotient[shift] = k;
        }
        self.trim(quotient)
    }

    /// Full convolution, degree `deg(x) + deg(y)`, no reduction.
    fn mul_raw(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        if x.is_empty() || y.is_empty() {
            return Vec::new();
        }

        let mut out = vec![self.base.zero(); x.len() + y.len() - 1];
        for (i, xc) in x.iter().enumerate() {
            for (j, yc) in y.iter().enumerate() {
                out[i + j] = self.base.add(&out[i + j], &self.base.mul(xc, yc));
            }
        }
        self.trim(out)
    }
}
