use num_bigint::BigUint;

use crate::algebra::field::{Field, SqrtField};
use crate::error::{Error, Result};
use crate::Group;

/// A projective point on a Weierstrass curve.
///
/// Coordinates are homogeneous: `(x, y, z)` and `(kx, ky, kz)` denote
/// the same point for any nonzero `k`. The point at infinity has
/// `z = 0`; the canonical representative is `(0, 1, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

/// A short Weierstrass curve `y^2 z = x^3 + a x z^2 + b z^3` over a
/// coefficient field.
///
/// The curve owns its field and parameters; the group law lives in
/// [`EllipticGroup`], which wraps a curve together with its point
/// count.
///
/// # Example
///
/// ```
/// use gamal::{Curve, Zn};
/// use num_bigint::BigUint;
///
/// let f = Zn::new(BigUint::from(23u32));
/// let curve = Curve::new(f, BigUint::from(1u32), BigUint::from(1u32));
/// assert!(curve.point(BigUint::from(3u32), BigUint::from(10u32)).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Curve<F: Field> {
    field: F,
    a: F::Elem,
    b: F::Elem,
}

impl<F: Field> Curve<F> {
    /// Build a curve over `field` with normalized parameters.
    pub fn new(field: F, a: F::Elem, b: F::Elem) -> Self {
        let a = field.normalize(a);
        let b = field.normalize(b);
        Self { field, a, b }
    }

    /// The coefficient field.
    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn a(&self) -> &F::Elem {
        &self.a
    }

    pub fn b(&self) -> &F::Elem {
        &self.b
    }

    /// `x^3 + a x + b`, the affine right-hand side.
    fn rhs_affine(&self, x: &F::Elem) -> F::Elem {
        let f = &self.field;
        let x2 = f.mul(x, x);
        let x3 = f.mul(&x2, x);
        f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b)
    }

    /// Whether a projective point satisfies the curve equation.
    pub fn check(&self, p: &Point<F::Elem>) -> bool {
        let f = &self.field;
        let lhs = f.mul(&f.mul(&p.y, &p.y), &p.z);
        let z2 = f.mul(&p.z, &p.z);
        let x2 = f.mul(&p.x, &p.x);
        let rhs = f.add(
            &f.mul(&x2, &p.x),
            &f.add(
                &f.mul(&self.a, &f.mul(&p.x, &z2)),
                &f.mul(&self.b, &f.mul(&z2, &p.z)),
            ),
        );
        f.eq(&lhs, &rhs)
    }

    /// Lift affine coordinates onto the curve.
    ///
    /// The coordinates are normalized first; a pair that does not
    /// satisfy the curve equation is rejected with
    /// [`Error::NotOnCurve`].
    pub fn point(&self, x: F::Elem, y: F::Elem) -> Result<Point<F::Elem>> {
        let p = Point::new(
            self.field.normalize(x),
            self.field.normalize(y),
            self.field.unit(),
        );
        if self.check(&p) {
            Ok(p)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Project a point back to affine `(x, y)` coordinates.
    ///
    /// Fails with [`Error::PointAtInfinity`] for the identity, which
    /// has no affine representation.
    pub fn intern(&self, p: &Point<F::Elem>) -> Result<(F::Elem, F::Elem)> {
        let f = &self.field;
        if f.is_zero(&p.z) {
            return Err(Error::PointAtInfinity);
        }
        Ok((f.true_div(&p.x, &p.z)?, f.true_div(&p.y, &p.z)?))
    }
}

impl<F: SqrtField> Curve<F> {
    /// Find a point with the given x coordinate, if one exists.
    ///
    /// Returns `None` when `x^3 + a x + b` is a non-residue. Which of
    /// the two conjugate points is returned follows the field's
    /// [`SqrtField::sqrt`].
    pub fn solve_for_x(&self, x: &F::Elem) -> Option<Point<F::Elem>> {
        let x = self.field.normalize(x.clone());
        let y = self.field.sqrt(&self.rhs_affine(&x))?;
        Some(Point::new(x, y, self.field.unit()))
    }

    /// Like [`Curve::solve_for_x`] but an absent point is an error.
    pub fn asserted(&self, x: &F::Elem) -> Result<Point<F::Elem>> {
        self.solve_for_x(x).ok_or(Error::NotOnCurve)
    }
}

/// The group of points of a [`Curve`] under chord-and-tangent addition,
/// written multiplicatively like every other [`Group`] in this crate.
///
/// The point count is supplied by the caller (curves of cryptographic
/// size come with a published order; counting points is out of scope).
#[derive(Clone, Debug)]
pub struct EllipticGroup<F: Field> {
    curve: Curve<F>,
    order: BigUint,
}

impl<F: Field> EllipticGroup<F> {
    pub fn new(curve: Curve<F>, order: BigUint) -> Self {
        Self { curve, order }
    }

    pub fn curve(&self) -> &Curve<F> {
        &self.curve
    }

    /// Whether `p` is the identity, i.e. the point at infinity.
    pub fn is_unit(&self, p: &Point<F::Elem>) -> bool {
        self.curve.field.is_zero(&p.z)
    }

    /// Tangent-line doubling in homogeneous coordinates.
    fn double(&self, p: &Point<F::Elem>) -> Point<F::Elem> {
        let f = &self.curve.field;

        let yz = f.mul(&p.y, &p.z);
        let q = f.add(&yz, &yz); // 2 y z

        let x2 = f.mul(&p.x, &p.x);
        let z2 = f.mul(&p.z, &p.z);
        let n = f.add(&f.add(&f.add(&x2, &x2), &x2), &f.mul(&self.curve.a, &z2)); // 3 x^2 + a z^2

        let y2 = f.mul(&p.y, &p.y);
        let t = f.mul(&f.mul(&p.x, &y2), &p.z);
        let t2 = f.add(&t, &t);
        let s = f.add(&t2, &t2); // 4 x y^2 z

        let u = f.sub(&f.mul(&n, &n), &f.add(&s, &s)); // n^2 - 2s

        let y4z2 = f.mul(&f.mul(&y2, &y2), &z2);
        let w2 = f.add(&y4z2, &y4z2);
        let w4 = f.add(&w2, &w2);
        let w8 = f.add(&w4, &w4); // 8 y^4 z^2

        Point::new(
            f.mul(&u, &q),
            f.sub(&f.mul(&n, &f.sub(&s, &u)), &w8),
            f.mul(&f.mul(&q, &q), &q),
        )
    }

    /// Chord addition of two distinct, non-opposite points.
    fn chord(&self, p: &Point<F::Elem>, q: &Point<F::Elem>) -> Point<F::Elem> {
        let f = &self.curve.field;

        let u = f.sub(&f.mul(&q.y, &p.z), &f.mul(&p.y, &q.z));
        let v = f.sub(&f.mul(&q.x, &p.z), &f.mul(&p.x, &q.z));

        let v2 = f.mul(&v, &v);
        let v3 = f.mul(&v2, &v);
        let v2xz = f.mul(&v2, &f.mul(&p.x, &q.z));
        let zz = f.mul(&p.z, &q.z);

        let w = f.sub(
            &f.sub(&f.mul(&f.mul(&u, &u), &zz), &v3),
            &f.add(&v2xz, &v2xz),
        );

        Point::new(
            f.mul(&v, &w),
            f.sub(
                &f.mul(&u, &f.sub(&v2xz, &w)),
                &f.mul(&v3, &f.mul(&p.y, &q.z)),
            ),
            f.mul(&v3, &zz),
        )
    }
}

impl<F: Field> Group for EllipticGroup<F> {
    type Elem = Point<F::Elem>;

    fn order(&self) -> BigUint {
        self.order.clone()
    }

    /// Projective equality by cross-multiplication; no inversion needed.
    fn eq(&self, p: &Self::Elem, q: &Self::Elem) -> bool {
        let f = &self.curve.field;
        f.eq(&f.mul(&p.x, &q.z), &f.mul(&q.x, &p.z))
            && f.eq(&f.mul(&p.y, &q.z), &f.mul(&q.y, &p.z))
    }

    /// Scale to the affine representative `(x, y, 1)`, or to the
    /// canonical `(0, 1, 0)` for the identity.
    fn normalize(&self, p: Self::Elem) -> Self::Elem {
        let f = &self.curve.field;
        let p = Point::new(
            f.normalize(p.x),
            f.normalize(p.y),
            f.normalize(p.z),
        );
        if f.is_zero(&p.z) {
            return self.unit();
        }
        let z_inv = f
            .inv(&p.z)
            .expect("nonzero coordinate must be invertible");
        Point::new(f.mul(&p.x, &z_inv), f.mul(&p.y, &z_inv), f.unit())
    }

    fn unit(&self) -> Self::Elem {
        let f = &self.curve.field;
        Point::new(f.zero(), f.unit(), f.zero())
    }

    fn mul(&self, p: &Self::Elem, q: &Self::Elem) -> Self::Elem {
        let f = &self.curve.field;
        if self.is_unit(p) {
            return q.clone();
        }
        if self.is_unit(q) {
            return p.clone();
        }
        // same x coordinate: either opposite points or a doubling
        if f.eq(&f.mul(&p.x, &q.z), &f.mul(&q.x, &p.z)) {
            if f.eq(&f.mul(&p.y, &q.z), &f.mul(&q.y, &p.z)) {
                return self.double(p);
            }
            return self.unit();
        }
        self.chord(p, q)
    }

    fn inv(&self, p: &Self::Elem) -> Result<Self::Elem> {
        let f = &self.curve.field;
        Ok(Point::new(p.x.clone(), f.neg(&p.y), p.z.clone()))
    }
}
