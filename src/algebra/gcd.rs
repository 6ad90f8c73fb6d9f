use super::field::Field;

/// A field whose elements live in a Euclidean ring, enabling the
/// extended Euclidean algorithm for inverses.
///
/// The quotient structure (bit-packed GF(2) polynomials, coefficient
/// vectors over a base field) is reduced modulo a fixed modulus by the
/// group operations, but the Euclidean loop itself must run in the
/// *unreduced* ring: [`GcdField::mul_raw`] multiplies without modular
/// reduction, and the group `mul` is `normalize(mul_raw(x, y))`.
pub trait GcdField: Field {
    /// Euclidean quotient of `x` by `y`.
    ///
    /// The remainder convention matches the structure's reduction: the
    /// remainder's degree (or bit length) is strictly below `y`'s.
    /// `y` must not be the additive zero.
    fn div(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Ring multiplication without modular reduction.
    fn mul_raw(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, s, t)` with `g = gcd(x, y) = s*x + t*y` in the
    /// unreduced ring. Correctness depends only on [`GcdField::div`]
    /// strictly decreasing the remainder's size until it reaches zero.
    /// This single loop backs the inverses of every gcd-capable
    /// structure in the crate.
    fn xgcd(&self, x: &Self::Elem, y: &Self::Elem) -> (Self::Elem, Self::Elem, Self::Elem) {
        let (mut old_r, mut r) = (x.clone(), y.clone());
        let (mut old_s, mut s) = (self.unit(), self.zero());
        let (mut old_t, mut t) = (self.zero(), self.unit());

        while !self.is_zero(&r) {
            let q = self.div(&old_r, &r);

            let next_r = self.sub(&old_r, &self.mul_raw(&q, &r));
            old_r = core::mem::replace(&mut r, next_r);

            let next_s = self.sub(&old_s, &self.mul_raw(&q, &s));
            old_s = core::mem::replace(&mut s, next_s);

            let next_t = self.sub(&old_t, &self.mul_raw(&q, &t));
            old_t = core::mem::replace(&mut t, next_t);
        }

        (old_r, old_s, old_t)
    }
}
