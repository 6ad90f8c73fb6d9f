use super::group::Group;

/// A commutative field.
///
/// Extends the multiplicative [`Group`] with a compatible addition, its
/// identity, and negation. Subtraction is derived and never overridden.
pub trait Field: Group {
    /// Field addition.
    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Additive inverse.
    fn neg(&self, x: &Self::Elem) -> Self::Elem;

    /// Whether `x` is the additive identity.
    ///
    /// Holds exactly when `eq(x, zero())`; concrete structures override
    /// this with a direct representation check.
    fn is_zero(&self, x: &Self::Elem) -> bool {
        self.eq(x, &self.zero())
    }

    /// `x - y`, defined as `add(x, neg(y))`.
    fn sub(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        self.add(x, &self.neg(y))
    }
}

/// A field with (partial) square-root extraction.
pub trait SqrtField: Field {
    /// A square root of `x`, if one exists.
    ///
    /// Returns `None` when `x` is a non-residue. When two roots exist,
    /// no guarantee is made about which one is returned.
    fn sqrt(&self, x: &Self::Elem) -> Option<Self::Elem>;
}
