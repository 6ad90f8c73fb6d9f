//! Concrete algebraic structures: prime fields, binary fields,
//! quotient-polynomial fields and elliptic-curve groups.

pub mod binary;
pub mod curve;
pub mod quotient;
pub mod zn;

pub use binary::BinaryField;
pub use curve::{Curve, EllipticGroup, Point};
pub use quotient::QuotientField;
pub use zn::Zn;
