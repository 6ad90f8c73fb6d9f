//! Capability contracts implemented by every concrete number system.
//!
//! The hierarchy is `Group` → `Field` → (`GcdField`, `SqrtField`). A
//! structure value (prime field, binary field, quotient field, curve
//! group) owns its immutable configuration and hands out plain element
//! values; all operations go through `&self`. Default algorithms such
//! as binary exponentiation and the extended Euclidean loop are
//! provided once at the trait level and inherited, never duplicated
//! per structure.

pub mod field;
pub mod gcd;
pub mod group;

pub use field::{Field, SqrtField};
pub use gcd::GcdField;
pub use group::Group;
