pub mod algebra;
pub mod elgamal;
pub mod encoding;
pub mod error;
pub mod schemes;
pub mod structures;
pub mod utils;

pub use algebra::field::{Field, SqrtField};
pub use algebra::gcd::GcdField;
pub use algebra::group::Group;

pub use structures::binary::BinaryField;
pub use structures::curve::{Curve, EllipticGroup, Point};
pub use structures::quotient::QuotientField;
pub use structures::zn::Zn;

pub use encoding::alphabet::{Alphabet, Base64};
pub use encoding::chunk::{BaseEncoder, ChunkEncoder, LineEncoder, ListEncoder};
pub use encoding::point::{ExactPointEncoder, RandomPointEncoder};
pub use encoding::Encoder;

pub use elgamal::ElGamal;
pub use error::{Error, Result};
pub use schemes::{binary_scheme, elliptic_scheme, polynomial_scheme, prime_scheme};
pub use utils::{egcd, is_prime};
