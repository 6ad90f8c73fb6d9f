use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating small
/// moduli at startup, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Extended Euclidean algorithm over the integers.
///
/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a*x + b*y = g`.
/// The gcd carries the sign of `a` when `b` is zero, matching the
/// recursive textbook formulation.
pub fn egcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (g, x1, y1) = egcd(b, &(a % b));
        let y = x1 - (a / b) * &y1;
        (g, y1, y)
    }
}
