//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use gamal::{Curve, Point, Zn};
use num_bigint::BigUint;

fn b(x: u32) -> BigUint {
    BigUint::from(x)
}

#[test]
fn point_roundtrip() {
    let p = Point::new(b(3), b(10), b(1));
    let json = serde_json::to_string(&p).unwrap();
    let q: Point<BigUint> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn identity_point_roundtrip() {
    let p = Point::new(b(0), b(1), b(0));
    let json = serde_json::to_string(&p).unwrap();
    let q: Point<BigUint> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn deserialized_point_still_on_curve() {
    let curve = Curve::new(Zn::new(b(23)), b(1), b(1));
    let p = curve.point(b(9), b(7)).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    let q: Point<BigUint> = serde_json::from_str(&json).unwrap();
    assert!(curve.check(&q));
}
