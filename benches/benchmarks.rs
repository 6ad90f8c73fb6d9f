//! Benchmarks for gamal field, curve and scheme operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gamal::{
    elliptic_scheme, prime_scheme, BinaryField, Curve, EllipticGroup, GcdField, Group, SqrtField,
    Zn,
};

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
}

fn p256_group() -> EllipticGroup<Zn> {
    let p = hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    let a = &p - 3u32;
    let b = hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    let order = hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    EllipticGroup::new(Curve::new(Zn::new(p), a, b), order)
}

fn p256_generator(group: &EllipticGroup<Zn>) -> gamal::Point<BigUint> {
    let gx = hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    let gy = hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");
    group.curve().point(gx, gy).unwrap()
}

fn bench_prime_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("Zn Operations");

    let f = Zn::new(hex(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    ));
    let a = hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    let b = hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

    group.bench_function("mul", |bencher| {
        bencher.iter(|| f.mul(black_box(&a), black_box(&b)))
    });

    group.bench_function("inv", |bencher| bencher.iter(|| f.inv(black_box(&a))));

    group.bench_function("pow_256bit", |bencher| {
        bencher.iter(|| f.pow_unsigned(black_box(&a), black_box(&b)))
    });

    group.bench_function("sqrt", |bencher| {
        let square = f.mul(&a, &a);
        bencher.iter(|| f.sqrt(black_box(&square)))
    });

    group.finish();
}

fn bench_binary_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("BinaryField Operations");

    // x^127 + x + 1, a primitive trinomial
    let modulus = (BigUint::from(1u32) << 127u32) | BigUint::from(3u32);
    let f = BinaryField::new(modulus).unwrap();
    let a = hex("6b17d1f2e12c4247f8bce6e563a440f2");
    let b = hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e16");
    let a = f.normalize(a);
    let b = f.normalize(b);

    group.bench_function("mul", |bencher| {
        bencher.iter(|| f.mul(black_box(&a), black_box(&b)))
    });

    group.bench_function("inv", |bencher| bencher.iter(|| f.inv(black_box(&a))));

    group.bench_function("xgcd", |bencher| {
        bencher.iter(|| f.xgcd(black_box(&a), black_box(&b)))
    });

    group.finish();
}

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("P-256 Operations");

    let g = p256_group();
    let generator = p256_generator(&g);
    let doubled = g.mul(&generator, &generator);

    group.bench_function("point_add", |bencher| {
        bencher.iter(|| g.mul(black_box(&generator), black_box(&doubled)))
    });

    group.bench_function("point_double", |bencher| {
        bencher.iter(|| g.mul(black_box(&generator), black_box(&generator)))
    });

    group.bench_function("scalar_mul_256bit", |bencher| {
        let k = &g.order() - 1u32;
        bencher.iter(|| g.pow_unsigned(black_box(&generator), black_box(&k)))
    });

    group.finish();
}

fn bench_elgamal(c: &mut Criterion) {
    let mut group = c.benchmark_group("ElGamal");

    let text = "the quick brown fox jumps over the lazy dog";

    let prime = prime_scheme(
        Zn::new(BigUint::from(2_147_483_647u32)),
        BigUint::from(7u32),
    );
    let mut rng = StdRng::seed_from_u64(1);
    let (private, public) = prime.generate_keys(&mut rng);
    let cipher = prime.encrypt(&mut rng, &public, text).unwrap();

    group.bench_function("prime_encrypt", |bencher| {
        let mut rng = StdRng::seed_from_u64(2);
        bencher.iter(|| prime.encrypt(&mut rng, black_box(&public), black_box(text)))
    });

    group.bench_function("prime_decrypt", |bencher| {
        bencher.iter(|| prime.decrypt(black_box(&private), black_box(&cipher)))
    });

    let elliptic = elliptic_scheme(
        p256_group(),
        p256_generator(&p256_group()),
        StdRng::seed_from_u64(3),
    );
    let mut rng = StdRng::seed_from_u64(4);
    let (ec_private, ec_public) = elliptic.generate_keys(&mut rng);
    let ec_cipher = elliptic.encrypt(&mut rng, &ec_public, text).unwrap();

    group.bench_function("p256_encrypt", |bencher| {
        let mut rng = StdRng::seed_from_u64(5);
        bencher.iter(|| elliptic.encrypt(&mut rng, black_box(&ec_public), black_box(text)))
    });

    group.bench_function("p256_decrypt", |bencher| {
        bencher.iter(|| elliptic.decrypt(black_box(&ec_private), black_box(&ec_cipher)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_prime_field,
    bench_binary_field,
    bench_curve,
    bench_elgamal
);
criterion_main!(benches);
