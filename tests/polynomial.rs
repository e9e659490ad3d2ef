use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use sss_hazmat::field::Gf256;
use sss_hazmat::polynomial::{evaluate, interpolate_at_zero};

fn poly(bytes: &[u8]) -> Vec<Gf256> {
    bytes.iter().copied().map(Gf256::new).collect()
}

fn points_of(coefficients: &[Gf256], xs: &[u8]) -> Vec<(Gf256, Gf256)> {
    xs.iter()
        .map(|&x| (Gf256::new(x), evaluate(coefficients, Gf256::new(x))))
        .collect()
}

#[test]
fn evaluate_at_zero_is_constant_term() {
    let p = poly(&[0x42, 0x13, 0x37, 0xff]);
    assert_eq!(evaluate(&p, Gf256::ZERO).into_u8(), 0x42);
}

#[test]
fn evaluate_small_polynomial() {
    // 1 + 2x + 3x² at x = 2: 1 ^ (2·2) ^ (3·4) = 1 ^ 4 ^ 12
    let p = poly(&[1, 2, 3]);
    assert_eq!(evaluate(&p, Gf256::new(2)).into_u8(), 0x09);
}

#[test]
fn evaluate_constant_and_empty() {
    assert_eq!(evaluate(&poly(&[0x99]), Gf256::new(17)).into_u8(), 0x99);
    assert_eq!(evaluate(&[], Gf256::new(17)).into_u8(), 0);
}

#[test]
fn interpolation_recovers_constant_term() {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);

    for degree in 0..16usize {
        let mut bytes = vec![0u8; degree + 1];
        rng.fill_bytes(&mut bytes);
        let p = poly(&bytes);

        let xs: Vec<u8> = (1..=(degree as u8 + 1)).collect();
        let points = points_of(&p, &xs);

        assert_eq!(interpolate_at_zero(&points).into_u8(), bytes[0]);
    }
}

#[test]
fn interpolation_with_extra_points() {
    let p = poly(&[0xde, 0xad, 0xbe]);
    let points = points_of(&p, &[3, 9, 27, 81, 243]);

    assert_eq!(interpolate_at_zero(&points).into_u8(), 0xde);
}

#[test]
fn interpolation_is_order_independent() {
    let p = poly(&[0x5a, 0x01, 0x80, 0x7f]);
    let mut points = points_of(&p, &[200, 4, 77, 13]);

    let expected = interpolate_at_zero(&points).into_u8();
    points.reverse();
    assert_eq!(interpolate_at_zero(&points).into_u8(), expected);
    points.swap(0, 2);
    assert_eq!(interpolate_at_zero(&points).into_u8(), expected);
    assert_eq!(expected, 0x5a);
}

#[test]
fn interpolation_tolerates_duplicate_x() {
    let p = poly(&[0x11, 0x22]);
    let mut points = points_of(&p, &[5, 6]);
    points[1].0 = points[0].0;

    // no panic; the value itself is meaningless
    let _ = interpolate_at_zero(&points);
}

#[test]
fn interpolation_of_nothing_is_zero() {
    assert_eq!(interpolate_at_zero(&[]).into_u8(), 0);
}
