use num_bigint::{BigInt, Sign};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortdec::{decode, encode, Decimal, SortableDecimal, MAX_PRECISION, STRING_SIZE};

const SAMPLES: usize = 10_000;

/// Helper: a random value with MAX_PRECISION random digits (leading zeros allowed)
fn random_decimal(rng: &mut StdRng, fixed_scale: bool) -> Decimal {
    let digits: String = (0..MAX_PRECISION)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    let unscaled: BigInt = digits.parse().unwrap();
    let scale = if fixed_scale { 0 } else { rng.gen::<i32>() };
    let value = Decimal::new(unscaled, scale);
    if rng.gen_bool(0.5) {
        value
    } else {
        -value
    }
}

/// Sort once numerically and once by encoded string; both permutations must
/// match and every sorted string must decode to the matching sorted value.
fn check_random_sort_order(fixed_scale: bool) {
    let mut rng = StdRng::seed_from_u64(0);
    let decimals: Vec<Decimal> = (0..SAMPLES)
        .map(|_| random_decimal(&mut rng, fixed_scale))
        .collect();
    let strings: Vec<String> = decimals.iter().map(encode).collect();

    let mut by_value: Vec<usize> = (0..SAMPLES).collect();
    by_value.sort_by(|&a, &b| decimals[a].cmp(&decimals[b]));
    let mut by_string: Vec<usize> = (0..SAMPLES).collect();
    by_string.sort_by(|&a, &b| strings[a].cmp(&strings[b]));
    assert_eq!(by_value, by_string, "numeric and string order disagree");

    for (&value_index, &string_index) in by_value.iter().zip(&by_string) {
        let recreated = decode(&strings[string_index]).unwrap();
        assert_eq!(recreated, decimals[value_index]);
    }
}

#[test]
fn test_random_values_sort_order() {
    check_random_sort_order(false);
}

#[test]
fn test_random_values_sort_order_fixed_exponent() {
    check_random_sort_order(true);
}

#[test]
fn test_sortable_keys_sort_like_values() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut decimals: Vec<Decimal> = (0..1_000)
        .map(|_| random_decimal(&mut rng, false))
        .collect();
    let mut keys: Vec<SortableDecimal> = decimals.iter().map(SortableDecimal::from).collect();

    decimals.sort();
    keys.sort();

    let decoded: Vec<Decimal> = keys.iter().map(|k| k.decode().unwrap()).collect();
    assert_eq!(decoded, decimals);
}

// =============================================================================
// Properties
// =============================================================================

/// Decimals with between 1 and `max_digits` digits and any 32-bit scale
fn decimal_strategy(max_digits: usize) -> impl Strategy<Value = Decimal> {
    (
        proptest::collection::vec(0u8..10, 1..=max_digits),
        any::<i32>(),
        any::<bool>(),
    )
        .prop_map(|(digits, scale, negative)| {
            let sign = if negative { Sign::Minus } else { Sign::Plus };
            let unscaled = BigInt::from_radix_be(sign, &digits, 10).unwrap();
            Decimal::new(unscaled, scale)
        })
}

/// Helper: drop digits past MAX_PRECISION, keeping the value's magnitude
fn truncate_to_precision(value: &Decimal) -> Decimal {
    let excess = value.precision().saturating_sub(MAX_PRECISION);
    if excess == 0 {
        return value.clone();
    }
    let excess = u32::try_from(excess).unwrap();
    let unscaled = value.unscaled() / BigInt::from(10u32).pow(excess);
    let scale = i64::from(value.scale()) - i64::from(excess);
    match i32::try_from(scale) {
        Ok(scale) => Decimal::new(unscaled, scale),
        Err(_) => {
            let padding = u32::try_from(i64::from(i32::MIN) - scale).unwrap();
            Decimal::new(unscaled * BigInt::from(10u32).pow(padding), i32::MIN)
        }
    }
}

/// Decimals wider than MAX_PRECISION at scales near i32::MIN or i32::MAX
fn wide_extreme_strategy() -> impl Strategy<Value = Decimal> {
    (
        proptest::collection::vec(0u8..10, MAX_PRECISION + 1..=2 * MAX_PRECISION),
        prop_oneof![i32::MIN..i32::MIN + 300, i32::MAX - 300..=i32::MAX],
        any::<bool>(),
    )
        .prop_map(|(mut digits, scale, negative)| {
            digits[0] = digits[0].max(1);
            let sign = if negative { Sign::Minus } else { Sign::Plus };
            let unscaled = BigInt::from_radix_be(sign, &digits, 10).unwrap();
            Decimal::new(unscaled, scale)
        })
}

proptest! {
    #[test]
    fn roundtrip_within_precision(value in decimal_strategy(MAX_PRECISION)) {
        let encoded = encode(&value);
        prop_assert_eq!(encoded.len(), STRING_SIZE);
        prop_assert_eq!(decode(&encoded).unwrap(), value);
    }

    #[test]
    fn encoded_order_matches_numeric_order(
        left in decimal_strategy(MAX_PRECISION),
        right in decimal_strategy(MAX_PRECISION),
    ) {
        prop_assert_eq!(left.cmp(&right), encode(&left).cmp(&encode(&right)));
    }

    #[test]
    fn nearby_scales_keep_order(
        value in decimal_strategy(20),
        shift in 1i32..5,
    ) {
        // Same unscaled digits, smaller scale: larger magnitude
        let scale = value.scale().saturating_sub(shift);
        let bigger = Decimal::new(value.unscaled().clone(), scale);
        prop_assert_eq!(value.cmp(&bigger), encode(&value).cmp(&encode(&bigger)));
    }

    #[test]
    fn truncation_never_inverts_order(
        left in decimal_strategy(2 * MAX_PRECISION),
        right in decimal_strategy(2 * MAX_PRECISION),
    ) {
        let (low, high) = if left <= right { (left, right) } else { (right, left) };
        prop_assert!(encode(&low) <= encode(&high));
        prop_assert_eq!(encode(&low).len(), STRING_SIZE);
        prop_assert_eq!(decode(&encode(&low)).unwrap(), truncate_to_precision(&low));
        prop_assert_eq!(decode(&encode(&high)).unwrap(), truncate_to_precision(&high));
    }

    #[test]
    fn truncated_values_decode_at_extreme_scales(value in wide_extreme_strategy()) {
        let encoded = encode(&value);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(&decoded, &truncate_to_precision(&value));
        prop_assert_eq!(encode(&decoded), encoded);
    }

    #[test]
    fn decode_accepts_only_canonical_strings(
        s in "[-=_][-_][0-9a-f]{8},[0-9]{100}",
    ) {
        if let Ok(value) = decode(&s) {
            prop_assert_eq!(encode(&value), s);
        }
    }

    #[test]
    fn decode_never_panics(s in "\\PC{0,120}") {
        let _ = decode(&s);
    }
}
