use celeritas::arithmetic::{self, Operation};
use celeritas::utils::{levenshtein, SuggestionMatcher};
use celeritas::ArithmeticError;
use proptest::prelude::*;
use proptest::test_runner::Config;

/// Reference fold built on the standard checked operations
fn checked_fold(op: Operation, numbers: &[i64]) -> Option<i64> {
    match op {
        Operation::Add => numbers.iter().try_fold(0i64, |acc, &x| acc.checked_add(x)),
        Operation::Subtract => numbers.iter().try_fold(0i64, |acc, &x| acc.checked_sub(x)),
        Operation::Multiply => {
            let mut product = 1i64;
            for &x in numbers {
                if x == 0 {
                    return Some(0);
                }
                product = product.checked_mul(x)?;
            }
            Some(product)
        }
        Operation::Divide | Operation::Modulus => unreachable!("not folded from a seed"),
    }
}

fn edge_heavy_i64() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(i64::MAX),
        Just(i64::MIN),
        Just(0i64),
        Just(-1i64),
        Just(1i64),
        -1_000i64..1_000i64,
        any::<i64>(),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero(a in "\\PC{0,16}") {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn distance_bounded_by_lengths(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let d = levenshtein(&a, &b);
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    #[test]
    fn distance_matches_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn suggestion_is_a_nearest_candidate(
        query in "[a-z]{1,8}",
        candidates in prop::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let matcher = SuggestionMatcher::new(usize::MAX, true);
        let best = matcher.closest_match(&query, &candidates).expect("unbounded threshold");
        let min = candidates.iter().map(|c| levenshtein(&query, c)).min().unwrap();
        prop_assert_eq!(best.distance, min);

        // First candidate at that distance wins
        let first = candidates.iter().find(|c| levenshtein(&query, c) == min).unwrap();
        prop_assert_eq!(&best.value, first);
    }

    #[test]
    fn checked_ops_agree_with_std(
        op in prop_oneof![
            Just(Operation::Add),
            Just(Operation::Subtract),
            Just(Operation::Multiply),
        ],
        numbers in prop::collection::vec(edge_heavy_i64(), 0..6),
    ) {
        let ours = arithmetic::compute(op, &numbers);
        match checked_fold(op, &numbers) {
            Some(expected) => prop_assert_eq!(ours, Ok(expected)),
            None => prop_assert!(
                matches!(ours, Err(ArithmeticError::Overflow { .. })),
                "expected overflow, got {:?}",
                ours
            ),
        }
    }

    #[test]
    fn divide_agrees_with_checked_div(numbers in prop::collection::vec(edge_heavy_i64(), 1..5)) {
        let ours = arithmetic::compute(Operation::Divide, &numbers);

        let mut acc = numbers[0];
        let mut expected = Ok(acc);
        for &x in &numbers[1..] {
            if x == 0 {
                expected = Err("zero");
                break;
            }
            match acc.checked_div(x) {
                Some(q) => acc = q,
                None => {
                    expected = Err("overflow");
                    break;
                }
            }
            expected = Ok(acc);
        }

        match expected {
            Ok(v) => prop_assert_eq!(ours, Ok(v)),
            Err("zero") => prop_assert!(
                matches!(ours, Err(ArithmeticError::DivideByZero { .. })),
                "expected division by zero, got {:?}",
                ours
            ),
            Err(_) => prop_assert!(
                matches!(ours, Err(ArithmeticError::Overflow { .. })),
                "expected overflow, got {:?}",
                ours
            ),
        }
    }

    #[test]
    fn modulus_never_overflows(numbers in prop::collection::vec(edge_heavy_i64(), 1..5)) {
        let ours = arithmetic::compute(Operation::Modulus, &numbers);
        if numbers[1..].contains(&0) {
            prop_assert!(
                matches!(ours, Err(ArithmeticError::DivideByZero { .. })),
                "expected division by zero, got {:?}",
                ours
            );
        } else {
            let v = ours.expect("modulus only fails on zero");
            prop_assert!(v.unsigned_abs() <= numbers[0].unsigned_abs());
        }
    }

    #[test]
    fn compute_is_pure(
        op in prop_oneof![
            Just(Operation::Add),
            Just(Operation::Subtract),
            Just(Operation::Multiply),
            Just(Operation::Divide),
            Just(Operation::Modulus),
        ],
        numbers in prop::collection::vec(edge_heavy_i64(), 0..6),
    ) {
        prop_assert_eq!(arithmetic::compute(op, &numbers), arithmetic::compute(op, &numbers));
    }
}
