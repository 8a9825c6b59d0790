//! Property tests for arbitrary precision numbers, checked against `u128`
//! where the values fit and against the language itself where they don't.

mod common;
use common::*;
use proptest::prelude::*;
use recdef::mach::Number;

fn n(v: u128) -> Number {
    Number::from(v)
}

proptest! {
    #[test]
    fn decimal_round_trip(s in "[0-9]{1,60}") {
        let expected = match s.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let parsed: Number = s.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), expected);
    }

    #[test]
    fn matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (u128::from(a), u128::from(b));
        prop_assert_eq!(n(a) + n(b), n(a + b));
        prop_assert_eq!(n(a) * n(b), n(a * b));
        prop_assert_eq!(n(a) - n(b), n(a.saturating_sub(b)));
        if b != 0 {
            prop_assert_eq!(n(a) / n(b), n(a / b));
            prop_assert_eq!(n(a) % n(b), n(a % b));
        }
        prop_assert_eq!(n(a) < n(b), a < b);
        prop_assert_eq!(n(a).to_string(), a.to_string());
    }

    #[test]
    fn commutative(a in "[1-9][0-9]{0,40}", b in "[1-9][0-9]{0,40}") {
        let (a, b) = (Number::from_digits(&a), Number::from_digits(&b));
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn subtraction_saturates(a in "[0-9]{1,40}", b in "[0-9]{1,40}") {
        let (a, b) = (Number::from_digits(&a), Number::from_digits(&b));
        let difference = &a - &b;
        if a < b {
            prop_assert!(difference.is_zero());
        } else {
            prop_assert_eq!(&difference + &b, a);
        }
    }

    #[test]
    fn division_identity(a in "[0-9]{1,50}", b in "[1-9][0-9]{0,25}") {
        let (a, b) = (Number::from_digits(&a), Number::from_digits(&b));
        let (quotient, remainder) = a.div_rem(&b);
        prop_assert!(remainder < b);
        prop_assert_eq!(&(&quotient * &b) + &remainder, a);
    }

    #[test]
    fn division_by_zero_is_zero(a in "[0-9]{1,30}") {
        let a = Number::from_digits(&a);
        prop_assert!((&a / &Number::zero()).is_zero());
        prop_assert!((&a % &Number::zero()).is_zero());
    }

    #[test]
    fn program_arithmetic(a in any::<u32>(), b in 1..u32::MAX) {
        let source = format!("a = {}\nb = {}\nprint a / b * b + a % b\nprint a * b", a, b);
        let expected = format!("{}\n{}\n", a, u64::from(a) * u64::from(b));
        prop_assert_eq!(exec_ok(&source, ""), expected);
    }
}
