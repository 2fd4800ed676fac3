//! Property-based tests for decimal big integer arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInteger, Sign};

    // Canonical renderings: no leading zeros, `-` only on non-zero values
    fn canonical() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("0".to_string()),
            "-?[1-9][0-9]{0,60}",
        ]
    }

    fn big_int() -> impl Strategy<Value = BigInteger> {
        canonical().prop_map(|s| BigInteger::parse(&s).unwrap())
    }

    fn has_canonical_digits(n: &BigInteger) -> bool {
        n.digit_count() == n.digits().len()
            && n.digits().last() != Some(&0)
            && (!n.is_zero() || n.sign() == Sign::Positive)
    }

    proptest! {
        #[test]
        fn round_trip(s in canonical()) {
            prop_assert_eq!(BigInteger::parse(&s).unwrap().to_string(), s);
        }

        #[test]
        fn leading_zeros_and_padding_ignored(s in "[0-9]{1,40}", zeros in 0usize..5) {
            let padded = format!("  +{}{} ", "0".repeat(zeros), s);
            let expected = s.trim_start_matches('0');
            let expected = if expected.is_empty() { "0" } else { expected };
            prop_assert_eq!(BigInteger::parse(&padded).unwrap().to_string(), expected);
        }

        #[test]
        fn agrees_with_i128(a in any::<i64>(), b in any::<i64>()) {
            let x = BigInteger::parse(&a.to_string()).unwrap();
            let y = BigInteger::parse(&b.to_string()).unwrap();
            prop_assert_eq!(BigInteger::add(&x, &y).to_string(), (a as i128 + b as i128).to_string());
            prop_assert_eq!(BigInteger::multiply(&x, &y).to_string(), (a as i128 * b as i128).to_string());
            prop_assert_eq!(x.compare_magnitude(&y), a.unsigned_abs().cmp(&b.unsigned_abs()));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(BigInteger::add(&a, &b), BigInteger::add(&b, &a));
        }

        #[test]
        fn add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                BigInteger::add(&BigInteger::add(&a, &b), &c),
                BigInteger::add(&a, &BigInteger::add(&b, &c))
            );
        }

        #[test]
        fn add_identity_and_inverse(a in big_int()) {
            prop_assert_eq!(BigInteger::add(&a, &BigInteger::zero()), a.clone());
            let zero = BigInteger::add(&a, &a.negate());
            prop_assert!(zero.is_zero());
            prop_assert_eq!(zero.sign(), Sign::Positive);
        }

        #[test]
        fn mul_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(BigInteger::multiply(&a, &b), BigInteger::multiply(&b, &a));
        }

        #[test]
        fn mul_identity_and_zero(a in big_int()) {
            prop_assert_eq!(BigInteger::multiply(&a, &BigInteger::one()), a.clone());
            prop_assert_eq!(BigInteger::multiply(&a, &BigInteger::zero()), BigInteger::zero());
        }

        #[test]
        fn distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                BigInteger::multiply(&a, &BigInteger::add(&b, &c)),
                BigInteger::add(&BigInteger::multiply(&a, &b), &BigInteger::multiply(&a, &c))
            );
        }

        #[test]
        fn mul_sign_rule(a in big_int(), b in big_int()) {
            let p = BigInteger::multiply(&a, &b);
            let expect_negative = !a.is_zero() && !b.is_zero() && (a.is_negative() != b.is_negative());
            prop_assert_eq!(p.is_negative(), expect_negative);
        }

        #[test]
        fn results_are_canonical(a in big_int(), b in big_int()) {
            prop_assert!(has_canonical_digits(&BigInteger::add(&a, &b)));
            prop_assert!(has_canonical_digits(&BigInteger::add(&a, &b.negate())));
            prop_assert!(has_canonical_digits(&BigInteger::multiply(&a, &b)));
        }

        #[test]
        fn subtraction_undoes_addition(a in big_int(), b in big_int()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn interior_whitespace_rejected(left in "[1-9][0-9]{0,10}", right in "[0-9]{1,10}") {
            let text = format!("{} {}", left, right);
            prop_assert!(BigInteger::parse(&text).is_err());
        }
    }
}
