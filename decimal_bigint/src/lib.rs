//! Decimal Big Integer \
//! This crate provides:
//! - [`BigInteger`]: Immutable arbitrary-precision signed integers, stored one decimal
//!   digit at a time. Supports parsing, addition, subtraction through sign handling,
//!   multiplication, magnitude comparison and rendering.
//! - [`FormatError`]: the reason a string could not be parsed into a [`BigInteger`].
//!
//! Intermediate steps of `add` and `multiply` are reported through the [`log`] facade at
//! `trace` level; nothing is emitted unless the caller installs a logger.

mod big_integer;
mod cache;
mod constants;
mod error;
mod proptests;

pub use big_integer::{BigInteger, Sign};
pub use error::FormatError;

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&b - &a).to_string(), "-9100000000000");
    }

    #[test]
    fn scenarios() {
        let parse = |s: &str| BigInteger::parse(s).unwrap();
        assert_eq!(parse("0012").to_string(), "12");
        assert_eq!(BigInteger::add(&parse("999"), &parse("1")).to_string(), "1000");
        assert_eq!(BigInteger::add(&parse("1000"), &parse("-999")).to_string(), "1");
        assert_eq!(BigInteger::multiply(&parse("123"), &parse("-2")).to_string(), "-246");
        assert_eq!(BigInteger::add(&parse("-5"), &parse("5")).to_string(), "0");
        assert!(BigInteger::parse("12 345").is_err());
    }

    #[test]
    fn shared_across_threads() {
        let a: BigInteger = "-123456789123456789".parse().unwrap();
        let b: BigInteger = "987654321987654321".parse().unwrap();
        let expected = BigInteger::multiply(&a, &b);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| BigInteger::multiply(&a, &b)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
