//! # BigInteger
//! Immutable arbitrary-precision signed integers, stored one decimal digit per element
//! with the least significant digit first.
//! # Example
//! ```
//! use decimal_bigint::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b: BigInteger = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! ```
//!

use std::fmt::{self, Display};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::cache::*;
use crate::constants::*;
use crate::error::FormatError;

pub const ZERO: BigInteger = BigInteger { sign: Sign::Positive, digit_count: 0, digits: Vec::new() };

// digits are stored least significant first, so leading zeros sit at the tail
macro_rules! trim_leading_zeros {
    ($vec: expr) => {
        while let Some(&0) = $vec.last() {
            $vec.pop();
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
    fn product(self, other: Sign) -> Sign {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}

/// A signed integer of any size.
///
/// Zero has no digits and is always [`Sign::Positive`]; every other value keeps a
/// non-zero most significant digit. Two values are equal exactly when their
/// sign and digits are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    sign: Sign,
    digit_count: usize,
    digits: Vec<u8>,
}

// construction and accessors
impl BigInteger {
    /// Builds a value from least-significant-first digits, dropping any leading zeros.
    pub(crate) fn from_digits(mut digits: Vec<u8>, sign: Sign) -> Self {
        trim_leading_zeros!(digits);
        let sign = if digits.is_empty() { Sign::Positive } else { sign };
        let value = BigInteger { sign, digit_count: digits.len(), digits };
        value.check_invariant();
        value
    }

    fn check_invariant(&self) {
        debug_assert_eq!(self.digit_count, self.digits.len(),
                         "BigInteger::check_invariant - digit count does not match the digit sequence");
        debug_assert!(self.digits.iter().all(|&d| d < RADIX),
                      "BigInteger::check_invariant - digit out of range");
        debug_assert!(self.digits.last() != Some(&0),
                      "BigInteger::check_invariant - leading zero digit");
        debug_assert!(!self.digits.is_empty() || self.sign == Sign::Positive,
                      "BigInteger::check_invariant - negative zero");
    }

    pub fn zero() -> BigInteger {
        ZERO
    }

    pub fn one() -> BigInteger {
        POS_CACHE[1].clone()
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// The digits, least significant first. Empty for zero.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digit_count == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { sign: Sign::Positive, ..self.clone() }
    }

    pub fn negate(&self) -> BigInteger {
        if self.is_zero() {
            return ZERO;
        }
        BigInteger { sign: self.sign.flip(), ..self.clone() }
    }
}

// printing
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign == Sign::Positive, "", &self.magnitude_string())
    }
}

impl BigInteger {
    fn magnitude_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        self.digits
            .iter()
            .rev()
            .map(|&d| DIGITS[d as usize])
            .collect()
    }
}

// parsing
impl BigInteger {
    /// Parses an optionally signed decimal integer.
    ///
    /// Surrounding whitespace is ignored and leading zeros are dropped, so
    /// `"  -0012 "` is -12 and `"-000"` is zero. Whitespace between digits, a
    /// lone sign or any non-digit character is rejected.
    pub fn parse(text: &str) -> Result<BigInteger, FormatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormatError::Empty);
        }

        let (sign, body, offset) = match text.as_bytes()[0] {
            b'+' => (Sign::Positive, &text[1..], 1),
            b'-' => (Sign::Negative, &text[1..], 1),
            _ => (Sign::Positive, text, 0),
        };

        if body.is_empty() {
            return Err(FormatError::MissingDigits);
        }

        if let Some((position, found)) = body.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(FormatError::InvalidDigit { found, position: position + offset });
        }

        let digits: Vec<u8> = body
            .trim_start_matches('0')
            .bytes()
            .rev()
            .map(|b| b - b'0')
            .collect();
        Ok(BigInteger::from_digits(digits, sign))
    }
}

impl FromStr for BigInteger {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInteger::parse(s)
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            let val = val as i128;
            if val < 0 {
                BigInteger::value_of(val.unsigned_abs(), Sign::Negative)
            } else {
                BigInteger::value_of(val as u128, Sign::Positive)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_integer!(i8, i16, i32, isize, i64, i128);

impl BigInteger {
    fn value_of(val: u128, sign: Sign) -> BigInteger {
        if val <= MAX_CONSTANT as u128 {
            return match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        let radix = RADIX as u128;
        let mut digits = Vec::with_capacity(MAX_U128_DIGITS);
        let mut rest = val;
        while rest != 0 {
            digits.push((rest % radix) as u8);
            rest /= radix;
        }
        BigInteger::from_digits(digits, sign)
    }
}

// comparison
impl BigInteger {
    /// Compares absolute values, ignoring both signs.
    pub fn compare_magnitude(&self, other: &BigInteger) -> Ordering {
        match self.digit_count.cmp(&other.digit_count) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let pairs = self.digits.iter().rev().zip(other.digits.iter().rev());
        for (a, b) in pairs {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            Sign::Positive => self.compare_magnitude(other),
            Sign::Negative => self.compare_magnitude(other).reverse(),
        }
    }
}

// addition
impl BigInteger {
    /// Returns `first + second`. Operands of opposite sign are subtracted.
    pub fn add(first: &BigInteger, second: &BigInteger) -> BigInteger {
        if second.is_zero() {
            return first.clone();
        }

        if first.is_zero() {
            return second.clone();
        }

        let sum = if first.sign == second.sign {
            BigInteger::from_digits(BigInteger::add_mag(&first.digits, &second.digits), first.sign)
        } else {
            match first.compare_magnitude(second) {
                Ordering::Less => {
                    let mag = BigInteger::sub_mag(&second.digits, &first.digits);
                    BigInteger::from_digits(mag, second.sign)
                },
                Ordering::Equal => ZERO,
                Ordering::Greater => {
                    let mag = BigInteger::sub_mag(&first.digits, &second.digits);
                    BigInteger::from_digits(mag, first.sign)
                },
            }
        };
        log::trace!("add: {} + {} = {}", first, second, sum);
        sum
    }

    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &d) in long.iter().enumerate() {
            let sum = d + short.get(i).copied().unwrap_or(0) + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }

    // `big` must not be smaller in magnitude than `little`
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;
        for (i, &d) in big.iter().enumerate() {
            let subtrahend = little.get(i).copied().unwrap_or(0) + borrow;
            if d >= subtrahend {
                result.push(d - subtrahend);
                borrow = 0;
            } else {
                result.push(d + RADIX - subtrahend);
                borrow = 1;
            }
        }
        debug_assert_eq!(borrow, 0, "BigInteger::sub_mag - subtrahend larger than minuend");

        result
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        BigInteger::add(&self, &rhs)
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        BigInteger::add(self, rhs)
    }
}

impl Add<&BigInteger> for BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> Self::Output {
        BigInteger::add(&self, rhs)
    }
}

impl AddAssign for BigInteger {
    fn add_assign(&mut self, rhs: Self) {
        *self = BigInteger::add(self, &rhs);
    }
}

impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        *self = BigInteger::add(self, rhs);
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| BigInteger::add(&acc, &x))
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| BigInteger::add(&acc, x))
    }
}

// negation
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        let BigInteger { sign, digit_count, digits } = self;
        if digit_count == 0 {
            return ZERO;
        }
        BigInteger { sign: sign.flip(), digit_count, digits }
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// subtraction
impl Sub for BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInteger::add(&self, &-rhs)
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInteger::add(self, &rhs.negate())
    }
}

impl Sub<&BigInteger> for BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> Self::Output {
        BigInteger::add(&self, &rhs.negate())
    }
}

impl SubAssign for BigInteger {
    fn sub_assign(&mut self, rhs: Self) {
        *self = BigInteger::add(self, &-rhs);
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        *self = BigInteger::add(self, &rhs.negate());
    }
}

// multiplication
impl BigInteger {
    /// Returns `first * second` by grade-school long multiplication.
    ///
    /// Each digit of the shorter operand yields one partial product, shifted to
    /// its position and accumulated with [`BigInteger::add`]. The cost is
    /// `O(n * m)` digit operations.
    pub fn multiply(first: &BigInteger, second: &BigInteger) -> BigInteger {
        if first.is_zero() || second.is_zero() {
            return ZERO;
        }

        let (multiplier, multiplicand) = if first.digit_count <= second.digit_count {
            (first, second)
        } else {
            (second, first)
        };

        let mut total = ZERO;
        for (shift, &digit) in multiplier.digits.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            let partial = BigInteger::mul_by_digit(&multiplicand.digits, digit, shift);
            log::trace!("multiply: partial product {} for digit {} at position {}", partial, digit, shift);
            total = BigInteger::add(&total, &partial);
        }

        let product = BigInteger::from_digits(total.digits, first.sign.product(second.sign));
        log::trace!("multiply: {} * {} = {}", first, second, product);
        product
    }

    // x * digit * 10^shift, always non-negative
    fn mul_by_digit(x: &[u8], digit: u8, shift: usize) -> BigInteger {
        let mut result = Vec::with_capacity(shift + x.len() + 1);
        result.resize(shift, 0);

        let mut carry = 0;
        for &d in x {
            let product = d * digit + carry;
            result.push(product % RADIX);
            carry = product / RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }

        BigInteger::from_digits(result, Sign::Positive)
    }
}

impl Mul for BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInteger::multiply(&self, &rhs)
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInteger::multiply(self, rhs)
    }
}

impl Mul<&BigInteger> for BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> Self::Output {
        BigInteger::multiply(&self, rhs)
    }
}

impl MulAssign for BigInteger {
    fn mul_assign(&mut self, rhs: Self) {
        *self = BigInteger::multiply(self, &rhs);
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        *self = BigInteger::multiply(self, rhs);
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| BigInteger::multiply(&acc, &x))
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| BigInteger::multiply(&acc, x))
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    BigInteger::parse(s).unwrap()
}

#[test]
fn test_parse() {
    let a = big("0012");
    assert_eq!(a.digits(), &[2, 1]);
    assert_eq!(a.digit_count(), 2);
    assert_eq!(a.to_string(), "12");

    assert_eq!(big("  +123  ").to_string(), "123");
    assert_eq!(big("-001").to_string(), "-1");
    assert_eq!(big("1023").digits(), &[3, 2, 0, 1]);
    assert_eq!(big("\t-987\n").to_string(), "-987");

    for zero in ["0", "+0", "-0", "000", "+000", "-000"] {
        let z = big(zero);
        assert!(z.is_zero(), "{:?} should be zero", zero);
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(z.digit_count(), 0);
        assert!(z.digits().is_empty());
        assert_eq!(z, ZERO);
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(BigInteger::parse(""), Err(FormatError::Empty));
    assert_eq!(BigInteger::parse("   "), Err(FormatError::Empty));
    assert_eq!(BigInteger::parse("+"), Err(FormatError::MissingDigits));
    assert_eq!(BigInteger::parse(" - "), Err(FormatError::MissingDigits));
    assert_eq!(BigInteger::parse("12 345"),
               Err(FormatError::InvalidDigit { found: ' ', position: 2 }));
    assert_eq!(BigInteger::parse("-12a"),
               Err(FormatError::InvalidDigit { found: 'a', position: 3 }));
    assert_eq!(BigInteger::parse("+-5"),
               Err(FormatError::InvalidDigit { found: '-', position: 1 }));
    assert_eq!(BigInteger::parse("00x"),
               Err(FormatError::InvalidDigit { found: 'x', position: 2 }));
    assert_eq!(BigInteger::parse("1.5"),
               Err(FormatError::InvalidDigit { found: '.', position: 1 }));
    assert!(BigInteger::parse("١٢").is_err());
    assert!("12-".parse::<BigInteger>().is_err());
}

#[test]
fn test_to_string() {
    assert_eq!(ZERO.to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    let digits = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(digits).to_string(), digits);
    assert_eq!(big(&format!("-{}", digits)).to_string(), format!("-{}", digits));
    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
    assert_eq!(big("+42").to_string(), "42");
    assert_eq!(format!("{}", big("42")), "42");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:+}", ZERO), "+0");
    assert_eq!(format!("{:+}", big("-42")), "-42");
}

#[test]
fn test_compare_mag() {
    assert_eq!(big("123").compare_magnitude(&big("-124")), Ordering::Less);
    assert_eq!(big("-999").compare_magnitude(&big("1000")), Ordering::Less);
    assert_eq!(big("-500").compare_magnitude(&big("500")), Ordering::Equal);
    assert_eq!(big("501").compare_magnitude(&big("500")), Ordering::Greater);
    assert_eq!(big("0").compare_magnitude(&big("-0")), Ordering::Equal);
    assert_eq!(big("0").compare_magnitude(&big("1")), Ordering::Less);
    assert_eq!(big("90000").compare_magnitude(&big("19999")), Ordering::Greater);
}

#[test]
fn test_ord() {
    let mut values: Vec<BigInteger> = ["5", "-5", "0", "-1000", "999", "-4"].iter().map(|s| big(s)).collect();
    values.sort();
    let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(sorted, ["-1000", "-5", "-4", "0", "5", "999"]);
}

#[test]
fn test_add() {
    assert_eq!(BigInteger::add(&big("999"), &big("1")).to_string(), "1000");
    assert_eq!(BigInteger::add(&big("1000"), &big("-999")).to_string(), "1");
    assert_eq!(BigInteger::add(&big("-5"), &big("5")).to_string(), "0");
    assert_eq!(BigInteger::add(&big("-5"), &big("5")).sign(), Sign::Positive);
    assert_eq!(BigInteger::add(&big("-999"), &big("1000")).to_string(), "1");
    assert_eq!(BigInteger::add(&big("999"), &big("-1000")).to_string(), "-1");
    assert_eq!(BigInteger::add(&big("-1"), &big("-99999")).to_string(), "-100000");
    assert_eq!(BigInteger::add(&big("12"), &big("0")).to_string(), "12");
    assert_eq!(BigInteger::add(&big("0"), &big("-12")).to_string(), "-12");
    assert_eq!(BigInteger::add(&big("100000000000000000000"), &big("-1")).to_string(),
               "99999999999999999999");
    assert_eq!(BigInteger::add(&big("1"), &big("-100000000000000000000")).to_string(),
               "-99999999999999999999");
    assert_eq!(BigInteger::add(&big("123456789"), &big("-123456788")).digits(), &[1]);
}

#[test]
fn test_add_does_not_mutate() {
    let a = big("1000");
    let b = big("-999");
    let a_before = a.clone();
    let b_before = b.clone();
    let first = BigInteger::add(&a, &b);
    let second = BigInteger::add(&a, &b);
    assert_eq!(first, second);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_sub() {
    assert_eq!((big("10") - big("25")).to_string(), "-15");
    assert_eq!((&big("-10") - &big("-25")).to_string(), "15");
    let mut x = big("7");
    x -= big("7");
    assert!(x.is_zero());
    x -= &big("3");
    assert_eq!(x.to_string(), "-3");
}

#[test]
fn test_mul() {
    assert_eq!(BigInteger::multiply(&big("123"), &big("-2")).to_string(), "-246");
    assert_eq!(BigInteger::multiply(&big("-123"), &big("-2")).to_string(), "246");
    assert_eq!(BigInteger::multiply(&big("-123"), &big("0")).to_string(), "0");
    assert_eq!(BigInteger::multiply(&big("-123"), &big("0")).sign(), Sign::Positive);
    assert_eq!(BigInteger::multiply(&big("99"), &big("99")).to_string(), "9801");
    assert_eq!(BigInteger::multiply(&big("105"), &big("1001")).to_string(), "105105");

    let a = big("10000000000000000");
    let b = big("3001");
    let result = big("30010000000000000000");
    assert_eq!(result, &a * &b);
    assert_eq!(result, b * a);

    let a = big("10000000000000000");
    let b = big("30000000000000000");
    let result = big("300000000000000000000000000000000");
    assert_eq!(a * b, result);

    let a = big("123456789012345678901234567890");
    let b = big("-987654321098765432109876543210");
    let result = big("-121932631137021795226185032733622923332237463801111263526900");
    assert_eq!(&a * &b, result);
}

#[test]
fn test_mul_does_not_mutate() {
    let a = big("-4321");
    let b = big("98765");
    let a_before = a.clone();
    let b_before = b.clone();
    let p = BigInteger::multiply(&a, &b);
    assert_eq!(p.to_string(), "-426763565");
    assert_eq!(BigInteger::multiply(&a, &b), p);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_mul_by_digit() {
    let p = BigInteger::mul_by_digit(&[9, 9, 9], 9, 2);
    assert_eq!(p.to_string(), "899100");
    assert_eq!(p.digit_count(), 6);
}

#[test]
fn test_from() {
    assert_eq!(BigInteger::from(0u8), ZERO);
    assert_eq!(BigInteger::from(12i8).to_string(), "12");
    assert_eq!(BigInteger::from(-16i16).to_string(), "-16");
    assert_eq!(BigInteger::from(-17i32).to_string(), "-17");
    assert_eq!(BigInteger::from(-10000isize).to_string(), "-10000");
    assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInteger::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigInteger::from(u128::MAX).to_string(), u128::MAX.to_string());
}

#[test]
fn test_neg_and_abs() {
    let a = big("-42");
    assert_eq!(a.negate().to_string(), "42");
    assert_eq!((-&a).to_string(), "42");
    assert_eq!(a.abs().to_string(), "42");
    assert_eq!(a.to_string(), "-42");
    assert_eq!(ZERO.negate().sign(), Sign::Positive);
    assert_eq!((-ZERO).sign(), Sign::Positive);
}

#[test]
fn test_sum_and_product() {
    let values: Vec<BigInteger> = (1..=25i32).map(BigInteger::from).collect();
    let sum: BigInteger = values.iter().sum();
    assert_eq!(sum.to_string(), "325");
    let factorial: BigInteger = values.into_iter().product();
    assert_eq!(factorial.to_string(), "15511210043330985984000000");
    let empty: Vec<BigInteger> = Vec::new();
    assert_eq!(empty.iter().product::<BigInteger>(), BigInteger::one());
}
