use lazy_static::*;

use crate::BigInteger;
use crate::big_integer::Sign;
use crate::constants::*;

fn small(val: usize, sign: Sign) -> BigInteger {
    let mut digits = Vec::with_capacity(2);
    let mut rest = val;
    while rest != 0 {
        digits.push((rest % RADIX as usize) as u8);
        rest /= RADIX as usize;
    }
    BigInteger::from_digits(digits, sign)
}

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInteger> = (0..=MAX_CONSTANT)
        .map(|n| small(n, Sign::Positive))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInteger> = (0..=MAX_CONSTANT)
        .map(|n| small(n, Sign::Negative))
        .collect();
}

#[test]
fn test_cache_is_canonical() {
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
    assert!(POS_CACHE[0].is_zero());
    assert!(NEG_CACHE[0].is_zero());
    assert_eq!(NEG_CACHE[0].sign(), Sign::Positive);
    assert_eq!(POS_CACHE[10].digits(), &[0, 1]);
    assert_eq!(NEG_CACHE[16].to_string(), "-16");
    assert_eq!(POS_CACHE[7].to_string(), "7");
}
