/// Every digit of a [`BigInteger`](crate::BigInteger) is stored in this base.
pub const RADIX: u8 = 10;

pub const DIGITS: [char; RADIX as usize] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Largest magnitude kept in the small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// Number of decimal digits needed to print `u128::MAX`.
pub const MAX_U128_DIGITS: usize = 39;
