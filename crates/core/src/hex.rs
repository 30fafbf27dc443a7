use std::{fmt, str::FromStr};

use num_bigint::BigUint;

use crate::errors::FibError;

/// One limb of the padded dump format, least significant first in memory.
pub type Bucket = u64;

/// Hex digits needed to print a full [`Bucket`].
pub const BUCKET_HEX_DIGITS: usize = 2 * std::mem::size_of::<Bucket>();

/// Lowercase hex without prefix or leading zeros. Zero renders as `"0"`.
pub fn to_hex(value: &BigUint) -> String {
    value.to_str_radix(16)
}

/// Parse a hex literal with no `0x` prefix. Digits are case-insensitive.
pub fn parse_hex(s: &str) -> Result<BigUint, FibError> {
    if s.is_empty() {
        return Err(FibError::invalid("empty hex string"));
    }
    if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(FibError::invalid(format!("'{}' is not a hex digit in {:?}", bad, s)));
    }

    BigUint::parse_bytes(s.as_bytes(), 16)
        .ok_or_else(|| FibError::invalid(format!("malformed hex string {:?}", s)))
}

/// Bucket dump of a computed value: every bucket printed as a full
/// [`BUCKET_HEX_DIGITS`]-wide field, most significant first.
pub fn to_hex_padded(value: &BigUint) -> String {
    HexInt::from(value.clone()).to_string()
}

/// A big integer together with the number of buckets it occupies.
///
/// Parsed values remember the bucket count implied by their digit count, so
/// leading zeros in the input survive into the dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexInt {
    value: BigUint,
    buckets: usize,
}

impl HexInt {
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }
}

impl From<BigUint> for HexInt {
    fn from(value: BigUint) -> Self {
        let buckets = (value.bits() as usize).div_ceil(Bucket::BITS as usize).max(1);
        HexInt { value, buckets }
    }
}

impl FromStr for HexInt {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_hex(s)?;
        let buckets = s.len().div_ceil(BUCKET_HEX_DIGITS);
        Ok(HexInt { value, buckets })
    }
}

impl fmt::Display for HexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limbs: Vec<Bucket> = self.value.to_u64_digits();
        for i in (0..self.buckets).rev() {
            let bucket = limbs.get(i).copied().unwrap_or(0);
            write!(f, "{:0width$x}", bucket, width = BUCKET_HEX_DIGITS)?;
        }
        Ok(())
    }
}
