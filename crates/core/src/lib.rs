//! Iterative big-integer Fibonacci computation with hexadecimal output.
//!
//! The sequence here is seeded with `F(0) = F(1) = 1`.

pub mod errors;
pub mod fib;
pub mod hex;
pub mod parse;

pub use errors::FibError;
pub use fib::{Fibonacci, fibonacci, fibonacci_hex};
pub use hex::{BUCKET_HEX_DIGITS, Bucket, HexInt, parse_hex, to_hex, to_hex_padded};
pub use parse::parse_index;
