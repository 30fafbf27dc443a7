use tracing::debug;

use crate::errors::FibError;

/// Read the sequence index from a command-line argument.
///
/// The argument must be a base-10 integer; surrounding whitespace is ignored.
/// Missing, non-numeric and negative values are all `InvalidArgument`.
pub fn parse_index(arg: Option<&str>) -> Result<u64, FibError> {
    let raw = arg.ok_or_else(|| FibError::invalid("missing index argument <n>"))?;
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FibError::invalid(format!("index must be non-negative, got {}", trimmed)));
        }
    }

    let n = trimmed
        .parse::<u64>()
        .map_err(|e| FibError::invalid(format!("{:?} is not an integer index: {}", raw, e)))?;

    debug!(n, "parsed index");
    Ok(n)
}
