use crate::{Error, Result};

/// Adds two integers.
///
/// Overflow is reported as [`Error::Overflow`] instead of wrapping.
pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(Error::Overflow { a, b })
}
