//! Required-field presence checks.
//!
//! Request bodies carry every field as `Option<String>`; a field counts as
//! missing when it is absent, `null`, or blank after trimming. Values that
//! pass are returned exactly as sent.

use crate::error::CoreError;

/// Return the value of a required field, or `None` if it is missing.
///
/// Whitespace only decides presence; the returned value is untouched.
pub fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Require every field in `fields` to be present.
///
/// On failure the whole check reports `message`, matching the single
/// combined error each endpoint returns.
pub fn require_all<const N: usize>(
    fields: [Option<&str>; N],
    message: &str,
) -> Result<[String; N], CoreError> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = present(field).ok_or_else(|| CoreError::Validation(message.to_string()))?;
    }
    Ok(out)
}
