//! JavaScript literal helpers
//!
//! JSON string literals are valid JavaScript string literals, so quoting is
//! delegated to `serde_json`.

use crate::error::{ConvertError, Result};

/// Quote and escape `value` as a double-quoted JS string literal.
pub(super) fn string_literal(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| ConvertError::Serialization(e.to_string()))
}

/// Quote every value and join them with `separator`.
pub(super) fn string_list<S: AsRef<str>>(values: &[S], separator: &str) -> Result<String> {
    let quoted = values
        .iter()
        .map(|value| string_literal(value.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(quoted.join(separator))
}
