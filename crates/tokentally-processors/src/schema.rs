//! Lenient deserialization helpers shared by the provider schemas
//!
//! Provider usage blocks are versioned outside our control, so a field that
//! does not hold a usable count is read as absent instead of failing the
//! whole block.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Read a token count: non-negative integers only (integral floats allowed)
pub(crate) fn as_count(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// `deserialize_with` adapter for optional token counts
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_count(&value))
}

/// `deserialize_with` adapter for optional nested blocks
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).ok())
}

/// Deserialize `body[key]` into a usage block
///
/// Returns `None` when the key is absent. A present value of the wrong shape
/// (null, array, scalar) yields the block's default, i.e. every count unset.
pub(crate) fn block<T>(body: &Value, key: &str) -> Option<T>
where
    T: DeserializeOwned + Default,
{
    body.get(key)
        .map(|value| T::deserialize(value).unwrap_or_default())
}

/// `total` minus each present deduction, clamped at zero
pub(crate) fn net_of(total: u64, deductions: &[Option<u64>]) -> u64 {
    deductions
        .iter()
        .flatten()
        .fold(total, |acc, deduction| acc.saturating_sub(*deduction))
}
