//! Serde helpers for backend fields that may be sent as explicit `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default. Pair with `#[serde(default)]`
/// so a missing key is treated the same way.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
