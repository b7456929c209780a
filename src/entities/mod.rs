// Entity Models
//
// A catalog is a plain value: version + description + ordered technologies.
// Persistence lives in `crate::persistence`.

pub mod catalog;
pub mod technology;

pub use catalog::Catalog;
pub use technology::Technology;

use serde::{Deserialize, Deserializer};

/// Explicit `null` in a document loads as the field's empty value, same as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
