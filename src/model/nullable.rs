use serde::{Deserialize, Deserializer};

/// Deserialize a possibly-null value as its default.
///
/// WMATA sends `null` for unused slots (e.g. `LineCode2`) rather than omitting them.
pub fn nullable<'de, DeserializerT, ValueT>(deserializer: DeserializerT) -> Result<ValueT, DeserializerT::Error>
where
    DeserializerT: Deserializer<'de>,
    ValueT: Default + Deserialize<'de>,
{
    Option::<ValueT>::deserialize(deserializer).map(Option::unwrap_or_default)
}
