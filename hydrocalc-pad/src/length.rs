//! Serde helpers for lengths written as `"<value> <unit>"` strings.

use serde::{Deserialize, Deserializer, Serializer};
use uom::{
    fmt::DisplayStyle,
    si::{f64::Length, length::meter},
};

#[allow(clippy::ref_option)]
pub(crate) fn serialize_optional_length<S>(
    length: &Option<Length>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match length {
        Some(length) => serializer.serialize_str(&format!(
            "{}",
            length.into_format_args(meter, DisplayStyle::Abbreviation)
        )),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize_optional_length<'de, D>(
    deserializer: D,
) -> Result<Option<Length>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(s) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    s.trim()
        .parse::<Length>()
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("failed to parse length `{s}`: {e}")))
}
