use serde::{Deserialize, Deserializer};

/// Deserializes a string with surrounding whitespace removed, so that length
/// validation sees what will actually be stored.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}
