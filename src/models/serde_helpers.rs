//! Serde helpers for model fields with saturating invariants

use serde::{Deserialize, Deserializer};
use super::attributes::MAX_FIFTHS;

/// Deserialize a key signature `fifths` value, saturating it into `-7..=7`
pub fn deserialize_clamped_fifths<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(-(MAX_FIFTHS as i64), MAX_FIFTHS as i64) as i32)
}
