use serde::{Deserialize, Deserializer};
use tracing::Level;

/// Read a log level from its name, e.g. `info` or `WARN`
pub(super) fn level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse()
        .map_err(|_| serde::de::Error::custom(format!("unknown log level `{raw}`")))
}
