//! Line item identity
//!
//! Ids are random UUIDs assigned when an item is created. They are the only
//! key used to find an item again, independent of its position on screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used by the short display form (`li-1a2b3c4d`)
pub const LINE_ITEM_PREFIX: &str = "li-";

/// Unique identifier of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The first eight hex digits, as shown in listings
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Whether `s` names this id, either in full or by its short display form
    pub fn matches(&self, s: &str) -> bool {
        let s = s.trim();
        if let Ok(uuid) = Uuid::parse_str(s) {
            return uuid == self.0;
        }
        let short = s.strip_prefix(LINE_ITEM_PREFIX).unwrap_or(s);
        short.len() >= 4 && self.0.simple().to_string().starts_with(&short.to_lowercase())
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LINE_ITEM_PREFIX, self.short())
    }
}

impl From<Uuid> for LineItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for LineItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}
