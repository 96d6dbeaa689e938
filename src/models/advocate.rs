//! Advocate record
//!
//! The single directory entity, serialized with camelCase field names.

use serde::{Deserialize, Serialize};

/// A directory record for one advocate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// 1-based identifier (insertion order or primary key)
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered list of specialty labels
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    /// Stored as an integer, not validated as a phone format
    pub phone_number: i64,
}

impl Advocate {
    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
