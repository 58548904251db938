//! Salesman model definition.

use serde::{Deserialize, Serialize};

/// A person who closes sales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Salesman {
    /// Identifier generated by the store
    pub id: i64,

    /// Full name, never empty
    pub full_name: String,

    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Whether the salesman is currently active
    pub is_active: bool,
}
