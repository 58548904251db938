//! Customer model definition.

use serde::{Deserialize, Serialize};

/// A buyer taking part in sales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Identifier generated by the store
    pub id: i64,

    /// Full name, never empty
    pub full_name: String,

    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the customer is currently active
    pub is_active: bool,
}
