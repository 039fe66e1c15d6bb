use serde::{Deserialize, Serialize};

/// A single user record as served by `/api/users`.
///
/// Field declaration order is the wire order: `id, name, email, role`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier, stable across the process lifetime
    pub id: u32,
    /// Display name, non-empty
    pub name: String,
    /// Contact email, not validated
    pub email: String,
    /// Role label, open-ended (unknown labels fall back to a default tag style)
    pub role: String,
}

impl UserRecord {
    pub fn new(id: u32, name: &str, email: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }
}
