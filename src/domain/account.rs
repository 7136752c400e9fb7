// src/domain/account.rs
use serde::{Deserialize, Serialize};

/// Insert payload for a new account row.
///
/// There is no full `Account` read model: account rows are never read
/// back, only checked during login and mutated by the password and
/// delete operations. `user_id` is backend-assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Unique login handle, assigned by the username generator
    pub name: String,

    /// Stored and compared verbatim (no hashing)
    pub password: String,

    pub first_name: String,
    pub last_name: String,

    /// Stored verbatim
    pub ssn: String,
}
