// src/services/username.rs
//
// Username generation
//
// Deterministic, no randomness: first three characters of the first
// name (fewer if shorter) concatenated with the last name, then the
// smallest integer suffix that makes the handle free. Terminates
// because the suffix space is unbounded.

use crate::error::AppResult;
use crate::repositories::AccountRepository;

/// Compute a unique login handle from a first/last name pair.
///
/// Not race-free under concurrent creation; the storage-level UNIQUE
/// constraint backstops that, and the creation flow retries on a
/// violation.
pub fn generate_username(
    first_name: &str,
    last_name: &str,
    accounts: &dyn AccountRepository,
) -> AppResult<String> {
    // chars(), not byte slicing: a multi-byte first name must not be
    // split mid code point.
    let prefix: String = first_name.chars().take(3).collect();
    let base = format!("{prefix}{last_name}");

    let mut candidate = base.clone();
    let mut suffix = 1u32;
    while accounts.exists(&candidate)? {
        candidate = format!("{base}{suffix}");
        suffix += 1;
    }

    Ok(candidate)
}
