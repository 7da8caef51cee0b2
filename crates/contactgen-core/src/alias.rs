use crate::error::{Error, Result};

/// Tag inserted between the seed local part and the row index.
pub const ALIAS_TAG: &str = "+GoToDev-";

/// Derive the per-row alias address for `seed` and `index`.
///
/// The seed is split at the first `@` only; any later `@` characters stay in
/// the domain part. A seed without `@` is rejected.
pub fn alias_email(seed: &str, index: u64) -> Result<String> {
    let (local, domain) = seed
        .split_once('@')
        .ok_or_else(|| Error::InvalidEmail(format!("'{seed}' has no '@'")))?;
    Ok(format!("{local}{ALIAS_TAG}{index}@{domain}"))
}
