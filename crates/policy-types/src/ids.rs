//! Deterministic policy identifiers

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Build a policy id of the form `POL_{COMPANY}_{YYYYMMDD}_{hash8}`.
///
/// The hash component is the first 8 hex characters of the SHA-256 of the
/// policy text, so re-registering identical text on the same day yields the
/// same id. The date is passed in by the caller rather than read from the
/// clock, keeping the function referentially transparent.
pub fn generate_policy_id(policy_text: &str, company: &str, date: NaiveDate) -> String {
    let mut hasher = Sha256::new();
    hasher.update(policy_text.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!(
        "POL_{}_{}_{}",
        company.to_uppercase(),
        date.format("%Y%m%d"),
        &digest[..8]
    )
}
