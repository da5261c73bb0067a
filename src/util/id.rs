//! Locally-unique id tokens for tagging bot turns.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

/// Generate a token for tagging a turn, `id-<millis>-<12 hex chars>`.
///
/// Uniqueness is probabilistic (clock plus 48 random bits), which is enough
/// for lookup keys scoped to a single page session.
pub fn generate_unique_id() -> String {
    format!("id-{}-{}", timestamp_ms(), random_hex())
}

fn timestamp_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|d| u64::try_from(d.as_millis()).ok())
            .unwrap_or(0)
    }
}

fn random_hex() -> String {
    let bits = uuid::Uuid::new_v4().as_u128() & 0xffff_ffff_ffff;
    format!("{bits:012x}")
}
