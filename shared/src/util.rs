/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at shop scale)
///
/// Used for business record IDs (sales, expenses, customers, ...).
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_id_positive() {
        for _ in 0..100 {
            assert!(snowflake_id() > 0);
        }
    }

    #[test]
    fn test_snowflake_id_fits_js_safe_integer() {
        const MAX_SAFE: i64 = 9_007_199_254_740_991; // 2^53 - 1
        for _ in 0..100 {
            assert!(snowflake_id() <= MAX_SAFE);
        }
    }

    #[test]
    fn test_snowflake_id_mostly_unique() {
        let ids: std::collections::HashSet<i64> = (0..64).map(|_| snowflake_id()).collect();
        // 12 random bits per millisecond; a few collisions in a tight loop
        // are tolerable, wholesale duplication is not
        assert!(ids.len() > 32);
    }
}
