//! Environment knobs for the property tests.

pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

/// Case count for a `proptest!` block, overridable with `PROPTEST_CASES`.
pub fn proptest_cases(default: u32) -> u32 {
    env_u32("PROPTEST_CASES").unwrap_or(default).max(1)
}
