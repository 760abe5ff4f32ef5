//! The parsed benchmark row.

use serde::{Deserialize, Serialize};

/// One parsed row of the CPU benchmark listing.
///
/// Numeric fields hold [`CpuRecord::SENTINEL`] when the source cell could
/// not be parsed as an integer. Equality and hashing are full field-wise,
/// which is what the accumulator's duplicate suppression relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuRecord {
    /// CPU model name
    pub name: String,
    /// Physical core count
    pub cores: i32,
    /// Overall benchmark score
    pub cpu_mark: i32,
    /// Single-thread benchmark score
    pub thread_mark: i32,
    /// Thermal design power in watts
    pub tdp: i32,
    /// Socket type
    pub socket: String,
    /// Market category (Desktop, Laptop, Server, ...)
    pub category: String,
}

impl CpuRecord {
    /// Marker value for a numeric field that failed to parse.
    pub const SENTINEL: i32 = -1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> CpuRecord {
        CpuRecord {
            name: "Ryzen 5 3600".to_string(),
            cores: 6,
            cpu_mark: 17828,
            thread_mark: 2674,
            tdp: 65,
            socket: "AM4".to_string(),
            category: "Desktop".to_string(),
        }
    }

    #[test]
    fn test_field_wise_equality() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);

        b.tdp = 95;
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_set_membership() {
        let mut set = HashSet::new();
        assert!(set.insert(sample()));
        assert!(!set.insert(sample()));

        let mut other = sample();
        other.name = "Ryzen 5 3600X".to_string();
        assert!(set.insert(other));
    }

    #[test]
    fn test_sentinel_value() {
        assert_eq!(CpuRecord::SENTINEL, -1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).expect("serialize record");
        let parsed: CpuRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(parsed, record);
    }
}
