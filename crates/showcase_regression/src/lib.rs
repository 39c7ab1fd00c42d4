//! Helpers for deterministic regression tests over the showcase scripts.

use serde_json::json;

pub use vehicle_core::DEFAULT_SEED;

/// Compact fingerprint of a fleet showcase run: the seed plus every
/// reported mode and final speed. Two runs with the same seed must produce
/// identical fingerprints.
pub fn fleet_fingerprint(seed: u64) -> serde_json::Value {
    let outcome = vehicle_core::showcase::run(seed);
    let fleet: Vec<_> = outcome
        .fleet
        .iter()
        .map(|v| json!({ "name": v.name, "mode": v.mode, "speed": v.final_speed }))
        .collect();
    json!({ "seed": seed, "fleet": fleet })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fleet_fingerprint(DEFAULT_SEED);
        let b = fleet_fingerprint(DEFAULT_SEED);
        assert_eq!(a, b);
    }
}
