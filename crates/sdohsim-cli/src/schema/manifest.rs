use chrono::{DateTime, Utc};
use sdohsim_factors::{seed::SampleSeed, stratify::GroupThresholds};
use serde::{Deserialize, Serialize};

/// Provenance record for one enrichment run.
///
/// Stored alongside the enriched table, the manifest holds everything
/// needed to reproduce the run: the seed, the duration column, the derived
/// cutoffs, and the factor columns in sampling order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    /// Timestamp when the enriched table was produced (ISO 8601 format)
    pub enriched_at: DateTime<Utc>,
    /// Seed of the sampling stream
    pub seed: SampleSeed,
    /// Column the survival durations were read from
    pub duration_column: String,
    /// Quartile cutoffs applied to every row
    pub thresholds: GroupThresholds,
    /// Number of data rows in the enriched table
    pub num_rows: usize,
    /// Factor columns appended, in sampling order
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_round_trip() {
        let manifest = RunManifest {
            enriched_at: Utc::now(),
            seed: SampleSeed::from_bytes([1u8; 16]),
            duration_column: "OS_MONTHS".to_owned(),
            thresholds: GroupThresholds {
                high_cut: 7.75,
                low_cut: 3.25,
            },
            num_rows: 11,
            factors: vec!["alcohol_use".to_owned()],
        };
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: RunManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.seed, manifest.seed);
        assert_eq!(parsed.thresholds, manifest.thresholds);
        assert_eq!(parsed.factors, manifest.factors);
    }
}
