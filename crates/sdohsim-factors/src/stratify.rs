use sdohsim_stats::quantile::quantile_sorted;
use serde::{Deserialize, Serialize};

/// Survival-outcome stratum of a patient.
///
/// Groups are derived from the quartiles of the survival-duration column:
/// `A` is the top quartile (longest survival), `C` the bottom quartile,
/// `B` everything in between. The derived ordering (`A < B < C`) mirrors
/// outcome severity: a longer duration can only move a row toward `A`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    Serialize,
    Deserialize,
)]
pub enum SurvivalGroup {
    A,
    B,
    C,
}

impl SurvivalGroup {
    /// All groups, in label order.
    pub const ALL: [SurvivalGroup; 3] = [SurvivalGroup::A, SurvivalGroup::B, SurvivalGroup::C];
}

/// Quartile cutoffs derived once per run from the survival-duration column.
///
/// Both cuts are computed over the finite durations only and applied
/// uniformly to every row of the run.
///
/// # Examples
///
/// ```
/// use sdohsim_factors::stratify::{GroupThresholds, SurvivalGroup};
///
/// let durations: Vec<f64> = (1..=10).map(f64::from).collect();
/// let thresholds = GroupThresholds::from_durations(&durations).unwrap();
///
/// assert_eq!(thresholds.high_cut, 7.75);
/// assert_eq!(thresholds.low_cut, 3.25);
/// assert_eq!(thresholds.classify(8.0), Some(SurvivalGroup::A));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupThresholds {
    /// 75th percentile of the durations; values at or above it are `A`.
    pub high_cut: f64,
    /// 25th percentile of the durations; values at or below it are `C`.
    pub low_cut: f64,
}

impl GroupThresholds {
    /// Derives the cutoffs from a duration column.
    ///
    /// Non-finite values (NaN from failed numeric coercion, infinities)
    /// are excluded from the quantile computation. Returns `None` when no
    /// finite value remains, in which case no stratification is possible.
    #[must_use]
    pub fn from_durations(durations: &[f64]) -> Option<Self> {
        let mut finite: Vec<f64> = durations.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        finite.sort_by(f64::total_cmp);
        Some(Self {
            high_cut: quantile_sorted(&finite, 0.75),
            low_cut: quantile_sorted(&finite, 0.25),
        })
    }

    /// Assigns the survival group for one duration value.
    ///
    /// The high-cut test runs before the low-cut test, so when the two
    /// cuts are equal (heavily tied data) a value equal to both resolves
    /// to `A`. NaN durations have no defined group and yield `None`.
    #[must_use]
    pub fn classify(&self, duration: f64) -> Option<SurvivalGroup> {
        if duration.is_nan() {
            return None;
        }
        let group = if duration >= self.high_cut {
            SurvivalGroup::A
        } else if duration <= self.low_cut {
            SurvivalGroup::C
        } else {
            SurvivalGroup::B
        };
        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_thresholds() -> GroupThresholds {
        let durations: Vec<f64> = (1..=10).map(f64::from).collect();
        GroupThresholds::from_durations(&durations).unwrap()
    }

    #[test]
    fn test_reference_cutoffs() {
        let thresholds = reference_thresholds();
        assert_eq!(thresholds.high_cut, 7.75);
        assert_eq!(thresholds.low_cut, 3.25);
    }

    #[test]
    fn test_boundary_assignments() {
        let thresholds = reference_thresholds();
        assert_eq!(thresholds.classify(8.0), Some(SurvivalGroup::A));
        assert_eq!(thresholds.classify(5.0), Some(SurvivalGroup::B));
        assert_eq!(thresholds.classify(3.0), Some(SurvivalGroup::C));
    }

    #[test]
    fn test_cut_values_are_inclusive() {
        let thresholds = reference_thresholds();
        assert_eq!(thresholds.classify(7.75), Some(SurvivalGroup::A));
        assert_eq!(thresholds.classify(3.25), Some(SurvivalGroup::C));
    }

    #[test]
    fn test_monotonicity() {
        // Raising the duration never moves a row away from A.
        let thresholds = reference_thresholds();
        let mut previous = SurvivalGroup::C;
        let mut v = 0.0;
        while v <= 11.0 {
            let group = thresholds.classify(v).unwrap();
            assert!(
                group <= previous,
                "duration {v} moved from {previous} to {group}"
            );
            previous = group;
            v += 0.05;
        }
    }

    #[test]
    fn test_equal_cuts_resolve_to_a() {
        // Heavily tied data collapses both cuts onto the same value.
        let thresholds = GroupThresholds::from_durations(&[5.0; 20]).unwrap();
        assert_eq!(thresholds.high_cut, thresholds.low_cut);
        assert_eq!(thresholds.classify(5.0), Some(SurvivalGroup::A));
        assert_eq!(thresholds.classify(4.9), Some(SurvivalGroup::C));
        assert_eq!(thresholds.classify(5.1), Some(SurvivalGroup::A));
    }

    #[test]
    fn test_nan_duration_has_no_group() {
        let thresholds = reference_thresholds();
        assert_eq!(thresholds.classify(f64::NAN), None);
    }

    #[test]
    fn test_nan_excluded_from_cutoffs() {
        let mut durations: Vec<f64> = (1..=10).map(f64::from).collect();
        durations.push(f64::NAN);
        durations.push(f64::NAN);
        let thresholds = GroupThresholds::from_durations(&durations).unwrap();
        assert_eq!(thresholds.high_cut, 7.75);
        assert_eq!(thresholds.low_cut, 3.25);
    }

    #[test]
    fn test_no_finite_durations() {
        assert_eq!(GroupThresholds::from_durations(&[]), None);
        assert_eq!(GroupThresholds::from_durations(&[f64::NAN, f64::NAN]), None);
    }

    #[test]
    fn test_group_labels_round_trip() {
        for group in SurvivalGroup::ALL {
            let label = group.to_string();
            assert_eq!(label.parse::<SurvivalGroup>().unwrap(), group);
        }
        assert_eq!("A".parse::<SurvivalGroup>().unwrap(), SurvivalGroup::A);
        assert!("D".parse::<SurvivalGroup>().is_err());
    }
}
