//! Fastener accounting and the dedicated-mount capacity check
//!
//! Given a spacing recommendation this module estimates how many fasteners
//! the job takes: one per tributary cell across the grid, plus a fixed four
//! per cloud when clouds are on dedicated mounts. The dedicated-mount check
//! validates each cloud weight class against the four-fastener assumption,
//! independent of how many clouds actually exist.

use serde::{Deserialize, Serialize};

use crate::loads::{CloudClass, CloudInventory, MountMode};
use crate::spacing::{safety_factor, SpacingCombo};

/// Rated capacity of one fastener (lb). Contract constant, not configuration.
pub const FASTENER_CAPACITY_LB: f64 = 36.0;

/// Fasteners assigned to each cloud on a dedicated mount. Contract constant.
pub const FASTENERS_PER_DEDICATED_CLOUD: u32 = 4;

/// Floor for the tributary area (ft²) in the grid-count division, guarding
/// against blow-up when the area underflows to zero.
const MIN_TRIBUTARY_SQFT: f64 = 1e-6;

/// Derived fastener counts for a job. Computed fresh each run, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FasteningSummary {
    /// Fasteners across the distributed grid
    pub grid_fastener_count: u64,

    /// Fasteners on dedicated cloud mounts (0 unless mode is Dedicated)
    pub dedicated_fastener_count: u64,

    /// Grid + dedicated
    pub total_fastener_count: u64,
}

/// Derive fastener counts from the recommendation, area, and cloud inventory.
///
/// Grid count is `ceil(area / tributary)` for the recommended combination;
/// no recommendation or a non-positive area means no grid fasteners to count.
/// Dedicated count is four per cloud, only in Dedicated mode.
///
/// # Example
/// ```
/// use ceiling_core::fastening::{account_fasteners, FASTENER_CAPACITY_LB};
/// use ceiling_core::loads::{CloudClass, CloudInventory, MountMode};
/// use ceiling_core::spacing::SpacingCombo;
///
/// let combo = SpacingCombo::evaluate(16.0, 48.0, 4.9, FASTENER_CAPACITY_LB);
/// let clouds = CloudInventory::new().with_count(CloudClass::Medium30, 2);
///
/// let summary = account_fasteners(Some(&combo), 600.0, MountMode::Dedicated, &clouds);
/// assert_eq!(summary.grid_fastener_count, 113); // ceil(600 / 5.333)
/// assert_eq!(summary.dedicated_fastener_count, 8);
/// assert_eq!(summary.total_fastener_count, 121);
/// ```
pub fn account_fasteners(
    recommendation: Option<&SpacingCombo>,
    area_sqft: f64,
    mode: MountMode,
    clouds: &CloudInventory,
) -> FasteningSummary {
    let grid_fastener_count = match recommendation {
        Some(combo) if area_sqft > 0.0 => {
            let tributary = combo.tributary_sqft.max(MIN_TRIBUTARY_SQFT);
            (area_sqft / tributary).ceil() as u64
        }
        _ => 0,
    };

    let dedicated_fastener_count = match mode {
        MountMode::Dedicated => {
            FASTENERS_PER_DEDICATED_CLOUD as u64 * clouds.total_count() as u64
        }
        MountMode::Distributed => 0,
    };

    FasteningSummary {
        grid_fastener_count,
        dedicated_fastener_count,
        total_fastener_count: grid_fastener_count + dedicated_fastener_count,
    }
}

/// Capacity check result for one cloud weight class on a dedicated mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedicatedClassCheck {
    /// The weight class being checked
    pub class: CloudClass,

    /// Load on each of the four fasteners (lb): class weight / 4
    pub per_fastener_load_lb: f64,

    /// Whether the per-fastener load is within capacity
    pub passes: bool,

    /// Capacity margin, same convention as the spacing combinations
    pub safety_factor: f64,
}

/// Check every cloud weight class against the dedicated-mount assumption.
///
/// This validates the fixed four-fasteners-per-cloud rule per class, not per
/// physical cloud, so it reports the same four rows whether zero or a hundred
/// clouds hang from the grid.
///
/// # Example
/// ```
/// use ceiling_core::fastening::{check_dedicated_classes, FASTENER_CAPACITY_LB};
///
/// let checks = check_dedicated_classes(FASTENER_CAPACITY_LB);
/// assert_eq!(checks.len(), 4);
/// assert!(checks.iter().all(|c| c.passes)); // heaviest is 60/4 = 15 lb
/// ```
pub fn check_dedicated_classes(capacity_lb: f64) -> Vec<DedicatedClassCheck> {
    CloudClass::ALL
        .iter()
        .map(|&class| {
            let per_fastener_load_lb = class.weight_lb() / FASTENERS_PER_DEDICATED_CLOUD as f64;
            DedicatedClassCheck {
                class,
                per_fastener_load_lb,
                passes: per_fastener_load_lb.is_finite()
                    && per_fastener_load_lb <= capacity_lb,
                safety_factor: safety_factor(capacity_lb, per_fastener_load_lb),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_combo() -> SpacingCombo {
        SpacingCombo::evaluate(16.0, 48.0, 4.9, FASTENER_CAPACITY_LB)
    }

    #[test]
    fn test_grid_count_ceil() {
        let combo = passing_combo();
        let summary = account_fasteners(
            Some(&combo),
            600.0,
            MountMode::Distributed,
            &CloudInventory::new(),
        );
        // 600 / 5.333 = 112.5 -> 113
        assert_eq!(summary.grid_fastener_count, 113);
        assert_eq!(summary.dedicated_fastener_count, 0);
        assert_eq!(summary.total_fastener_count, 113);
    }

    #[test]
    fn test_no_recommendation_no_grid_count() {
        let summary = account_fasteners(None, 600.0, MountMode::Distributed, &CloudInventory::new());
        assert_eq!(summary.grid_fastener_count, 0);
        assert_eq!(summary.total_fastener_count, 0);
    }

    #[test]
    fn test_zero_area_no_grid_count() {
        let combo = passing_combo();
        let summary =
            account_fasteners(Some(&combo), 0.0, MountMode::Distributed, &CloudInventory::new());
        assert_eq!(summary.grid_fastener_count, 0);
    }

    #[test]
    fn test_dedicated_count_four_per_cloud() {
        let combo = passing_combo();
        let clouds = CloudInventory::new()
            .with_count(CloudClass::Light15, 3)
            .with_count(CloudClass::Max60, 2);
        let summary = account_fasteners(Some(&combo), 600.0, MountMode::Dedicated, &clouds);
        assert_eq!(summary.dedicated_fastener_count, 20);
        assert_eq!(
            summary.total_fastener_count,
            summary.grid_fastener_count + summary.dedicated_fastener_count
        );
    }

    #[test]
    fn test_dedicated_mode_zero_clouds() {
        // Spec scenario: all counts zero, Dedicated mode
        let combo = passing_combo();
        let summary =
            account_fasteners(Some(&combo), 600.0, MountMode::Dedicated, &CloudInventory::new());
        assert_eq!(summary.dedicated_fastener_count, 0);

        // The class check is count-independent and still reports all four rows
        let checks = check_dedicated_classes(FASTENER_CAPACITY_LB);
        assert_eq!(checks.len(), 4);
    }

    #[test]
    fn test_distributed_mode_ignores_cloud_counts() {
        let combo = passing_combo();
        let clouds = CloudInventory::new().with_count(CloudClass::Heavy45, 7);
        let summary = account_fasteners(Some(&combo), 600.0, MountMode::Distributed, &clouds);
        assert_eq!(summary.dedicated_fastener_count, 0);
    }

    #[test]
    fn test_tributary_floor_guards_division() {
        let mut combo = passing_combo();
        combo.tributary_sqft = 0.0;
        let summary =
            account_fasteners(Some(&combo), 600.0, MountMode::Distributed, &CloudInventory::new());
        // 600 / 1e-6, finite and huge rather than a division blow-up
        assert_eq!(summary.grid_fastener_count, 600_000_000);
    }

    #[test]
    fn test_dedicated_class_loads() {
        let checks = check_dedicated_classes(FASTENER_CAPACITY_LB);
        let loads: Vec<f64> = checks.iter().map(|c| c.per_fastener_load_lb).collect();
        assert_eq!(loads, vec![3.75, 7.5, 11.25, 15.0]);
        for check in &checks {
            assert!(check.passes);
            assert!((check.safety_factor - FASTENER_CAPACITY_LB / check.per_fastener_load_lb).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dedicated_class_check_low_capacity() {
        // With a 10 lb capacity the 45 and 60 lb classes exceed 10*4
        let checks = check_dedicated_classes(10.0);
        let passing: Vec<bool> = checks.iter().map(|c| c.passes).collect();
        assert_eq!(passing, vec![true, true, false, false]);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = FasteningSummary {
            grid_fastener_count: 113,
            dedicated_fastener_count: 8,
            total_fastener_count: 121,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let roundtrip: FasteningSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
