//! # Ceiling Calculation
//!
//! One-shot wrapper over the whole pipeline: compose the grid load,
//! enumerate spacing combinations, select a recommendation, and account
//! for fasteners. Front-ends hold a [`CeilingInput`], re-run
//! [`calculate`] on every edit, and render the returned [`CeilingResult`].
//!
//! ## Example
//!
//! ```rust
//! use ceiling_core::ceiling::{calculate, CeilingInput};
//! use ceiling_core::loads::{AssemblyConfig, CloudInventory, MountMode};
//! use ceiling_core::spacing::SpacingConstraints;
//!
//! let input = CeilingInput {
//!     label: "Lobby".to_string(),
//!     area_sqft: 600.0,
//!     assembly: AssemblyConfig {
//!         include_board_layer: true,
//!         board_load_psf: 2.5,
//!         finish_layer_count: 2,
//!         finish_layer_load_psf: 0.55,
//!         insulation_load_psf: 0.5,
//!         misc_load_psf: 0.3,
//!     },
//!     clouds: CloudInventory::new(),
//!     mount: MountMode::Distributed,
//!     constraints: SpacingConstraints {
//!         channel_spacings_in: vec![12.0, 16.0, 24.0],
//!         clip_spacings_in: vec![24.0, 32.0, 48.0],
//!         constrain_to_structure: false,
//!         structure_spacing_in: 48.0,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.recommendation.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fastening::{
    account_fasteners, check_dedicated_classes, DedicatedClassCheck, FasteningSummary,
    FASTENER_CAPACITY_LB,
};
use crate::loads::{compose_grid_load, AssemblyConfig, CloudInventory, MountMode};
use crate::spacing::{enumerate_combinations, select_recommendation, SpacingCombo, SpacingConstraints};

/// Input parameters for one ceiling job.
///
/// The engine never holds this between runs; the caller owns it, edits it,
/// and passes it back in whole each time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeilingInput {
    /// User label for this ceiling (e.g., "Lobby", "Corridor B")
    pub label: String,

    /// Ceiling area in square feet
    pub area_sqft: f64,

    /// Distributed material loads of the build-up
    pub assembly: AssemblyConfig,

    /// Cloud fixtures hanging from the grid
    pub clouds: CloudInventory,

    /// How cloud fixtures attach
    pub mount: MountMode,

    /// Candidate spacing sets for the two grid dimensions
    pub constraints: SpacingConstraints,
}

impl CeilingInput {
    /// Validate input parameters.
    ///
    /// Checks the member invariants and the composer's upstream guarantee:
    /// distributing cloud weight requires a positive area.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.area_sqft.is_finite() || self.area_sqft < 0.0 {
            return Err(CalcError::invalid_input(
                "area_sqft",
                self.area_sqft.to_string(),
                "Ceiling area must be a non-negative finite number",
            ));
        }
        self.assembly.validate()?;
        self.constraints.validate()?;

        if self.mount == MountMode::Distributed
            && self.clouds.total_count() > 0
            && self.area_sqft <= 0.0
        {
            return Err(CalcError::invalid_input(
                "area_sqft",
                self.area_sqft.to_string(),
                "Distributing cloud weight requires a positive ceiling area",
            ));
        }
        Ok(())
    }
}

/// Results from one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeilingResult {
    /// Composed uniform grid load (psf)
    pub grid_load_psf: f64,

    /// Every evaluated spacing combination, widest first
    pub combinations: Vec<SpacingCombo>,

    /// The widest passing combination, if any
    pub recommendation: Option<SpacingCombo>,

    /// Derived fastener counts
    pub fastening: FasteningSummary,

    /// Per-class dedicated-mount checks (empty in Distributed mode)
    pub dedicated_checks: Vec<DedicatedClassCheck>,
}

impl CeilingResult {
    /// Whether the job works as specified: a spacing recommendation exists
    /// and every dedicated-mount class check (if any) passes.
    pub fn passes(&self) -> bool {
        self.recommendation.is_some() && self.dedicated_checks.iter().all(|c| c.passes)
    }

    /// One-line outcome for display
    pub fn summary(&self) -> String {
        match &self.recommendation {
            Some(combo) => format!(
                "{}\" channels x {}\" clips ({:.2} lb/fastener, SF {:.2})",
                combo.channel_spacing_in,
                combo.clip_spacing_in,
                combo.load_per_fastener_lb,
                combo.safety_factor,
            ),
            None => "No admissible spacing combination".to_string(),
        }
    }
}

/// Run the full pipeline for one ceiling job.
///
/// Composer, enumerator, selector, and accounting run in strict order;
/// every output is built fresh from the input. A missing recommendation is
/// a legitimate result, not an error — `Err` only reports invalid input.
pub fn calculate(input: &CeilingInput) -> CalcResult<CeilingResult> {
    input.validate()?;

    let grid_load_psf = compose_grid_load(
        &input.assembly,
        &input.clouds,
        input.mount,
        input.area_sqft,
        input.assembly.misc_load_psf,
    );

    let combinations = enumerate_combinations(grid_load_psf, &input.constraints, FASTENER_CAPACITY_LB);
    let recommendation = select_recommendation(&combinations).cloned();
    let fastening = account_fasteners(
        recommendation.as_ref(),
        input.area_sqft,
        input.mount,
        &input.clouds,
    );
    let dedicated_checks = match input.mount {
        MountMode::Dedicated => check_dedicated_classes(FASTENER_CAPACITY_LB),
        MountMode::Distributed => Vec::new(),
    };

    Ok(CeilingResult {
        grid_load_psf,
        combinations,
        recommendation,
        fastening,
        dedicated_checks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::CloudClass;

    fn test_input() -> CeilingInput {
        CeilingInput {
            label: "Test Ceiling".to_string(),
            area_sqft: 600.0,
            assembly: AssemblyConfig {
                include_board_layer: true,
                board_load_psf: 2.5,
                finish_layer_count: 2,
                finish_layer_load_psf: 0.55,
                insulation_load_psf: 0.5,
                misc_load_psf: 0.3,
            },
            clouds: CloudInventory::new().with_count(CloudClass::Medium30, 4),
            mount: MountMode::Distributed,
            constraints: SpacingConstraints {
                channel_spacings_in: vec![12.0, 16.0, 24.0],
                clip_spacings_in: vec![24.0, 32.0, 48.0],
                constrain_to_structure: false,
                structure_spacing_in: 48.0,
            },
        }
    }

    #[test]
    fn test_full_pipeline() {
        let input = test_input();
        let result = calculate(&input).unwrap();

        // 2.5 + 1.1 + 0.5 base, 120/600 clouds, 0.3 misc
        assert!((result.grid_load_psf - 4.6).abs() < 1e-9);
        assert_eq!(result.combinations.len(), 9);

        let pick = result.recommendation.as_ref().unwrap();
        assert!(pick.passes);
        // No passing combo has a strictly larger spacing product
        for combo in &result.combinations {
            if combo.passes {
                assert!(combo.spacing_product() <= pick.spacing_product());
            }
        }

        assert!(result.dedicated_checks.is_empty());
        assert_eq!(result.fastening.dedicated_fastener_count, 0);
        assert_eq!(
            result.fastening.total_fastener_count,
            result.fastening.grid_fastener_count
        );
        assert!(result.passes());
    }

    #[test]
    fn test_dedicated_mode_runs_class_checks() {
        let mut input = test_input();
        input.mount = MountMode::Dedicated;
        let result = calculate(&input).unwrap();

        assert_eq!(result.dedicated_checks.len(), 4);
        // 4 clouds x 4 fasteners each
        assert_eq!(result.fastening.dedicated_fastener_count, 16);
        assert!(result.passes());
    }

    #[test]
    fn test_no_passing_combination_is_a_result() {
        let mut input = test_input();
        input.assembly.misc_load_psf = 50.0; // overload everything
        let result = calculate(&input).unwrap();

        assert!(result.recommendation.is_none());
        assert_eq!(result.fastening.grid_fastener_count, 0);
        assert!(!result.passes());
        assert_eq!(result.summary(), "No admissible spacing combination");
        // Failing combinations are reported, not dropped
        assert_eq!(result.combinations.len(), 9);
    }

    #[test]
    fn test_empty_candidates_yield_absent_recommendation() {
        let mut input = test_input();
        input.constraints.channel_spacings_in.clear();
        let result = calculate(&input).unwrap();

        assert!(result.combinations.is_empty());
        assert!(result.recommendation.is_none());
        assert_eq!(result.fastening.grid_fastener_count, 0);
    }

    #[test]
    fn test_distributed_clouds_need_positive_area() {
        let mut input = test_input();
        input.area_sqft = 0.0;
        assert!(calculate(&input).is_err());

        // Without clouds a zero area is fine; grid count is just 0
        input.clouds = CloudInventory::new();
        let result = calculate(&input).unwrap();
        assert_eq!(result.fastening.grid_fastener_count, 0);
    }

    #[test]
    fn test_invalid_spacing_rejected() {
        let mut input = test_input();
        input.constraints.clip_spacings_in.push(-24.0);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_determinism_end_to_end() {
        let input = test_input();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.combinations, b.combinations);
        assert_eq!(a.recommendation, b.recommendation);
        assert_eq!(a.fastening, b.fastening);
    }

    #[test]
    fn test_input_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CeilingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.area_sqft, roundtrip.area_sqft);
        assert_eq!(input.clouds.total_weight_lb(), roundtrip.clouds.total_weight_lb());
    }
}
