//! Spacing combination enumeration and recommendation selection
//!
//! The grid has two independent spacing dimensions: channel spacing
//! (dimension A, the carrying channels) and clip spacing (dimension B,
//! the attachment points along each channel). Every candidate pair maps
//! to a tributary area, and the per-fastener load is that area times the
//! composed grid load.
//!
//! # Example
//!
//! ```
//! use ceiling_core::spacing::{enumerate_combinations, select_recommendation, SpacingConstraints};
//! use ceiling_core::fastening::FASTENER_CAPACITY_LB;
//!
//! let constraints = SpacingConstraints {
//!     channel_spacings_in: vec![16.0, 24.0],
//!     clip_spacings_in: vec![48.0],
//!     constrain_to_structure: false,
//!     structure_spacing_in: 48.0,
//! };
//!
//! let combos = enumerate_combinations(4.9, &constraints, FASTENER_CAPACITY_LB);
//! let pick = select_recommendation(&combos).unwrap();
//! assert_eq!(pick.channel_spacing_in, 16.0); // 24x48 is wider but overloads
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{SqFt, SqIn};

/// Candidate spacing sets for the two grid dimensions.
///
/// When `constrain_to_structure` is set, dimension B collapses to the
/// single value `structure_spacing_in` (clips must land on structure
/// members), overriding whatever the clip set contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacingConstraints {
    /// Candidate channel spacings, dimension A (inches)
    pub channel_spacings_in: Vec<f64>,

    /// Candidate clip spacings, dimension B (inches)
    pub clip_spacings_in: Vec<f64>,

    /// Force dimension B onto the structure member spacing
    pub constrain_to_structure: bool,

    /// Structure member spacing (inches), used when constrained
    pub structure_spacing_in: f64,
}

impl SpacingConstraints {
    /// Validate that every candidate (and the structure spacing) is a
    /// positive finite number.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, values) in [
            ("channel_spacings_in", &self.channel_spacings_in),
            ("clip_spacings_in", &self.clip_spacings_in),
        ] {
            for &v in values {
                if !v.is_finite() || v <= 0.0 {
                    return Err(CalcError::invalid_input(
                        field,
                        v.to_string(),
                        "Spacing candidates must be positive finite numbers",
                    ));
                }
            }
        }
        if !self.structure_spacing_in.is_finite() || self.structure_spacing_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "structure_spacing_in",
                self.structure_spacing_in.to_string(),
                "Structure spacing must be a positive finite number",
            ));
        }
        Ok(())
    }

    /// Dimension-A candidates: channel spacings, de-duplicated, ascending.
    pub fn dim_a_candidates(&self) -> Vec<f64> {
        dedup_ascending(&self.channel_spacings_in)
    }

    /// Dimension-B candidates: the structure spacing alone when constrained,
    /// otherwise the clip spacings de-duplicated ascending.
    pub fn dim_b_candidates(&self) -> Vec<f64> {
        if self.constrain_to_structure {
            vec![self.structure_spacing_in]
        } else {
            dedup_ascending(&self.clip_spacings_in)
        }
    }
}

fn dedup_ascending(values: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = values.to_vec();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}

/// One evaluated spacing pair.
///
/// ## JSON Example
///
/// ```json
/// {
///   "channel_spacing_in": 16.0,
///   "clip_spacing_in": 48.0,
///   "tributary_sqft": 5.333,
///   "load_per_fastener_lb": 26.13,
///   "passes": true,
///   "safety_factor": 1.38
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingCombo {
    /// Channel spacing, dimension A (inches)
    pub channel_spacing_in: f64,

    /// Clip spacing, dimension B (inches)
    pub clip_spacing_in: f64,

    /// Area supported by one fastener (ft²)
    pub tributary_sqft: f64,

    /// Load on one fastener (lb)
    pub load_per_fastener_lb: f64,

    /// Whether the per-fastener load is finite and within capacity
    pub passes: bool,

    /// Capacity margin: capacity / load (+∞ for zero or negative load)
    pub safety_factor: f64,
}

impl SpacingCombo {
    /// Evaluate one spacing pair against a grid load and capacity.
    pub fn evaluate(
        channel_spacing_in: f64,
        clip_spacing_in: f64,
        grid_load_psf: f64,
        capacity_lb: f64,
    ) -> Self {
        let tributary: SqFt = SqIn(channel_spacing_in * clip_spacing_in).into();
        let load_per_fastener_lb = tributary.value() * grid_load_psf;

        SpacingCombo {
            channel_spacing_in,
            clip_spacing_in,
            tributary_sqft: tributary.value(),
            load_per_fastener_lb,
            passes: load_per_fastener_lb.is_finite() && load_per_fastener_lb <= capacity_lb,
            safety_factor: safety_factor(capacity_lb, load_per_fastener_lb),
        }
    }

    /// Spacing product A×B (in²), the sort key for "widest first"
    pub fn spacing_product(&self) -> f64 {
        self.channel_spacing_in * self.clip_spacing_in
    }
}

/// Capacity margin for a per-fastener load.
///
/// `capacity / load` for a positive finite load; +∞ for a zero or negative
/// load (nothing to resist); 0.0 for a non-finite load so NaN never leaks
/// into results.
pub(crate) fn safety_factor(capacity_lb: f64, load_lb: f64) -> f64 {
    if !load_lb.is_finite() {
        0.0
    } else if load_lb > 0.0 {
        capacity_lb / load_lb
    } else {
        f64::INFINITY
    }
}

/// Evaluate the full cross product of spacing candidates, widest first.
///
/// Every (A, B) pair is kept in the result, failing ones included, so the
/// caller can show the whole field. Ordering is descending by spacing
/// product; ties keep construction order (A ascending outer, B ascending
/// inner) via the stable sort. Empty candidate sets yield an empty vec.
pub fn enumerate_combinations(
    grid_load_psf: f64,
    constraints: &SpacingConstraints,
    capacity_lb: f64,
) -> Vec<SpacingCombo> {
    let dim_a = constraints.dim_a_candidates();
    let dim_b = constraints.dim_b_candidates();

    let mut combos: Vec<SpacingCombo> = Vec::with_capacity(dim_a.len() * dim_b.len());
    for &a in &dim_a {
        for &b in &dim_b {
            combos.push(SpacingCombo::evaluate(a, b, grid_load_psf, capacity_lb));
        }
    }

    combos.sort_by(|x, y| y.spacing_product().total_cmp(&x.spacing_product()));
    combos
}

/// Pick the first passing combination in the given order.
///
/// The enumerator's widest-first ordering is what makes "first passing"
/// mean "widest passing"; this is a plain linear scan and never re-sorts.
pub fn select_recommendation(combos: &[SpacingCombo]) -> Option<&SpacingCombo> {
    combos.iter().find(|c| c.passes)
}
