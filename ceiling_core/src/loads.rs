//! Load composition for suspended-ceiling assemblies
//!
//! This module turns the assembly build-up (board, finish layers, insulation)
//! and any cloud fixtures into a single uniform grid load in psf.
//!
//! # Overview
//!
//! - [`AssemblyConfig`] - distributed material loads of the ceiling build-up
//! - [`CloudClass`] - the four fixed cloud weight classes (15/30/45/60 lb)
//! - [`CloudInventory`] - how many clouds of each class hang from the grid
//! - [`MountMode`] - whether clouds spread over the grid or get dedicated fasteners
//! - [`compose_grid_load`] - the Load Composer stage of the pipeline
//!
//! # Example
//!
//! ```
//! use ceiling_core::loads::{compose_grid_load, AssemblyConfig, CloudClass, CloudInventory, MountMode};
//!
//! let assembly = AssemblyConfig {
//!     include_board_layer: true,
//!     board_load_psf: 2.5,
//!     finish_layer_count: 2,
//!     finish_layer_load_psf: 0.55,
//!     insulation_load_psf: 0.5,
//!     misc_load_psf: 0.0,
//! };
//! let clouds = CloudInventory::new().with_count(CloudClass::Medium30, 4);
//!
//! let grid_load = compose_grid_load(&assembly, &clouds, MountMode::Distributed, 600.0, 0.0);
//! assert!((grid_load - 4.3).abs() < 0.001); // 2.5 + 1.1 + 0.5 + 120/600
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Distributed material loads of the ceiling assembly build-up.
///
/// All values are service loads in psf; `base_load_psf` sums the material
/// terms, while `misc_load_psf` is carried separately because the composer
/// takes it as its own argument (it is a catch-all the caller may override
/// per run without touching the assembly).
///
/// # JSON Format
/// ```json
/// {
///   "include_board_layer": true,
///   "board_load_psf": 2.5,
///   "finish_layer_count": 2,
///   "finish_layer_load_psf": 0.55,
///   "insulation_load_psf": 0.5,
///   "misc_load_psf": 0.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssemblyConfig {
    /// Whether the assembly includes a structural board layer
    pub include_board_layer: bool,

    /// Board layer load (psf), applied only when the layer is included
    pub board_load_psf: f64,

    /// Number of finish layers (e.g., plaster coats)
    pub finish_layer_count: u32,

    /// Load per finish layer (psf)
    pub finish_layer_load_psf: f64,

    /// Insulation load (psf)
    pub insulation_load_psf: f64,

    /// Catch-all distributed load (psf) for fixtures not modeled elsewhere
    pub misc_load_psf: f64,
}

impl AssemblyConfig {
    /// Validate that all load terms are non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("board_load_psf", self.board_load_psf),
            ("finish_layer_load_psf", self.finish_layer_load_psf),
            ("insulation_load_psf", self.insulation_load_psf),
            ("misc_load_psf", self.misc_load_psf),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Load must be a non-negative finite number",
                ));
            }
        }
        Ok(())
    }

    /// Base material load (psf): board (if included) + finish layers + insulation.
    ///
    /// Excludes `misc_load_psf`; the composer adds that as its own term.
    pub fn base_load_psf(&self) -> f64 {
        let board = if self.include_board_layer {
            self.board_load_psf
        } else {
            0.0
        };
        board + self.finish_layer_count as f64 * self.finish_layer_load_psf + self.insulation_load_psf
    }
}

/// The four fixed cloud weight classes.
///
/// A "cloud" is a point-load fixture (light cove, acoustic cloud, etc.)
/// hung from the ceiling grid. Each class has a fixed unit weight; these
/// are domain constants, part of the calculation contract.
///
/// # Example
/// ```
/// use ceiling_core::loads::CloudClass;
///
/// assert_eq!(CloudClass::Light15.weight_lb(), 15.0);
/// assert_eq!(CloudClass::Max60.code(), "C60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudClass {
    /// 15 lb per cloud unit
    Light15,
    /// 30 lb per cloud unit
    Medium30,
    /// 45 lb per cloud unit
    Heavy45,
    /// 60 lb per cloud unit
    Max60,
}

impl CloudClass {
    /// All weight classes in ascending weight order
    pub const ALL: [CloudClass; 4] = [
        CloudClass::Light15,
        CloudClass::Medium30,
        CloudClass::Heavy45,
        CloudClass::Max60,
    ];

    /// Unit weight of one cloud in this class (lb)
    pub fn weight_lb(&self) -> f64 {
        match self {
            CloudClass::Light15 => 15.0,
            CloudClass::Medium30 => 30.0,
            CloudClass::Heavy45 => 45.0,
            CloudClass::Max60 => 60.0,
        }
    }

    /// Short class label (e.g., "C15")
    pub fn code(&self) -> &'static str {
        match self {
            CloudClass::Light15 => "C15",
            CloudClass::Medium30 => "C30",
            CloudClass::Heavy45 => "C45",
            CloudClass::Max60 => "C60",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            CloudClass::Light15 => "Light cloud (15 lb)",
            CloudClass::Medium30 => "Medium cloud (30 lb)",
            CloudClass::Heavy45 => "Heavy cloud (45 lb)",
            CloudClass::Max60 => "Maximum cloud (60 lb)",
        }
    }
}

impl std::fmt::Display for CloudClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Cloud counts keyed by weight class.
///
/// # Example
/// ```
/// use ceiling_core::loads::{CloudClass, CloudInventory};
///
/// let clouds = CloudInventory::new()
///     .with_count(CloudClass::Light15, 2)
///     .with_count(CloudClass::Max60, 1);
///
/// assert_eq!(clouds.total_count(), 3);
/// assert_eq!(clouds.total_weight_lb(), 90.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudInventory {
    /// Cloud counts keyed by class (absent classes count as 0)
    pub counts: HashMap<CloudClass, u32>,
}

impl CloudInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        CloudInventory {
            counts: HashMap::new(),
        }
    }

    /// Set the count for a class (builder pattern)
    pub fn with_count(mut self, class: CloudClass, count: u32) -> Self {
        self.counts.insert(class, count);
        self
    }

    /// Set the count for a class (mutable)
    pub fn set_count(&mut self, class: CloudClass, count: u32) {
        self.counts.insert(class, count);
    }

    /// Get the count for a class, defaulting to 0 if not set
    pub fn get(&self, class: CloudClass) -> u32 {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    /// Total number of clouds across all classes
    pub fn total_count(&self) -> u32 {
        CloudClass::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Total cloud weight (lb): Σ(count × class weight)
    pub fn total_weight_lb(&self) -> f64 {
        CloudClass::ALL
            .iter()
            .map(|c| self.get(*c) as f64 * c.weight_lb())
            .sum()
    }
}

/// How cloud fixtures attach to the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MountMode {
    /// Cloud weight spreads over the ceiling area as an added psf term
    #[default]
    Distributed,
    /// Each cloud gets its own fixed set of fasteners, bypassing the grid
    Dedicated,
}

impl MountMode {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MountMode::Distributed => "Distributed over grid",
            MountMode::Dedicated => "Dedicated fasteners per cloud",
        }
    }
}

impl std::fmt::Display for MountMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Compose the uniform grid load (psf) from assembly, clouds, and misc load.
///
/// `grid_load = base + cloud_contribution + misc`, where the cloud term is
/// `total_weight / area` only in Distributed mode with a positive area.
/// A zero or negative area in Distributed mode yields a contribution of 0,
/// never NaN or infinity; the caller is expected to keep area positive when
/// it actually distributes clouds.
///
/// Total function: no error conditions, no side effects.
pub fn compose_grid_load(
    assembly: &AssemblyConfig,
    clouds: &CloudInventory,
    mode: MountMode,
    area_sqft: f64,
    misc_load_psf: f64,
) -> f64 {
    let cloud_contribution_psf = match mode {
        MountMode::Distributed if area_sqft > 0.0 => clouds.total_weight_lb() / area_sqft,
        _ => 0.0,
    };
    assembly.base_load_psf() + cloud_contribution_psf + misc_load_psf
}
