//! # ceiling_core - Suspended-Ceiling Fastener Spacing Engine
//!
//! `ceiling_core` recommends the widest admissible fastener spacing for a
//! suspended-ceiling assembly, given the assembly's distributed loads and a
//! fixed per-fastener capacity. All inputs and outputs are JSON-serializable,
//! making it ideal for integration with AI assistants via MCP or similar
//! protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Data outcomes, not exceptions**: a combination that overloads its
//!   fastener comes back marked failing; an input with no workable spacing
//!   comes back with no recommendation. Errors only report invalid input.
//!
//! ## Pipeline
//!
//! Load composition → combination enumeration → recommendation selection →
//! fastener accounting, each a pure function, composed by
//! [`ceiling::calculate`]. The stages are also exported individually for
//! callers that want to drive them directly.
//!
//! ## Quick Start
//!
//! ```rust
//! use ceiling_core::ceiling::{calculate, CeilingInput};
//! use ceiling_core::loads::{AssemblyConfig, CloudInventory, MountMode};
//! use ceiling_core::spacing::SpacingConstraints;
//!
//! let input = CeilingInput {
//!     label: "Lobby".to_string(),
//!     area_sqft: 600.0,
//!     assembly: AssemblyConfig::default(),
//!     clouds: CloudInventory::new(),
//!     mount: MountMode::Distributed,
//!     constraints: SpacingConstraints {
//!         channel_spacings_in: vec![16.0, 24.0],
//!         clip_spacings_in: vec![48.0],
//!         constrain_to_structure: false,
//!         structure_spacing_in: 48.0,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{}", result.summary());
//! ```
//!
//! ## Contract Constants
//!
//! Fastener capacity (36 lb), fasteners per dedicated cloud (4), the
//! in²/ft² factor (144), and the cloud weight classes (15/30/45/60 lb)
//! are domain constants, not configuration; changing them changes the
//! calculation contract.
//!
//! ## Modules
//!
//! - [`ceiling`] - One-shot pipeline: input, result, `calculate`
//! - [`loads`] - Assembly loads, cloud inventory, load composition
//! - [`spacing`] - Spacing combinations and recommendation selection
//! - [`fastening`] - Fastener counts and the dedicated-mount check
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod ceiling;
pub mod errors;
pub mod fastening;
pub mod loads;
pub mod spacing;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use ceiling::{calculate, CeilingInput, CeilingResult};
pub use errors::{CalcError, CalcResult};
pub use fastening::{FasteningSummary, FASTENER_CAPACITY_LB, FASTENERS_PER_DEDICATED_CLOUD};
pub use loads::{AssemblyConfig, CloudClass, CloudInventory, MountMode};
pub use spacing::{SpacingCombo, SpacingConstraints};
