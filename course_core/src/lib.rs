//! # course_core - Course Business Plan Engine
//!
//! `course_core` is the computational heart of Coursebook: the projection
//! engine behind the course business-plan calculator, the fixed curriculum
//! catalogue, and the PDF financial report. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`projection::compute`] is a pure function of a [`PlanConfig`]
//! - **Coerce at the edge**: user text becomes numbers in [`plan`], never in the engine
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use course_core::{compute, PlanConfig, PlanField};
//!
//! let mut config = PlanConfig::default();
//! config.apply_input(PlanField::BuildingSharePercent, "25");
//!
//! let result = compute(&config);
//! assert!(result.is_profitable());
//! println!("Annual profit: {}", result.annual.profit);
//! ```
//!
//! ## Modules
//!
//! - [`plan`] - Plan configuration, editable fields and input coercion
//! - [`projection`] - Revenue, expense, profit-split and multi-cycle projection
//! - [`curriculum`] - The 10-week course catalogue and timetable
//! - [`report`] - The export document as tables
//! - [`pdf`] - Typst-based PDF rendering of the report
//! - [`units`] - Rupee and percentage wrappers with `en-IN` formatting
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic writes for exported documents

pub mod curriculum;
pub mod errors;
pub mod file_io;
pub mod pdf;
pub mod plan;
pub mod projection;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::write_export;
pub use plan::{parse_field_input, PlanConfig, PlanField, StaffFees, CYCLE_DURATION_MONTHS};
pub use projection::{compute, ProjectionResult};
pub use report::{FinancialReport, ReportMeta};
pub use units::{Percent, Rupees};
