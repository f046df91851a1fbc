//! UI module for Coursebook GUI
//!
//! # Panel Structure
//! - `header` - Course banner, tab bar and the launch summary strip
//! - `course_structure` - Batch timetable and the expandable weekly curriculum
//! - `business_plan` - Planner inputs, revenue, expenses, profit split, projections
//! - `community` - Student support channels
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/editable_amount` - Click-to-edit currency amount
//! - `shared/section` - Collapsible section header and card helpers

// Top-level panels
pub mod header;
pub mod status_bar;

// Tab bodies
pub mod business_plan;
pub mod community;
pub mod course_structure;

// Shared components
pub mod shared;
