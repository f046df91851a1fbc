//! Shared UI components reusable across tabs
//!
//! Contains:
//! - `editable_amount` - Inline editor for expense amounts
//! - `section` - Collapsible headers, cards and label/value rows

pub mod editable_amount;
pub mod section;

/// Secondary text colour
pub const MUTED: [f32; 3] = [0.5, 0.5, 0.5];

/// Positive amounts and early-bird pricing
pub const GREEN: [f32; 3] = [0.1, 0.6, 0.3];

/// Losses and deficits
pub const RED: [f32; 3] = [0.8, 0.2, 0.2];

/// Accent for headings
pub const ACCENT: [f32; 3] = [0.45, 0.35, 0.85];
