//! # Plan Configuration
//!
//! [`PlanConfig`] is the single input record of the projection engine. It is
//! edited one field at a time by the presentation layer; every edit goes
//! through the same coercion rules so the engine only ever sees
//! non-negative, finite numbers.
//!
//! ## Example
//!
//! ```rust
//! use course_core::plan::{PlanConfig, PlanField};
//!
//! let mut config = PlanConfig::default();
//! config.apply_input(PlanField::StudentsPerBatch, "25");
//! config.apply_input(PlanField::RegularFee, "not a number"); // becomes 0
//!
//! assert_eq!(config.students_per_batch, 25);
//! assert_eq!(config.regular_fee.value(), 0.0);
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "students_per_batch": 20,
//!   "batch_count": 2,
//!   "early_bird_limit_per_batch": 5,
//!   "regular_fee": 36999.0,
//!   "early_bird_fee": 31999.0,
//!   "building_share_percent": 20.0,
//!   "monthly_staff_fees": {
//!     "main_instructor": 35000.0,
//!     "support_staff": 15000.0,
//!     "admin_manager": 12000.0,
//!     "marketing": 30000.0
//!   },
//!   "software_fee": 75000.0,
//!   "setup_fee": 20000.0,
//!   "cert_fee_per_student": 2000.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Percent, Rupees, RUPEE_SYMBOL};

/// Length of one course cycle in months. Monthly costs are multiplied by
/// this, not by calendar months elapsed.
pub const CYCLE_DURATION_MONTHS: f64 = 2.5;

/// Monthly recurring costs for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffFees {
    /// Main instructor salary per month
    pub main_instructor: Rupees,
    /// Support staff salary per month
    pub support_staff: Rupees,
    /// Admin manager salary per month
    pub admin_manager: Rupees,
    /// Marketing budget per month
    pub marketing: Rupees,
}

impl StaffFees {
    /// Sum of the three salaried roles (marketing excluded)
    pub fn monthly_total_salaries(&self) -> Rupees {
        self.main_instructor + self.support_staff + self.admin_manager
    }
}

impl Default for StaffFees {
    fn default() -> Self {
        StaffFees {
            main_instructor: Rupees(35_000.0),
            support_staff: Rupees(15_000.0),
            admin_manager: Rupees(12_000.0),
            marketing: Rupees(30_000.0),
        }
    }
}

/// Business-plan inputs for one course cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Students enrolled in each batch
    pub students_per_batch: u32,
    /// Number of parallel batches (at least 1)
    pub batch_count: u32,
    /// Discounted early-bird seats available in each batch
    pub early_bird_limit_per_batch: u32,
    /// Full course fee
    pub regular_fee: Rupees,
    /// Discounted early-bird course fee
    pub early_bird_fee: Rupees,
    /// Share of net profit allocated to the building owner, 0-100
    pub building_share_percent: Percent,
    /// Monthly staff and marketing costs
    pub monthly_staff_fees: StaffFees,
    /// Software subscriptions for the whole cycle
    pub software_fee: Rupees,
    /// One-time company setup cost, incurred in the first cycle only
    pub setup_fee: Rupees,
    /// Certification cost per enrolled student
    pub cert_fee_per_student: Rupees,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            students_per_batch: 20,
            batch_count: 2,
            early_bird_limit_per_batch: 5,
            regular_fee: Rupees(36_999.0),
            early_bird_fee: Rupees(31_999.0),
            building_share_percent: Percent(20.0),
            monthly_staff_fees: StaffFees::default(),
            software_fee: Rupees(75_000.0),
            setup_fee: Rupees(20_000.0),
            cert_fee_per_student: Rupees(2_000.0),
        }
    }
}

impl PlanConfig {
    /// Total students across all batches
    pub fn total_students(&self) -> u64 {
        u64::from(self.students_per_batch) * u64::from(self.batch_count)
    }

    /// Early-bird seats across all batches
    pub fn early_bird_capacity(&self) -> u64 {
        u64::from(self.early_bird_limit_per_batch) * u64::from(self.batch_count)
    }

    /// Share of net profit kept by the operating party (100 - building share)
    pub fn dot_share_percent(&self) -> Percent {
        self.building_share_percent.complement()
    }

    /// Set the building share, builder style
    pub fn with_building_share(mut self, percent: f64) -> Self {
        self.set(PlanField::BuildingSharePercent, percent);
        self
    }

    /// Set the enrollment shape, builder style
    pub fn with_enrollment(mut self, students_per_batch: u32, batch_count: u32, early_bird_limit: u32) -> Self {
        self.students_per_batch = students_per_batch;
        self.batch_count = batch_count.max(1);
        self.early_bird_limit_per_batch = early_bird_limit;
        self
    }

    /// Read a field as a plain number
    pub fn get(&self, field: PlanField) -> f64 {
        match field {
            PlanField::StudentsPerBatch => f64::from(self.students_per_batch),
            PlanField::EarlyBirdLimit => f64::from(self.early_bird_limit_per_batch),
            PlanField::BatchCount => f64::from(self.batch_count),
            PlanField::RegularFee => self.regular_fee.value(),
            PlanField::EarlyBirdFee => self.early_bird_fee.value(),
            PlanField::BuildingSharePercent => self.building_share_percent.value(),
            PlanField::MainInstructorFee => self.monthly_staff_fees.main_instructor.value(),
            PlanField::SupportStaffFee => self.monthly_staff_fees.support_staff.value(),
            PlanField::AdminManagerFee => self.monthly_staff_fees.admin_manager.value(),
            PlanField::MarketingFee => self.monthly_staff_fees.marketing.value(),
            PlanField::SoftwareFee => self.software_fee.value(),
            PlanField::SetupFee => self.setup_fee.value(),
            PlanField::CertFeePerStudent => self.cert_fee_per_student.value(),
        }
    }

    /// Replace one field, applying the coercion rules.
    ///
    /// Negative or non-finite values become 0, count fields truncate toward
    /// zero, `batch_count` is at least 1 and the building share is clamped
    /// to 0-100.
    pub fn set(&mut self, field: PlanField, value: f64) {
        let value = if value.is_finite() && value > 0.0 { value } else { 0.0 };
        let count = value.trunc().min(f64::from(u32::MAX)) as u32;

        match field {
            PlanField::StudentsPerBatch => self.students_per_batch = count,
            PlanField::EarlyBirdLimit => self.early_bird_limit_per_batch = count,
            PlanField::BatchCount => self.batch_count = count.max(1),
            PlanField::RegularFee => self.regular_fee = Rupees(value),
            PlanField::EarlyBirdFee => self.early_bird_fee = Rupees(value),
            PlanField::BuildingSharePercent => self.building_share_percent = Percent(value.min(100.0)),
            PlanField::MainInstructorFee => self.monthly_staff_fees.main_instructor = Rupees(value),
            PlanField::SupportStaffFee => self.monthly_staff_fees.support_staff = Rupees(value),
            PlanField::AdminManagerFee => self.monthly_staff_fees.admin_manager = Rupees(value),
            PlanField::MarketingFee => self.monthly_staff_fees.marketing = Rupees(value),
            PlanField::SoftwareFee => self.software_fee = Rupees(value),
            PlanField::SetupFee => self.setup_fee = Rupees(value),
            PlanField::CertFeePerStudent => self.cert_fee_per_student = Rupees(value),
        }
    }

    /// Replace one field from raw text typed by the user.
    pub fn apply_input(&mut self, field: PlanField, raw: &str) {
        self.set(field, parse_field_input(raw));
    }

    /// A copy with the coercion rules applied to every field.
    ///
    /// Use this on configurations that did not come through [`PlanConfig::set`],
    /// such as ones deserialized from JSON, before handing them to the engine.
    pub fn sanitized(&self) -> PlanConfig {
        let mut clean = *self;
        for field in PlanField::ALL {
            clean.set(field, self.get(field));
        }
        clean
    }

    /// Check that every field is within its domain.
    ///
    /// The engine does not call this; it is for callers that build
    /// configurations in code and want a hard error instead of coercion.
    pub fn validate(&self) -> CalcResult<()> {
        if self.batch_count == 0 {
            return Err(CalcError::invalid_input(
                PlanField::BatchCount.key(),
                "0",
                "At least one batch is required",
            ));
        }

        let share = self.building_share_percent.value();
        if !share.is_finite() || !(0.0..=100.0).contains(&share) {
            return Err(CalcError::invalid_input(
                PlanField::BuildingSharePercent.key(),
                share.to_string(),
                "Building share must be between 0 and 100 percent",
            ));
        }

        for field in PlanField::ALL.iter().filter(|f| f.is_currency()) {
            let value = self.get(*field);
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field.key(),
                    value.to_string(),
                    "Amount must be a non-negative number",
                ));
            }
        }

        Ok(())
    }
}

/// Coerce raw field text to a non-negative number.
///
/// Currency prefixes (`₹`, `Rs.`), digit-group commas and a trailing `%`
/// are ignored. Anything that still does not parse, is not finite, or is
/// negative yields 0. Empty input is 0 without a warning.
pub fn parse_field_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let without_prefix = trimmed
        .strip_prefix(RUPEE_SYMBOL)
        .or_else(|| trimmed.strip_prefix("Rs."))
        .unwrap_or(trimmed);
    let cleaned: String = without_prefix
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        Ok(value) => {
            log::warn!("field input {:?} out of range ({}), using 0", raw, value);
            0.0
        }
        Err(_) => {
            log::warn!("field input {:?} is not a number, using 0", raw);
            0.0
        }
    }
}

/// Every user-editable field of [`PlanConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanField {
    StudentsPerBatch,
    EarlyBirdLimit,
    BatchCount,
    RegularFee,
    EarlyBirdFee,
    BuildingSharePercent,
    MainInstructorFee,
    SupportStaffFee,
    AdminManagerFee,
    MarketingFee,
    SoftwareFee,
    SetupFee,
    CertFeePerStudent,
}

impl PlanField {
    /// All fields, in planner display order
    pub const ALL: [PlanField; 13] = [
        PlanField::StudentsPerBatch,
        PlanField::EarlyBirdLimit,
        PlanField::BatchCount,
        PlanField::RegularFee,
        PlanField::EarlyBirdFee,
        PlanField::BuildingSharePercent,
        PlanField::MainInstructorFee,
        PlanField::SupportStaffFee,
        PlanField::AdminManagerFee,
        PlanField::MarketingFee,
        PlanField::SoftwareFee,
        PlanField::SetupFee,
        PlanField::CertFeePerStudent,
    ];

    /// Fields shown in the planner configuration grid
    pub const PLANNER: [PlanField; 6] = [
        PlanField::StudentsPerBatch,
        PlanField::EarlyBirdLimit,
        PlanField::BatchCount,
        PlanField::RegularFee,
        PlanField::EarlyBirdFee,
        PlanField::BuildingSharePercent,
    ];

    /// Fields edited inline on the expense card
    pub const EXPENSES: [PlanField; 7] = [
        PlanField::MainInstructorFee,
        PlanField::SupportStaffFee,
        PlanField::AdminManagerFee,
        PlanField::MarketingFee,
        PlanField::SoftwareFee,
        PlanField::SetupFee,
        PlanField::CertFeePerStudent,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PlanField::StudentsPerBatch => "Students / Batch",
            PlanField::EarlyBirdLimit => "Early Bird Limit",
            PlanField::BatchCount => "Parallel Batches",
            PlanField::RegularFee => "Regular Fee (₹)",
            PlanField::EarlyBirdFee => "Early Bird Fee (₹)",
            PlanField::BuildingSharePercent => "Building Share (%)",
            PlanField::MainInstructorFee => "Main Instructor (Monthly)",
            PlanField::SupportStaffFee => "Support Staff (Monthly)",
            PlanField::AdminManagerFee => "Admin Manager (Monthly)",
            PlanField::MarketingFee => "Marketing (Monthly)",
            PlanField::SoftwareFee => "Software (Total Cycle)",
            PlanField::SetupFee => "Company Setup (Total Cycle)",
            PlanField::CertFeePerStudent => "Cert Cost / Student",
        }
    }

    /// JSON key of the field, used in validation errors
    pub fn key(&self) -> &'static str {
        match self {
            PlanField::StudentsPerBatch => "students_per_batch",
            PlanField::EarlyBirdLimit => "early_bird_limit_per_batch",
            PlanField::BatchCount => "batch_count",
            PlanField::RegularFee => "regular_fee",
            PlanField::EarlyBirdFee => "early_bird_fee",
            PlanField::BuildingSharePercent => "building_share_percent",
            PlanField::MainInstructorFee => "monthly_staff_fees.main_instructor",
            PlanField::SupportStaffFee => "monthly_staff_fees.support_staff",
            PlanField::AdminManagerFee => "monthly_staff_fees.admin_manager",
            PlanField::MarketingFee => "monthly_staff_fees.marketing",
            PlanField::SoftwareFee => "software_fee",
            PlanField::SetupFee => "setup_fee",
            PlanField::CertFeePerStudent => "cert_fee_per_student",
        }
    }

    /// Whether the field holds a whole-number count
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            PlanField::StudentsPerBatch | PlanField::EarlyBirdLimit | PlanField::BatchCount
        )
    }

    /// Whether the field holds a rupee amount
    pub fn is_currency(&self) -> bool {
        !self.is_count() && *self != PlanField::BuildingSharePercent
    }
}

impl std::fmt::Display for PlanField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_course_plan() {
        let config = PlanConfig::default();
        assert_eq!(config.total_students(), 40);
        assert_eq!(config.early_bird_capacity(), 10);
        assert_eq!(config.dot_share_percent(), Percent(80.0));
        assert_eq!(config.monthly_staff_fees.monthly_total_salaries(), Rupees(62_000.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_field_input() {
        assert_eq!(parse_field_input("36999"), 36999.0);
        assert_eq!(parse_field_input("  ₹36,999 "), 36999.0);
        assert_eq!(parse_field_input("Rs. 1,500.50"), 1500.5);
        assert_eq!(parse_field_input("25%"), 25.0);
        assert_eq!(parse_field_input("abc"), 0.0);
        assert_eq!(parse_field_input("-5"), 0.0);
        assert_eq!(parse_field_input(""), 0.0);
        assert_eq!(parse_field_input("inf"), 0.0);
        assert_eq!(parse_field_input("NaN"), 0.0);
    }

    #[test]
    fn test_apply_input_replaces_one_field() {
        let mut config = PlanConfig::default();
        config.apply_input(PlanField::MarketingFee, "45000");

        let mut expected = PlanConfig::default();
        expected.monthly_staff_fees.marketing = Rupees(45_000.0);
        assert_eq!(config, expected);
    }

    #[test]
    fn test_count_fields_truncate() {
        let mut config = PlanConfig::default();
        config.apply_input(PlanField::StudentsPerBatch, "12.9");
        assert_eq!(config.students_per_batch, 12);
    }

    #[test]
    fn test_batch_count_never_zero() {
        let mut config = PlanConfig::default();
        config.apply_input(PlanField::BatchCount, "0");
        assert_eq!(config.batch_count, 1);
        config.apply_input(PlanField::BatchCount, "garbage");
        assert_eq!(config.batch_count, 1);
    }

    #[test]
    fn test_building_share_clamped() {
        let mut config = PlanConfig::default();
        config.apply_input(PlanField::BuildingSharePercent, "150");
        assert_eq!(config.building_share_percent, Percent(100.0));
        config.apply_input(PlanField::BuildingSharePercent, "-10");
        assert_eq!(config.building_share_percent, Percent(0.0));
    }

    #[test]
    fn test_get_set_symmetry() {
        let mut config = PlanConfig::default();
        for field in PlanField::ALL {
            let value = config.get(field);
            config.set(field, value);
        }
        assert_eq!(config, PlanConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PlanConfig::default();
        config.batch_count = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mut config = PlanConfig::default();
        config.regular_fee = Rupees(-1.0);
        match config.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "regular_fee"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let mut config = PlanConfig::default();
        config.building_share_percent = Percent(120.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sanitized_fixes_what_validate_rejects() {
        let mut config = PlanConfig::default();
        config.batch_count = 0;
        config.setup_fee = Rupees(-20_000.0);
        config.software_fee = Rupees(f64::NAN);
        config.building_share_percent = Percent(250.0);

        let clean = config.sanitized();
        assert!(clean.validate().is_ok());
        assert_eq!(clean.batch_count, 1);
        assert_eq!(clean.setup_fee, Rupees::ZERO);
        assert_eq!(clean.software_fee, Rupees::ZERO);
        assert_eq!(clean.building_share_percent, Percent(100.0));
    }

    #[test]
    fn test_field_classification() {
        let counts = PlanField::ALL.iter().filter(|f| f.is_count()).count();
        let currency = PlanField::ALL.iter().filter(|f| f.is_currency()).count();
        assert_eq!(counts, 3);
        assert_eq!(currency, 9);
        assert_eq!(PlanField::PLANNER.len() + PlanField::EXPENSES.len(), PlanField::ALL.len());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = PlanConfig::default().with_building_share(35.0);
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"building_share_percent\": 35.0"));
        let roundtrip: PlanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
