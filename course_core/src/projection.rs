//! # Projection Engine
//!
//! Derives the financial summary of one course cycle, and the next-cycle and
//! annual projections, from a [`PlanConfig`]. [`compute`] is a pure, total
//! function: the same configuration always yields the same result and
//! nothing is cached between calls.
//!
//! ## Rules
//!
//! - Early-bird seats are filled first, capped at the per-batch limit times
//!   the batch count; everyone else pays the regular fee.
//! - Monthly costs (staff and marketing) are multiplied by the fixed
//!   [`CYCLE_DURATION_MONTHS`]. Software, setup and certification are flat.
//! - Profit is split between the operating party and the building owner
//!   only when it is positive. Losses are not apportioned.
//! - The next cycle saves the one-time setup cost. A year is the first cycle
//!   plus [`SUBSEQUENT_CYCLES_PER_YEAR`] further cycles.
//!
//! ## Example
//!
//! ```rust
//! use course_core::plan::PlanConfig;
//! use course_core::projection::compute;
//!
//! let result = compute(&PlanConfig::default());
//!
//! assert_eq!(result.revenue.total.value(), 1_429_960.0);
//! assert_eq!(result.expenses.total.value(), 405_000.0);
//! assert_eq!(result.profit.value(), 1_024_960.0);
//! assert_eq!(result.annual.profit.value(), 4_159_840.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::plan::{PlanConfig, CYCLE_DURATION_MONTHS};
use crate::units::{Percent, Rupees};

/// Cycles after the first one that make up a projected year
pub const SUBSEQUENT_CYCLES_PER_YEAR: u32 = 3;

/// Enrollment and fee income for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Students paying the early-bird fee
    pub early_bird_count: u64,
    /// Students paying the regular fee
    pub regular_count: u64,
    /// Early-bird count times early-bird fee
    pub early_bird_total: Rupees,
    /// Regular count times regular fee
    pub regular_total: Rupees,
    /// Gross revenue for the cycle
    pub total: Rupees,
}

/// Operational expenditure for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Salaried roles over the cycle duration
    pub staff: Rupees,
    /// Marketing budget over the cycle duration
    pub marketing: Rupees,
    /// Software subscriptions (flat)
    pub software: Rupees,
    /// One-time setup (flat)
    pub setup: Rupees,
    /// Certification for every enrolled student
    pub certification: Rupees,
    /// Sum of all of the above
    pub total: Rupees,
}

/// Division of a profit figure between the two parties.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfitSplit {
    /// Operating party's share
    pub dot_share: Rupees,
    /// Building owner's share
    pub building_share: Rupees,
}

impl ProfitSplit {
    /// Split `amount` with `building_share_percent` going to the owner.
    ///
    /// Zero or negative amounts give a zero split for both parties.
    ///
    /// ```rust
    /// use course_core::projection::ProfitSplit;
    /// use course_core::units::{Percent, Rupees};
    ///
    /// let split = ProfitSplit::of(Rupees(1000.0), Percent(25.0));
    /// assert_eq!(split.building_share, Rupees(250.0));
    /// assert_eq!(split.dot_share, Rupees(750.0));
    ///
    /// let loss = ProfitSplit::of(Rupees(-1000.0), Percent(25.0));
    /// assert_eq!(loss, ProfitSplit::default());
    /// ```
    pub fn of(amount: Rupees, building_share_percent: Percent) -> Self {
        if amount.value() <= 0.0 {
            return ProfitSplit::default();
        }

        let share_decimal = building_share_percent.as_decimal();
        let dot_decimal = 1.0 - share_decimal;

        ProfitSplit {
            dot_share: amount * dot_decimal,
            building_share: amount * share_decimal,
        }
    }
}

/// Profit and split for a projected period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleProjection {
    /// Total net profit for the period
    pub profit: Rupees,
    /// Operating party's share of the profit
    pub dot_share: Rupees,
    /// Building owner's share of the profit
    pub building_share: Rupees,
}

impl CycleProjection {
    fn new(profit: Rupees, building_share_percent: Percent) -> Self {
        let split = ProfitSplit::of(profit, building_share_percent);
        CycleProjection {
            profit,
            dot_share: split.dot_share,
            building_share: split.building_share,
        }
    }
}

/// Full derived summary of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub revenue: RevenueBreakdown,
    pub expenses: ExpenseBreakdown,
    /// First-cycle net profit (revenue minus expenses)
    pub profit: Rupees,
    /// First-cycle profit as a percentage of revenue, 0 when there is no revenue
    pub margin: Percent,
    /// Operating party's share of first-cycle profit
    pub dot_share: Rupees,
    /// Building owner's share of first-cycle profit
    pub building_share: Rupees,
    /// A single subsequent cycle (no setup cost)
    pub next_cycle: CycleProjection,
    /// First cycle plus three subsequent cycles
    pub annual: CycleProjection,
}

impl ProjectionResult {
    /// Whether the first cycle makes money
    pub fn is_profitable(&self) -> bool {
        self.profit.value() > 0.0
    }
}

/// Compute the projection for a configuration.
///
/// Expects non-negative input; run [`PlanConfig::sanitized`] first on
/// anything that did not come through the field setters.
pub fn compute(config: &PlanConfig) -> ProjectionResult {
    let revenue = compute_revenue(config);
    let expenses = compute_expenses(config);

    let profit = revenue.total - expenses.total;
    let margin = if revenue.total.value() > 0.0 {
        Percent(profit.value() / revenue.total.value() * 100.0)
    } else {
        Percent(0.0)
    };

    let share = config.building_share_percent;
    let first = CycleProjection::new(profit, share);
    let next_cycle = CycleProjection::new(profit + expenses.setup, share);
    let annual = CycleProjection::new(
        profit + next_cycle.profit * f64::from(SUBSEQUENT_CYCLES_PER_YEAR),
        share,
    );

    log::debug!(
        "projection: revenue={} expenses={} profit={} next_cycle={} annual={}",
        revenue.total.value(),
        expenses.total.value(),
        profit.value(),
        next_cycle.profit.value(),
        annual.profit.value()
    );

    ProjectionResult {
        revenue,
        expenses,
        profit,
        margin,
        dot_share: first.dot_share,
        building_share: first.building_share,
        next_cycle,
        annual,
    }
}

fn compute_revenue(config: &PlanConfig) -> RevenueBreakdown {
    let total_students = config.total_students();
    let early_bird_count = total_students.min(config.early_bird_capacity());
    let regular_count = total_students - early_bird_count;

    let early_bird_total = config.early_bird_fee * early_bird_count as f64;
    let regular_total = config.regular_fee * regular_count as f64;

    RevenueBreakdown {
        early_bird_count,
        regular_count,
        early_bird_total,
        regular_total,
        total: early_bird_total + regular_total,
    }
}

fn compute_expenses(config: &PlanConfig) -> ExpenseBreakdown {
    let fees = &config.monthly_staff_fees;

    let staff = fees.monthly_total_salaries() * CYCLE_DURATION_MONTHS;
    let marketing = fees.marketing * CYCLE_DURATION_MONTHS;
    let software = config.software_fee;
    let setup = config.setup_fee;
    let certification = config.cert_fee_per_student * config.total_students() as f64;

    ExpenseBreakdown {
        staff,
        marketing,
        software,
        setup,
        certification,
        total: staff + marketing + software + setup + certification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanField;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn loss_making_config() -> PlanConfig {
        let mut config = PlanConfig::default().with_enrollment(3, 1, 1);
        config.setup_fee = Rupees(20_000.0);
        config
    }

    #[test]
    fn test_reference_scenario() {
        let result = compute(&PlanConfig::default());

        assert_eq!(result.revenue.early_bird_count, 10);
        assert_eq!(result.revenue.regular_count, 30);
        assert_eq!(result.revenue.early_bird_total, Rupees(319_990.0));
        assert_eq!(result.revenue.regular_total, Rupees(1_109_970.0));
        assert_eq!(result.revenue.total, Rupees(1_429_960.0));

        assert_eq!(result.expenses.staff, Rupees(155_000.0));
        assert_eq!(result.expenses.marketing, Rupees(75_000.0));
        assert_eq!(result.expenses.software, Rupees(75_000.0));
        assert_eq!(result.expenses.setup, Rupees(20_000.0));
        assert_eq!(result.expenses.certification, Rupees(80_000.0));
        assert_eq!(result.expenses.total, Rupees(405_000.0));

        assert_eq!(result.profit, Rupees(1_024_960.0));
        assert_relative_eq!(result.building_share.value(), 204_992.0, max_relative = 1e-12);
        assert_relative_eq!(result.dot_share.value(), 819_968.0, max_relative = 1e-12);

        assert_eq!(result.next_cycle.profit, Rupees(1_044_960.0));
        assert_eq!(result.annual.profit, Rupees(4_159_840.0));
        assert_relative_eq!(result.margin.value(), 1_024_960.0 / 1_429_960.0 * 100.0);
    }

    #[test]
    fn test_all_early_bird_when_capacity_exceeds_enrollment() {
        let config = PlanConfig::default().with_enrollment(4, 2, 5);
        let result = compute(&config);
        assert_eq!(result.revenue.early_bird_count, 8);
        assert_eq!(result.revenue.regular_count, 0);
        assert_eq!(result.revenue.total, config.early_bird_fee * 8.0);
    }

    #[test]
    fn test_counts_partition_enrollment() {
        for (students, batches, limit) in [(0, 1, 0), (20, 2, 5), (7, 3, 10), (15, 4, 0), (1, 1, 1)] {
            let config = PlanConfig::default().with_enrollment(students, batches, limit);
            let result = compute(&config);
            let r = result.revenue;
            assert_eq!(r.early_bird_count + r.regular_count, config.total_students());
            assert!(r.early_bird_count <= config.early_bird_capacity());
            assert!(r.total.value() >= 0.0);
            assert!(result.expenses.total.value() >= 0.0);
        }
    }

    #[test]
    fn test_zero_early_bird_limit() {
        let config = PlanConfig::default().with_enrollment(20, 2, 0);
        let result = compute(&config);
        assert_eq!(result.revenue.early_bird_count, 0);
        assert_eq!(result.revenue.regular_count, 40);
    }

    #[test]
    fn test_loss_is_not_split() {
        let result = compute(&loss_making_config());
        assert!(!result.is_profitable());
        assert_eq!(result.dot_share, Rupees::ZERO);
        assert_eq!(result.building_share, Rupees::ZERO);
        assert_eq!(result.next_cycle.dot_share, Rupees::ZERO);
        assert_eq!(result.annual.building_share, Rupees::ZERO);
    }

    #[test]
    fn test_zero_profit_is_not_split() {
        let split = ProfitSplit::of(Rupees::ZERO, Percent(20.0));
        assert_eq!(split, ProfitSplit::default());
    }

    #[test]
    fn test_positive_split_sums_to_profit() {
        for share in [0.0, 12.5, 20.0, 50.0, 100.0] {
            let config = PlanConfig::default().with_building_share(share);
            let result = compute(&config);
            assert_relative_eq!(
                (result.dot_share + result.building_share).value(),
                result.profit.value(),
                max_relative = 1e-12
            );
            if share > 0.0 {
                let dot_decimal = 1.0 - share / 100.0;
                let share_decimal = share / 100.0;
                assert_relative_eq!(
                    result.dot_share.value() / result.building_share.value(),
                    dot_decimal / share_decimal,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_full_building_share() {
        let result = compute(&PlanConfig::default().with_building_share(100.0));
        assert_eq!(result.dot_share, Rupees::ZERO);
        assert_eq!(result.building_share, result.profit);
    }

    #[test]
    fn test_next_cycle_adds_back_setup() {
        let config = loss_making_config();
        let result = compute(&config);
        assert_eq!(result.next_cycle.profit, result.profit + config.setup_fee);
        assert_eq!(
            result.annual.profit,
            result.profit + result.next_cycle.profit * 3.0
        );
    }

    #[test]
    fn test_next_cycle_split_independent_of_first_cycle_sign() {
        let mut config = PlanConfig::default().with_enrollment(1, 1, 0);
        config.monthly_staff_fees = crate::plan::StaffFees {
            main_instructor: Rupees::ZERO,
            support_staff: Rupees::ZERO,
            admin_manager: Rupees::ZERO,
            marketing: Rupees::ZERO,
        };
        config.software_fee = Rupees::ZERO;
        config.cert_fee_per_student = Rupees::ZERO;
        config.regular_fee = Rupees(10_000.0);
        config.setup_fee = Rupees(15_000.0);

        // One regular student: loses 5,000 now, earns 10,000 once setup is paid off.
        let result = compute(&config);
        assert_eq!(result.profit, Rupees(-5_000.0));
        assert_eq!(result.dot_share, Rupees::ZERO);
        assert_eq!(result.next_cycle.profit, Rupees(10_000.0));
        assert_abs_diff_eq!(result.next_cycle.building_share.value(), 2_000.0, epsilon = 1e-9);
        assert_eq!(result.annual.profit, Rupees(25_000.0));
    }

    #[test]
    fn test_margin_zero_without_revenue() {
        let config = PlanConfig::default().with_enrollment(0, 2, 5);
        let result = compute(&config);
        assert_eq!(result.revenue.total, Rupees::ZERO);
        assert_eq!(result.margin, Percent(0.0));
        assert!(result.profit.value() < 0.0);
    }

    #[test]
    fn test_recurring_costs_scale_with_cycle_length() {
        let mut config = PlanConfig::default();
        config.set(PlanField::MarketingFee, 10_000.0);
        let result = compute(&config);
        assert_eq!(result.expenses.marketing, Rupees(25_000.0));
        assert_eq!(result.expenses.software, config.software_fee);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let config = PlanConfig::default().with_building_share(33.0);
        assert_eq!(compute(&config), compute(&config));
    }

    #[test]
    fn test_result_serialization() {
        let result = compute(&PlanConfig::default());
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("next_cycle"));
        assert!(json.contains("early_bird_count"));
        let roundtrip: ProjectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.revenue, roundtrip.revenue);
        assert_eq!(result.expenses, roundtrip.expenses);
        assert_eq!(result.annual.profit, roundtrip.annual.profit);
    }
}
