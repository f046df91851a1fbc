//! # Financial Report Model
//!
//! The export document as data: four tables and a signature block, built
//! from a [`PlanConfig`] and its [`ProjectionResult`]. The PDF renderer
//! only lays these out; every label and number it prints comes from here.
//!
//! ## Structure
//!
//! ```text
//! FinancialReport
//! ├── meta: ReportMeta (organization, subtitle, signatory, date)
//! ├── revenue: ReportTable (early bird + regular enrollment)
//! ├── expenses: ReportTable (staff, marketing, software, certification, setup)
//! ├── profit_split: ReportTable (dot share, building share)
//! └── projections: ReportTable (next cycle, annual)
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::{PlanConfig, CYCLE_DURATION_MONTHS};
use crate::projection::{compute, ProjectionResult, SUBSEQUENT_CYCLES_PER_YEAR};
use crate::units::{Percent, Rupees};

/// Note printed under the projections heading
pub const PROJECTION_NOTE: &str =
    "Note: Marketing costs may reduce further with word-of-mouth publicity in future cycles.";

/// Header and signature details of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub organization: String,
    pub subtitle: String,
    pub signatory: String,
    pub signatory_title: String,
    pub generated_on: NaiveDate,
}

impl Default for ReportMeta {
    fn default() -> Self {
        ReportMeta {
            organization: "Dot Projects".to_string(),
            subtitle: "Advanced AI Video Making - Financial Projection".to_string(),
            signatory: "Muhammad Shameel KK".to_string(),
            signatory_title: "Director".to_string(),
            generated_on: Utc::now().date_naive(),
        }
    }
}

/// One table cell. Money cells keep their exact value next to the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ReportCell {
    Text(String),
    Amount(Rupees),
}

impl ReportCell {
    fn text(s: impl Into<String>) -> Self {
        ReportCell::Text(s.into())
    }

    fn empty() -> Self {
        ReportCell::Text(String::new())
    }

    /// Text as printed in the document
    pub fn rendered(&self) -> String {
        match self {
            ReportCell::Text(s) => s.clone(),
            ReportCell::Amount(r) => r.display_ascii(),
        }
    }

    /// The exact amount, if this is a money cell
    pub fn amount(&self) -> Option<Rupees> {
        match self {
            ReportCell::Amount(r) => Some(*r),
            ReportCell::Text(_) => None,
        }
    }
}

/// A table row with a stable key for lookups (e.g. `"revenue.total"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub key: String,
    pub cells: Vec<ReportCell>,
}

impl ReportRow {
    fn new(key: &str, cells: Vec<ReportCell>) -> Self {
        ReportRow { key: key.to_string(), cells }
    }

    /// The last money cell of the row
    pub fn amount(&self) -> Option<Rupees> {
        self.cells.iter().rev().find_map(ReportCell::amount)
    }

    /// Printed text of the last money cell
    pub fn rendered_amount(&self) -> Option<String> {
        self.cells
            .iter()
            .rev()
            .find(|c| c.amount().is_some())
            .map(ReportCell::rendered)
    }
}

/// A titled four-column table with an optional footer row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub title: String,
    pub note: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub footer: Option<ReportRow>,
}

impl ReportTable {
    fn new(title: impl Into<String>, header: [&str; 4]) -> Self {
        ReportTable {
            title: title.into(),
            note: None,
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    fn row(mut self, key: &str, cells: Vec<ReportCell>) -> Self {
        self.rows.push(ReportRow::new(key, cells));
        self
    }

    fn footer(mut self, key: &str, label: &str, total: Rupees) -> Self {
        self.footer = Some(ReportRow::new(
            key,
            vec![ReportCell::text(label), ReportCell::empty(), ReportCell::empty(), ReportCell::Amount(total)],
        ));
        self
    }

    /// Rows followed by the footer, if any
    pub fn all_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().chain(self.footer.iter())
    }
}

/// The complete export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub meta: ReportMeta,
    pub revenue: ReportTable,
    pub expenses: ReportTable,
    pub profit_split: ReportTable,
    pub projections: ReportTable,
}

impl FinancialReport {
    /// Lay out a computed projection as report tables.
    ///
    /// # Example
    ///
    /// ```rust
    /// use course_core::plan::PlanConfig;
    /// use course_core::projection::compute;
    /// use course_core::report::{FinancialReport, ReportMeta};
    ///
    /// let config = PlanConfig::default();
    /// let result = compute(&config);
    /// let report = FinancialReport::build(&config, &result, ReportMeta::default());
    ///
    /// assert_eq!(report.amount("profit").unwrap().value(), 1_024_960.0);
    /// assert_eq!(report.profit_split.title, "3. Profit Distribution (80/20 Split)");
    /// ```
    pub fn build(config: &PlanConfig, result: &ProjectionResult, meta: ReportMeta) -> Self {
        FinancialReport {
            meta,
            revenue: revenue_table(config, result),
            expenses: expense_table(config, result),
            profit_split: split_table(config, result),
            projections: projection_table(config, result),
        }
    }

    /// Sanitize, compute and lay out in one step
    pub fn from_config(config: &PlanConfig, meta: ReportMeta) -> Self {
        let clean = config.sanitized();
        let result = compute(&clean);
        Self::build(&clean, &result, meta)
    }

    /// All four tables in document order
    pub fn tables(&self) -> [&ReportTable; 4] {
        [&self.revenue, &self.expenses, &self.profit_split, &self.projections]
    }

    /// Find a row (or footer) by key anywhere in the report
    pub fn row(&self, key: &str) -> Option<&ReportRow> {
        self.tables()
            .into_iter()
            .flat_map(|t| t.all_rows())
            .find(|r| r.key == key)
    }

    /// Exact amount of the row with the given key
    pub fn amount(&self, key: &str) -> Option<Rupees> {
        self.row(key).and_then(ReportRow::amount)
    }

    /// Re-read the headline figures from their printed text.
    ///
    /// Returns `None` if any of them is missing or does not parse.
    pub fn displayed_totals(&self) -> Option<HeadlineTotals> {
        let read = |key: &str| -> Option<Rupees> {
            let text = self.row(key)?.rendered_amount()?;
            Rupees::parse_display(&text)
        };

        Some(HeadlineTotals {
            revenue: read("revenue.total")?,
            expenses: read("expenses.total")?,
            profit: read("profit")?,
            dot_share: read("split.dot_share")?,
            building_share: read("split.building_share")?,
            next_cycle_profit: read("next_cycle.profit")?,
            next_cycle_dot_share: read("next_cycle.dot_share")?,
            next_cycle_building_share: read("next_cycle.building_share")?,
            annual_profit: read("annual.profit")?,
            annual_dot_share: read("annual.dot_share")?,
            annual_building_share: read("annual.building_share")?,
        })
    }
}

/// The headline figures of a projection at display precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadlineTotals {
    pub revenue: Rupees,
    pub expenses: Rupees,
    pub profit: Rupees,
    pub dot_share: Rupees,
    pub building_share: Rupees,
    pub next_cycle_profit: Rupees,
    pub next_cycle_dot_share: Rupees,
    pub next_cycle_building_share: Rupees,
    pub annual_profit: Rupees,
    pub annual_dot_share: Rupees,
    pub annual_building_share: Rupees,
}

impl HeadlineTotals {
    /// Figures of a result rounded the way the report prints them
    pub fn of(result: &ProjectionResult) -> Self {
        HeadlineTotals {
            revenue: result.revenue.total.rounded_to_paise(),
            expenses: result.expenses.total.rounded_to_paise(),
            profit: result.profit.rounded_to_paise(),
            dot_share: result.dot_share.rounded_to_paise(),
            building_share: result.building_share.rounded_to_paise(),
            next_cycle_profit: result.next_cycle.profit.rounded_to_paise(),
            next_cycle_dot_share: result.next_cycle.dot_share.rounded_to_paise(),
            next_cycle_building_share: result.next_cycle.building_share.rounded_to_paise(),
            annual_profit: result.annual.profit.rounded_to_paise(),
            annual_dot_share: result.annual.dot_share.rounded_to_paise(),
            annual_building_share: result.annual.building_share.rounded_to_paise(),
        }
    }
}

fn months_label() -> String {
    format!("{} Months", CYCLE_DURATION_MONTHS)
}

fn revenue_table(config: &PlanConfig, result: &ProjectionResult) -> ReportTable {
    let r = &result.revenue;
    ReportTable::new(
        "1. Revenue Analysis",
        ["Description", "Unit Value", "Count", "Total (INR)"],
    )
    .row(
        "revenue.early_bird",
        vec![
            ReportCell::text("Early Bird Enrollment"),
            ReportCell::text(config.early_bird_fee.display_ascii()),
            ReportCell::text(r.early_bird_count.to_string()),
            ReportCell::Amount(r.early_bird_total),
        ],
    )
    .row(
        "revenue.regular",
        vec![
            ReportCell::text("Regular Enrollment"),
            ReportCell::text(config.regular_fee.display_ascii()),
            ReportCell::text(r.regular_count.to_string()),
            ReportCell::Amount(r.regular_total),
        ],
    )
    .footer("revenue.total", "TOTAL GROSS REVENUE", r.total)
}

fn expense_table(config: &PlanConfig, result: &ProjectionResult) -> ReportTable {
    let fees = &config.monthly_staff_fees;
    let monthly_row = |label: &str, monthly: Rupees| {
        vec![
            ReportCell::text(label),
            ReportCell::text(monthly.display_ascii()),
            ReportCell::text(months_label()),
            ReportCell::Amount(monthly * CYCLE_DURATION_MONTHS),
        ]
    };

    ReportTable::new(
        "2. Operational Expenditure",
        ["Expense Category", "Monthly / Per Unit", "Period / Count", "Total (INR)"],
    )
    .row("expenses.main_instructor", monthly_row("Main Instructor Fee", fees.main_instructor))
    .row("expenses.support_staff", monthly_row("Support Staff Fee", fees.support_staff))
    .row("expenses.admin_manager", monthly_row("Admin Manager Fee", fees.admin_manager))
    .row("expenses.marketing", monthly_row("Marketing Budget", fees.marketing))
    .row(
        "expenses.software",
        vec![
            ReportCell::text("Software Subscriptions"),
            ReportCell::text("-"),
            ReportCell::text("Full Cycle"),
            ReportCell::Amount(result.expenses.software),
        ],
    )
    .row(
        "expenses.certification",
        vec![
            ReportCell::text("Certification Costs"),
            ReportCell::text(config.cert_fee_per_student.display_ascii()),
            ReportCell::text(format!("{} Students", config.total_students())),
            ReportCell::Amount(result.expenses.certification),
        ],
    )
    .row(
        "expenses.setup",
        vec![
            ReportCell::text("Setup & Admin Costs"),
            ReportCell::text("-"),
            ReportCell::text("One-time"),
            ReportCell::Amount(result.expenses.setup),
        ],
    )
    .footer("expenses.total", "TOTAL OPERATIONAL EXPENSES", result.expenses.total)
}

fn split_label(config: &PlanConfig) -> String {
    let dot = config.dot_share_percent().display();
    let building = config.building_share_percent.display();
    format!(
        "{}/{}",
        dot.trim_end_matches('%'),
        building.trim_end_matches('%')
    )
}

fn split_table(config: &PlanConfig, result: &ProjectionResult) -> ReportTable {
    ReportTable::new(
        format!("3. Profit Distribution ({} Split)", split_label(config)),
        ["Entity", "Share %", "Basis", "Amount (INR)"],
    )
    .row(
        "split.dot_share",
        vec![
            ReportCell::text("Dot Projects Share"),
            ReportCell::text(config.dot_share_percent().display()),
            ReportCell::text("Includes risk, admission, course run, support"),
            ReportCell::Amount(result.dot_share),
        ],
    )
    .row(
        "split.building_share",
        vec![
            ReportCell::text("Building Share (Owner)"),
            ReportCell::text(config.building_share_percent.display()),
            ReportCell::text("Building & Infra Facility"),
            ReportCell::Amount(result.building_share),
        ],
    )
    .footer("profit", "NET SURPLUS PROFIT", result.profit)
}

fn projection_table(config: &PlanConfig, result: &ProjectionResult) -> ReportTable {
    let dot = config.dot_share_percent().display();
    let building = config.building_share_percent.display();
    let full = Percent(100.0).display();
    let annual_period = format!("Annual ({} Cycles)", SUBSEQUENT_CYCLES_PER_YEAR + 1);

    let mut table = ReportTable::new(
        "4. Future Projections (Detailed Breakdown)",
        ["Period", "Category", "Share %", "Projected Amount (INR)"],
    );
    table.note = Some(PROJECTION_NOTE.to_string());

    let periods = [
        ("next_cycle", "Next Cycle (Single)".to_string(), &result.next_cycle),
        ("annual", annual_period, &result.annual),
    ];

    for (prefix, period, projection) in periods {
        table = table
            .row(
                &format!("{}.profit", prefix),
                vec![
                    ReportCell::text(period),
                    ReportCell::text("Total Net Profit"),
                    ReportCell::text(full.clone()),
                    ReportCell::Amount(projection.profit),
                ],
            )
            .row(
                &format!("{}.dot_share", prefix),
                vec![
                    ReportCell::empty(),
                    ReportCell::text("Dot Projects Share"),
                    ReportCell::text(dot.clone()),
                    ReportCell::Amount(projection.dot_share),
                ],
            )
            .row(
                &format!("{}.building_share", prefix),
                vec![
                    ReportCell::empty(),
                    ReportCell::text("Building Share"),
                    ReportCell::text(building.clone()),
                    ReportCell::Amount(projection.building_share),
                ],
            );
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanField;

    fn default_report() -> (PlanConfig, ProjectionResult, FinancialReport) {
        let config = PlanConfig::default();
        let result = compute(&config);
        let report = FinancialReport::build(&config, &result, ReportMeta::default());
        (config, result, report)
    }

    #[test]
    fn test_displayed_totals_match_computed_values() {
        let (_, result, report) = default_report();
        let totals = report.displayed_totals().expect("all totals present");
        assert_eq!(totals, HeadlineTotals::of(&result));
        assert_eq!(totals.revenue, Rupees(1_429_960.0));
        assert_eq!(totals.building_share, Rupees(204_992.0));
        assert_eq!(totals.annual_profit, Rupees(4_159_840.0));
    }

    #[test]
    fn test_roundtrip_with_fractional_amounts() {
        let mut config = PlanConfig::default().with_building_share(33.0);
        config.apply_input(PlanField::MainInstructorFee, "35001");
        config.apply_input(PlanField::RegularFee, "36999.75");
        let result = compute(&config);
        let report = FinancialReport::build(&config, &result, ReportMeta::default());
        assert_eq!(report.displayed_totals(), Some(HeadlineTotals::of(&result)));
    }

    #[test]
    fn test_roundtrip_with_very_large_fee() {
        let mut config = PlanConfig::default();
        config.apply_input(PlanField::RegularFee, "1e17");
        let result = compute(&config);
        let report = FinancialReport::build(&config, &result, ReportMeta::default());
        let totals = report.displayed_totals().unwrap();
        assert_eq!(totals, HeadlineTotals::of(&result));
        assert!(totals.revenue.value() > 2.9e18);
    }

    #[test]
    fn test_split_title_keeps_small_shares_visible() {
        let config = PlanConfig::default().with_building_share(0.04);
        let report = FinancialReport::from_config(&config, ReportMeta::default());
        assert_eq!(report.profit_split.title, "3. Profit Distribution (99.96/0.04 Split)");
    }

    #[test]
    fn test_roundtrip_with_loss() {
        let config = PlanConfig::default().with_enrollment(2, 1, 1);
        let result = compute(&config);
        let report = FinancialReport::build(&config, &result, ReportMeta::default());
        let totals = report.displayed_totals().unwrap();
        assert!(totals.profit.value() < 0.0);
        assert_eq!(totals.profit, result.profit.rounded_to_paise());
        assert_eq!(totals.dot_share, Rupees::ZERO);
    }

    #[test]
    fn test_revenue_rows() {
        let (_, _, report) = default_report();
        let early = report.row("revenue.early_bird").unwrap();
        let rendered: Vec<String> = early.cells.iter().map(ReportCell::rendered).collect();
        assert_eq!(
            rendered,
            ["Early Bird Enrollment", "Rs. 31,999", "10", "Rs. 3,19,990"]
        );
        assert_eq!(report.amount("revenue.regular"), Some(Rupees(1_109_970.0)));
    }

    #[test]
    fn test_expense_rows() {
        let (_, _, report) = default_report();
        assert_eq!(report.expenses.rows.len(), 7);
        assert_eq!(report.amount("expenses.main_instructor"), Some(Rupees(87_500.0)));
        assert_eq!(report.amount("expenses.marketing"), Some(Rupees(75_000.0)));

        let cert = report.row("expenses.certification").unwrap();
        assert_eq!(cert.cells[2].rendered(), "40 Students");

        let staff_rows: Rupees = ["main_instructor", "support_staff", "admin_manager"]
            .iter()
            .filter_map(|k| report.amount(&format!("expenses.{}", k)))
            .sum();
        assert_eq!(staff_rows, Rupees(155_000.0));
    }

    #[test]
    fn test_split_title_follows_share() {
        let config = PlanConfig::default().with_building_share(35.0);
        let report = FinancialReport::from_config(&config, ReportMeta::default());
        assert_eq!(report.profit_split.title, "3. Profit Distribution (65/35 Split)");
        let building = report.row("split.building_share").unwrap();
        assert_eq!(building.cells[1].rendered(), "35%");
    }

    #[test]
    fn test_projection_rows() {
        let (_, _, report) = default_report();
        assert_eq!(report.projections.rows.len(), 6);
        assert_eq!(report.projections.note.as_deref(), Some(PROJECTION_NOTE));
        let annual = report.row("annual.profit").unwrap();
        assert_eq!(annual.cells[0].rendered(), "Annual (4 Cycles)");
        assert_eq!(annual.cells[2].rendered(), "100%");
    }

    #[test]
    fn test_from_config_sanitizes() {
        let mut config = PlanConfig::default();
        config.setup_fee = Rupees(-5_000.0);
        let report = FinancialReport::from_config(&config, ReportMeta::default());
        assert_eq!(report.amount("expenses.setup"), Some(Rupees::ZERO));
    }
}
