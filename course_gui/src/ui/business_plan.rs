//! Business Plan tab
//!
//! Displays:
//! - Planner configuration grid (enrollment, fees, building share)
//! - Revenue analysis
//! - Operational expenditure with inline-editable amounts
//! - Net profit, margin and the profit split
//! - Collapsible annual and next-cycle projections
//! - PDF export

use iced::widget::{button, column, row, rule, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use course_core::projection::{CycleProjection, ProjectionResult};
use course_core::{PlanField, Rupees, CYCLE_DURATION_MONTHS};

use super::shared::section::{card, value_row, view_section_header};
use super::shared::{editable_amount, GREEN, MUTED, RED};
use crate::{App, Message};

/// Render the business plan tab for the current config and its projection
pub fn view(app: &App, result: ProjectionResult) -> Column<'_, Message> {
    let cards = row![
        view_revenue(app, &result),
        view_expenses(app, &result),
        view_profit(app, &result),
    ]
    .spacing(12);

    let export_button = button(text("Export PDF").size(12))
        .on_press(Message::ExportPdf)
        .padding(Padding::from([6, 14]))
        .style(button::primary);

    column![
        view_planner(app),
        cards,
        view_projections(app.show_projections, &result),
        row![Space::new().width(Length::Fill), export_button],
    ]
    .spacing(12)
}

/// Amount coloured by sign
fn signed_amount(amount: Rupees, size: f32) -> Element<'static, Message> {
    let color = if amount.value() < 0.0 { RED } else { GREEN };
    text(amount.display()).size(size).color(color).into()
}

fn amount(amount: Rupees) -> Element<'static, Message> {
    text(amount.display()).size(12).into()
}

// ============================================================================
// Planner
// ============================================================================

fn view_planner(app: &App) -> Element<'_, Message> {
    let mut grid = column![text("Plan Configuration").size(14)].spacing(8);

    for chunk in PlanField::PLANNER.chunks(3) {
        let mut fields = row![].spacing(12);
        for &field in chunk {
            let value = app
                .planner_text
                .get(&field)
                .map(String::as_str)
                .unwrap_or("");
            fields = fields.push(
                column![
                    text(field.label()).size(10).color(MUTED),
                    text_input("0", value)
                        .on_input(move |raw| Message::PlannerInputChanged(field, raw))
                        .width(Length::Fill)
                        .padding(4)
                        .size(12),
                ]
                .spacing(2)
                .width(Length::Fill),
            );
        }
        grid = grid.push(fields);
    }

    card(grid).into()
}

// ============================================================================
// Cards
// ============================================================================

fn view_revenue<'a>(app: &'a App, result: &ProjectionResult) -> Element<'a, Message> {
    let config = &app.config;
    let revenue = &result.revenue;

    let body = column![
        text("Revenue Analysis").size(14),
        text(format!(
            "{} students across {} batch(es)",
            config.total_students(),
            config.batch_count
        ))
        .size(10)
        .color(MUTED),
        Space::new().height(4),
        value_row(
            format!("Early Bird ({} x {})", revenue.early_bird_count, config.early_bird_fee.display()),
            amount(revenue.early_bird_total),
        ),
        value_row(
            format!("Regular ({} x {})", revenue.regular_count, config.regular_fee.display()),
            amount(revenue.regular_total),
        ),
        rule::horizontal(1),
        value_row("Total Revenue", signed_amount(revenue.total, 14.0)),
    ]
    .spacing(6);

    card(body).into()
}

fn view_expenses<'a>(app: &'a App, result: &ProjectionResult) -> Element<'a, Message> {
    let editing = app.editing.as_ref();

    let mut lines = column![
        text("Operational Expenditure").size(14),
        text(format!("Salaries and marketing over {} months", CYCLE_DURATION_MONTHS))
            .size(10)
            .color(MUTED),
        Space::new().height(4),
    ]
    .spacing(6);

    for field in PlanField::EXPENSES {
        let current = Rupees(app.config.get(field));
        lines = lines.push(value_row(
            field.label(),
            editable_amount::view(field, current, editing),
        ));
    }

    let expenses = &result.expenses;
    lines = lines
        .push(rule::horizontal(1))
        .push(value_row("Staff (cycle)", amount(expenses.staff)))
        .push(value_row("Marketing (cycle)", amount(expenses.marketing)))
        .push(value_row("Certification", amount(expenses.certification)))
        .push(value_row(
            "Total Outflow",
            text(expenses.total.display()).size(14).color(RED),
        ));

    card(lines).into()
}

fn view_profit<'a>(app: &'a App, result: &ProjectionResult) -> Element<'a, Message> {
    let share = app.config.building_share_percent;
    let dot_percent = app.config.dot_share_percent();

    let note = if result.is_profitable() {
        text("Profit is split after all expenses").size(10).color(MUTED)
    } else {
        text("No profit to split this cycle").size(10).color(RED)
    };

    let body = column![
        text("Net Profit").size(14),
        signed_amount(result.profit, 22.0),
        text(format!("Margin: {}", result.margin.display_one_decimal()))
            .size(11)
            .color(MUTED),
        Space::new().height(4),
        rule::horizontal(1),
        value_row(format!("Dot Projects ({})", dot_percent.display()), amount(result.dot_share)),
        value_row(format!("Building ({})", share.display()), amount(result.building_share)),
        note,
    ]
    .spacing(6);

    card(body).into()
}

// ============================================================================
// Projections
// ============================================================================

fn view_projections(expanded: bool, result: &ProjectionResult) -> Element<'static, Message> {
    let header = view_section_header(
        "Annual Expectation & Future Cycles (Detailed)",
        expanded,
        Message::ToggleProjections,
    );

    if !expanded {
        return card(header).padding(4).into();
    }

    card(
        column![
            header,
            row![
                view_cycle(
                    "Next Cycle",
                    "Without the one-time setup cost",
                    &result.next_cycle,
                ),
                view_cycle(
                    "Annual Expectation",
                    "First cycle plus three subsequent cycles",
                    &result.annual,
                ),
            ]
            .spacing(12),
        ]
        .spacing(8),
    )
    .padding(4)
    .into()
}

fn view_cycle(
    title: &'static str,
    subtitle: &'static str,
    cycle: &CycleProjection,
) -> Element<'static, Message> {
    column![
        text(title).size(13),
        text(subtitle).size(10).color(MUTED),
        Space::new().height(2),
        value_row("Total Profit", signed_amount(cycle.profit, 13.0)),
        value_row("Dot Projects Share", amount(cycle.dot_share)),
        value_row("Building Share", amount(cycle.building_share)),
    ]
    .spacing(4)
    .width(Length::Fill)
    .padding(8)
    .align_x(Alignment::Start)
    .into()
}
