//! # Coursebook GUI Application
//!
//! Desktop front end for the course business plan. Three tabs share one
//! in-memory [`PlanConfig`]:
//!
//! - **Course Structure** - the weekly curriculum and batch timetable
//! - **Business Plan** - planner inputs, editable expenses and projections
//! - **Community Support** - student support channels
//!
//! Every edit re-runs [`course_core::compute`]; nothing is persisted.

mod ui;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task};

use course_core::pdf::{render_plan_pdf, DEFAULT_EXPORT_FILE_NAME};
use course_core::{compute, write_export, CalcResult, PlanConfig, PlanField, ReportMeta};

fn main() -> iced::Result {
    env_logger::init();
    log::info!("starting Coursebook {}", env!("CARGO_PKG_VERSION"));

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size((1100.0, 860.0))
        .run()
}

// ============================================================================
// State
// ============================================================================

/// Top-level view selected by the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Structure,
    BusinessPlan,
    Community,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Structure, Tab::BusinessPlan, Tab::Community];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Structure => "Course Structure",
            Tab::BusinessPlan => "Business Plan",
            Tab::Community => "Community Support",
        }
    }
}

/// An expense amount being edited in place
#[derive(Debug, Clone, PartialEq)]
pub struct InlineEdit {
    pub field: PlanField,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    ToggleWeek(u32),
    ToggleProjections,

    // Planner inputs apply on every keystroke
    PlannerInputChanged(PlanField, String),

    // Inline expense editing
    StartEdit(PlanField),
    EditChanged(String),
    CommitEdit,

    ExportPdf,
    ExportPathChosen(Option<PathBuf>),
}

pub struct App {
    pub config: PlanConfig,
    pub active_tab: Tab,
    /// At most one week is expanded at a time
    pub expanded_week: Option<u32>,
    pub show_projections: bool,
    /// Raw text of the planner inputs, keyed by field
    pub planner_text: HashMap<PlanField, String>,
    pub editing: Option<InlineEdit>,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        let config = PlanConfig::default();
        let planner_text = PlanField::PLANNER
            .iter()
            .map(|&field| (field, field_text(&config, field)))
            .collect();

        Self {
            config,
            active_tab: Tab::default(),
            expanded_week: Some(1),
            show_projections: true,
            planner_text,
            editing: None,
            status: "Ready".to_string(),
        }
    }
}

/// Plain editable text for a field's current value
pub fn field_text(config: &PlanConfig, field: PlanField) -> String {
    let value = config.get(field);
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

async fn choose_export_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Export Financial Projection")
        .set_file_name(DEFAULT_EXPORT_FILE_NAME)
        .add_filter("PDF", &["pdf"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn title(&self) -> String {
        format!("Coursebook - {}", self.active_tab.label())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.commit_edit();
                self.active_tab = tab;
            }
            Message::ToggleWeek(number) => {
                self.expanded_week = if self.expanded_week == Some(number) {
                    None
                } else {
                    Some(number)
                };
            }
            Message::ToggleProjections => self.show_projections = !self.show_projections,

            Message::PlannerInputChanged(field, text) => {
                self.config.apply_input(field, &text);
                self.planner_text.insert(field, text);
            }

            Message::StartEdit(field) => {
                self.commit_edit();
                self.editing = Some(InlineEdit {
                    field,
                    text: field_text(&self.config, field),
                });
            }
            Message::EditChanged(text) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.text = text;
                }
            }
            Message::CommitEdit => self.commit_edit(),

            Message::ExportPdf => {
                self.commit_edit();
                self.status = "Choosing export location...".to_string();
                return Task::perform(choose_export_path(), Message::ExportPathChosen);
            }
            Message::ExportPathChosen(Some(path)) => {
                self.status = match self.export_to(&path) {
                    Ok(()) => format!("Exported {}", path.display()),
                    Err(e) => {
                        log::error!("export failed: {}", e);
                        format!("Export failed: {}", e)
                    }
                };
            }
            Message::ExportPathChosen(None) => {
                self.status = "Export cancelled".to_string();
            }
        }
        Task::none()
    }

    /// Apply and close the open inline edit, if any
    fn commit_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            self.config.apply_input(edit.field, &edit.text);
        }
    }

    fn export_to(&self, path: &Path) -> CalcResult<()> {
        let meta = ReportMeta {
            generated_on: chrono::Local::now().date_naive(),
            ..ReportMeta::default()
        };
        let bytes = render_plan_pdf(&self.config, meta)?;
        write_export(&bytes, path)
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.active_tab {
            Tab::Structure => {
                ui::course_structure::view(self.config.batch_count, self.expanded_week).into()
            }
            Tab::BusinessPlan => ui::business_plan::view(self, compute(&self.config)).into(),
            Tab::Community => ui::community::view().into(),
        };

        let content = column![
            ui::header::view_header(&self.config),
            ui::header::view_tabs(self.active_tab),
            body,
            ui::header::view_launch_strip(&self.config),
            ui::status_bar::view_status_bar(&self.config, &self.status),
        ]
        .spacing(16)
        .padding(20)
        .max_width(1000);

        scrollable(container(content).center_x(Length::Fill)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::Rupees;

    #[test]
    fn test_default_state() {
        let app = App::default();
        assert_eq!(app.active_tab, Tab::Structure);
        assert_eq!(app.expanded_week, Some(1));
        assert!(app.show_projections);
        assert_eq!(app.planner_text[&PlanField::StudentsPerBatch], "20");
        assert_eq!(app.planner_text[&PlanField::RegularFee], "36999");
    }

    #[test]
    fn test_toggle_week_keeps_one_open() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleWeek(3));
        assert_eq!(app.expanded_week, Some(3));
        let _ = app.update(Message::ToggleWeek(3));
        assert_eq!(app.expanded_week, None);
    }

    #[test]
    fn test_planner_input_applies_immediately() {
        let mut app = App::default();
        let _ = app.update(Message::PlannerInputChanged(PlanField::BatchCount, "3".into()));
        assert_eq!(app.config.batch_count, 3);
        assert_eq!(app.planner_text[&PlanField::BatchCount], "3");

        let _ = app.update(Message::PlannerInputChanged(PlanField::RegularFee, "".into()));
        assert_eq!(app.config.regular_fee, Rupees::ZERO);
        assert_eq!(app.planner_text[&PlanField::RegularFee], "");
    }

    #[test]
    fn test_inline_edit_commits_on_done() {
        let mut app = App::default();
        let _ = app.update(Message::StartEdit(PlanField::SoftwareFee));
        assert_eq!(app.editing.as_ref().map(|e| e.text.as_str()), Some("75000"));

        let _ = app.update(Message::EditChanged("80,000".into()));
        assert_eq!(app.config.software_fee, Rupees(75000.0));

        let _ = app.update(Message::CommitEdit);
        assert!(app.editing.is_none());
        assert_eq!(app.config.software_fee, Rupees(80000.0));
    }

    #[test]
    fn test_starting_another_edit_commits_the_first() {
        let mut app = App::default();
        let _ = app.update(Message::StartEdit(PlanField::SetupFee));
        let _ = app.update(Message::EditChanged("25000".into()));
        let _ = app.update(Message::StartEdit(PlanField::MarketingFee));

        assert_eq!(app.config.setup_fee, Rupees(25000.0));
        assert_eq!(app.editing.as_ref().map(|e| e.field), Some(PlanField::MarketingFee));
    }

    #[test]
    fn test_inline_edit_leaves_planner_text_alone() {
        let mut app = App::default();
        let before = app.planner_text.clone();
        let _ = app.update(Message::StartEdit(PlanField::CertFeePerStudent));
        let _ = app.update(Message::EditChanged("abc".into()));
        let _ = app.update(Message::TabSelected(Tab::Community));

        assert!(app.editing.is_none());
        assert_eq!(app.config.cert_fee_per_student, Rupees::ZERO);
        assert_eq!(app.planner_text, before);
        assert_eq!(app.planner_text.len(), PlanField::PLANNER.len());
    }

    #[test]
    fn test_field_text_formatting() {
        let mut config = PlanConfig::default();
        assert_eq!(field_text(&config, PlanField::BuildingSharePercent), "20");
        config.set(PlanField::BuildingSharePercent, 12.5);
        assert_eq!(field_text(&config, PlanField::BuildingSharePercent), "12.5");
    }

    #[test]
    fn test_cancelled_export_sets_status() {
        let mut app = App::default();
        let _ = app.update(Message::ExportPathChosen(None));
        assert_eq!(app.status, "Export cancelled");
    }
}
