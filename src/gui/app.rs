use std::time::Duration;

use eframe::egui::{
    self,
    RichText,
};

use super::{
    filter_bar::{
        FilterBar,
        FilterBarAction,
    },
    header::Header,
    job_card::job_card,
    loader::LoaderView,
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::core::{
    filter,
    tasks::{
        TaskManager,
        TaskResult,
    },
    FilterSet,
    Job,
};

/// Minimum spinner time before the first render of the list.
pub const LOAD_DELAY: Duration = Duration::from_secs(2);

const MAX_CONTENT_WIDTH: f32 = 860.0;

pub struct JobBoardApp {
    jobs: Vec<Job>,
    error: Option<String>,
    loading: bool,
    filters: FilterSet,

    settings: SettingsData,
    theme: Theme,
    task_manager: TaskManager,
}

impl JobBoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = SettingsData::load();
        let theme = Theme::cyan();

        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let mut task_manager = TaskManager::new();
        task_manager.load_jobs(settings.data_url.clone(), LOAD_DELAY);

        Self {
            jobs: Vec::new(),
            error: None,
            loading: true,
            filters: FilterSet::new(),
            settings,
            theme,
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::JobsLoaded(Ok(jobs)) => {
                println!("Loaded {} job listings", jobs.len());
                self.jobs = jobs;
                self.loading = false;
            }
            TaskResult::JobsLoaded(Err(message)) => {
                eprintln!("Job data load failed: {}", message);
                self.error = Some(message);
                self.loading = false;
            }
        }
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let side_margin = (ui.available_width() - MAX_CONTENT_WIDTH).max(0.0) / 2.0;

            ui.horizontal_top(|ui| {
                ui.add_space(side_margin);

                ui.vertical(|ui| {
                    ui.set_width(ui.available_width() - side_margin);
                    ui.add_space(18.0);

                    if !self.filters.is_empty() {
                        match FilterBar::show(ui, &self.theme, &self.filters) {
                            Some(FilterBarAction::Remove(tag)) => self.filters.remove(&tag),
                            Some(FilterBarAction::Clear) => self.filters.clear(),
                            None => {}
                        }
                        ui.add_space(14.0);
                    }

                    let mut clicked_tag = None;
                    let mut shown = 0;

                    for job in &self.jobs {
                        if !filter::matches(job, &self.filters) {
                            continue;
                        }
                        shown += 1;

                        if let Some(tag) = job_card(ui, &self.theme, job) {
                            clicked_tag = Some(tag);
                        }
                        ui.add_space(14.0);
                    }

                    if shown == 0 {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(
                                RichText::new("No jobs match the selected filters.")
                                    .size(15.0)
                                    .color(self.theme.muted(&ctx)),
                            );
                        });
                    }

                    if let Some(tag) = clicked_tag {
                        self.filters.add(tag);
                    }
                });
            });
        });
    }
}

impl eframe::App for JobBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(dark_mode) = Header::show(ctx, &self.theme) {
            self.settings.dark_mode = dark_mode;
            self.settings.save();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loading {
                LoaderView::show(ui, &self.theme);
                // Keep the spinner animating and notice the load promptly.
                ctx.request_repaint_after(Duration::from_millis(100));
            } else if let Some(error) = &self.error {
                ui.vertical_centered(|ui| {
                    ui.add_space(64.0);
                    ui.label(RichText::new(error).size(16.0).color(self.theme.error(ctx)));
                });
            } else {
                self.show_board(ui);
            }
        });
    }
}
