use log::{debug, info, warn};
use rfd::FileDialog;

use crate::config::config::*;
use crate::core::config_store::ConfigStore;
use crate::core::process_launcher::{launch, LaunchRequest, Spawner};
use crate::core::startup::StartupSequence;
use crate::i18n::fill;
use crate::i18n::keys::*;
use crate::ui::fonts;

pub struct MultiOpenerApp {
    store: ConfigStore,
    spawner: Box<dyn Spawner>,
    startup: Option<StartupSequence>,
    exe_path: String,
    count: u32,
    status: Vec<String>,
}

impl MultiOpenerApp {
    pub fn new(store: ConfigStore, spawner: Box<dyn Spawner>, startup: StartupSequence) -> Self {
        Self {
            store,
            spawner,
            startup: Some(startup),
            exe_path: String::new(),
            count: 1,
            status: Vec::new(),
        }
    }

    pub fn init(&mut self, ctx: &egui::Context) {
        fonts::install_cjk_font(ctx);
    }

    pub fn window_title(&self) -> String {
        self.store.resolve(TITLE).to_string()
    }

    fn start_instances(&mut self) {
        let Some(request) = LaunchRequest::from_input(&self.exe_path, self.count) else {
            debug!("Start clicked without a program path");
            return;
        };

        info!("Starting {} instance(s) of {}", request.count, request.command);
        let report = launch(self.spawner.as_ref(), &request);

        let started = report.succeeded().to_string();
        let requested = request.count.to_string();
        self.status.clear();
        self.status.push(fill(
            self.store.resolve(LAUNCH_REPORT),
            &[started.as_str(), requested.as_str()],
        ));
        for failure in &report.failures {
            let error = failure.error.to_string();
            self.status
                .push(fill(self.store.resolve(ERROR_MSG), &[error.as_str()]));
        }
    }

    fn toggle_language(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.store.toggle() {
            warn!(
                "Language switched but not saved to {}: {}",
                self.store.path().display(),
                e
            );
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
    }

    fn pick_executable(&mut self) {
        let mut dialog = FileDialog::new();
        if cfg!(windows) {
            dialog = dialog.add_filter(self.store.resolve(EXECUTABLE_FILTER), EXECUTABLE_EXTENSIONS);
        }
        if let Some(path) = dialog.pick_file() {
            self.exe_path = path.display().to_string();
        }
    }

    fn show_splash(&self, ctx: &egui::Context, seq: &StartupSequence) {
        let state = seq.state();
        let label = state
            .stage
            .label_key()
            .map(|key| self.store.resolve(key))
            .unwrap_or_default();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.label(label);
                ui.add(
                    egui::ProgressBar::new(state.percent as f32 / 100.0)
                        .desired_width(320.0)
                        .show_percentage(),
                );
            });
        });
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("opener_form")
                .num_columns(3)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label(self.store.resolve(WECHAT_PATH_LABEL));
                    ui.add(egui::TextEdit::singleline(&mut self.exe_path).desired_width(300.0));
                    if ui.button(self.store.resolve(SELECT_PATH_BUTTON)).clicked() {
                        self.pick_executable();
                    }
                    ui.end_row();

                    ui.label(self.store.resolve(COUNT_LABEL));
                    ui.add(egui::DragValue::new(&mut self.count).range(1..=MAX_INSTANCES));
                    ui.label("");
                    ui.end_row();

                    ui.label("");
                    if ui.button(self.store.resolve(START_BUTTON)).clicked() {
                        self.start_instances();
                    }
                    if ui.button(self.store.resolve(TOGGLE_LANGUAGE)).clicked() {
                        self.toggle_language(ctx);
                    }
                    ui.end_row();
                });

            if !self.status.is_empty() {
                ui.separator();
                for line in &self.status {
                    ui.label(line.as_str());
                }
            }
        });
    }
}

impl eframe::App for MultiOpenerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(seq) = self.startup.take() {
            if !seq.is_done() {
                self.show_splash(ctx, &seq);
                ctx.request_repaint_after(seq.until_next_tick());
                self.startup = Some(seq);
                return;
            }
            info!("Startup sequence finished");
        }

        self.show_form(ctx);
    }
}
