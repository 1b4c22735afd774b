use std::backtrace::Backtrace;
use std::fmt::Debug;

use crate::core::config_store::ConfigStore;
use crate::i18n::keys::*;

pub struct ErrorWindow {
    id: egui::Id,
    title: String,
    summary: String,
    details: String,
    open: bool,
}

impl ErrorWindow {
    pub fn new(seq: u64, title: &str, summary: String, details: String) -> Self {
        Self {
            id: egui::Id::new(("error_window", seq)),
            title: title.to_string(),
            summary,
            details,
            open: true,
        }
    }

    pub fn from_error<E: std::error::Error + Debug>(
        seq: u64,
        title: &str,
        context: &str,
        error: &E,
    ) -> Self {
        let details = format!(
            "{}\n\n{:#?}\n\n{}",
            context,
            error,
            Backtrace::force_capture()
        );
        Self::new(seq, title, error.to_string(), details)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn show(&mut self, ctx: &egui::Context, store: &ConfigStore) {
        let mut close_clicked = false;

        egui::Window::new(self.title.as_str())
            .id(self.id)
            .open(&mut self.open)
            .collapsible(false)
            .resizable(true)
            .default_size([500.0, 400.0])
            .show(ctx, |ui| {
                ui.strong(store.resolve(ERROR_SUMMARY));
                ui.label(self.summary.as_str());
                ui.add_space(8.0);

                ui.strong(store.resolve(ERROR_DETAILS));
                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .show(ui, |ui| {
                        let mut details = self.details.as_str();
                        ui.add(
                            egui::TextEdit::multiline(&mut details)
                                .desired_width(f32::INFINITY)
                                .font(egui::TextStyle::Monospace),
                        );
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(store.resolve(COPY_ERROR)).clicked() {
                        ctx.copy_text(self.details.clone());
                    }
                    if ui.button(store.resolve(CLOSE)).clicked() {
                        close_clicked = true;
                    }
                });
            });

        if close_clicked {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn from_error_splits_summary_and_details() {
        let err = io::Error::new(io::ErrorKind::NotFound, "program not found");
        let window = ErrorWindow::from_error(1, "Could not start", "python tool.py", &err);

        assert!(window.is_open());
        assert_eq!(window.summary(), "program not found");
        assert!(window.details().starts_with("python tool.py\n"));
        assert!(window.details().contains("NotFound"));
    }
}
