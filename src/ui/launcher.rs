use std::path::{Path, PathBuf};

use log::info;
use rfd::FileDialog;

use crate::config::config::*;
use crate::core::config_store::ConfigStore;
use crate::core::process_launcher::{LaunchCommand, Spawner};
use crate::i18n::fill;
use crate::i18n::keys::*;
use crate::ui::error_window::ErrorWindow;
use crate::ui::fonts;

pub struct LauncherApp {
    store: ConfigStore,
    spawner: Box<dyn Spawner>,
    opener_path: PathBuf,
    errors: Vec<ErrorWindow>,
    error_seq: u64,
}

impl LauncherApp {
    pub fn new(store: ConfigStore, spawner: Box<dyn Spawner>) -> Self {
        Self {
            store,
            spawner,
            opener_path: sibling_executable(OPENER_BINARY),
            errors: Vec::new(),
            error_seq: 0,
        }
    }

    pub fn init(&mut self, ctx: &egui::Context) {
        fonts::install_cjk_font(ctx);
    }

    fn start_opener(&mut self) {
        let command = LaunchCommand::executable(&self.opener_path);
        self.run(command, LAUNCH_OPENER_FAILED);
    }

    fn run_script(&mut self, script: &Path) {
        let command = LaunchCommand::script(script_interpreter(), script);
        self.run(command, LAUNCH_SCRIPT_FAILED);
    }

    fn run(&mut self, command: LaunchCommand, failure_title_key: &str) {
        match self.spawner.spawn(&command) {
            Ok(pid) => info!("Started {} (pid {})", command, pid),
            Err(e) => {
                log::error!("Failed to start {}: {}", command, e);
                self.error_seq += 1;
                let window = ErrorWindow::from_error(
                    self.error_seq,
                    self.store.resolve(failure_title_key),
                    &command.to_string(),
                    &e,
                );
                self.errors.push(window);
            }
        }
    }

    fn pick_script(&mut self) {
        let picked = FileDialog::new()
            .set_title(self.store.resolve(SELECT_SCRIPT_TITLE))
            .add_filter(self.store.resolve(SCRIPT_FILTER), SCRIPT_EXTENSIONS)
            .add_filter(self.store.resolve(ALL_FILES_FILTER), &["*"])
            .pick_file();

        if let Some(script) = picked {
            self.run_script(&script);
        }
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading(
                    egui::RichText::new(self.store.resolve(LAUNCHER_TITLE))
                        .size(28.0)
                        .strong(),
                );
                ui.label(fill(self.store.resolve(VERSION_LABEL), &[APP_VERSION]));
                ui.add_space(20.0);

                let size = egui::vec2(200.0, 44.0);
                let opener = egui::Button::new(self.store.resolve(LAUNCH_OPENER_BUTTON))
                    .fill(egui::Color32::from_rgb(0x4c, 0xaf, 0x50))
                    .min_size(size);
                if ui.add(opener).clicked() {
                    self.start_opener();
                }

                ui.add_space(10.0);
                let script = egui::Button::new(self.store.resolve(SELECT_SCRIPT_BUTTON))
                    .fill(egui::Color32::from_rgb(0x21, 0x96, 0xf3))
                    .min_size(size);
                if ui.add(script).clicked() {
                    self.pick_script();
                }
            });
        });
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_main(ctx);

        for window in &mut self.errors {
            window.show(ctx, &self.store);
        }
        self.errors.retain(ErrorWindow::is_open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use tempfile::tempdir;

    struct Recorder {
        seen: Rc<RefCell<Vec<LaunchCommand>>>,
        fail: bool,
    }

    impl Spawner for Recorder {
        fn spawn(&self, command: &LaunchCommand) -> io::Result<u32> {
            self.seen.borrow_mut().push(command.clone());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
            } else {
                Ok(42)
            }
        }
    }

    fn launcher(fail: bool) -> (LauncherApp, Rc<RefCell<Vec<LaunchCommand>>>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut store = ConfigStore::load(dir.path().join(CONFIG_FILE));
        store.bootstrap_defaults().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            seen: Rc::clone(&seen),
            fail,
        };
        (LauncherApp::new(store, Box::new(recorder)), seen, dir)
    }

    #[test]
    fn opener_is_started_from_next_to_the_launcher() {
        let (mut app, seen, _dir) = launcher(false);
        app.start_opener();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].program, sibling_executable(OPENER_BINARY));
        assert!(app.errors.is_empty());
    }

    #[test]
    fn script_goes_through_the_interpreter() {
        let (mut app, seen, _dir) = launcher(false);
        app.run_script(Path::new("/home/me/tool.py"));

        let seen = seen.borrow();
        assert_eq!(seen[0].program, Path::new(&script_interpreter()));
        assert_eq!(seen[0].args.len(), 1);
    }

    #[test]
    fn failures_open_one_window_each() {
        let (mut app, _seen, _dir) = launcher(true);
        app.start_opener();
        app.run_script(Path::new("tool.py"));

        assert_eq!(app.errors.len(), 2);
        assert_eq!(app.errors[0].summary(), "access denied");
        assert!(app.errors[1].details().contains("tool.py"));
    }
}
