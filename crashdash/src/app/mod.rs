mod components;
pub mod config;
mod events;
pub mod storage;

use self::components::{Controls, Dashboard, DatasetHandle};
use crate::app::events::EventQueue;
use crate::BackendAppState;
use config::Config;
use dash_core::backend::BackendRequest;
use events::{OpenDatasetRequested, SaveLoadRequested, SavePlotRequested};
use storage::{load_json, save_json};

use std::{sync::mpsc::Sender, thread::JoinHandle};

pub type DynRequestSender = Sender<Box<dyn BackendRequest<BackendAppState>>>;

pub struct EguiApp {
    pub(crate) config: Config,
    backend_thread_handle: Option<JoinHandle<()>>,
    pub(crate) dataset: DatasetHandle,
    pub(crate) controls: Controls,
    pub(crate) dashboard: Dashboard,
    pub(crate) request_tx: DynRequestSender,
    shortcuts_modal_open: bool,
    ui_selection: UISelection,
    event_queue: EventQueue<Self>,
    request_redraw: Option<()>,
}

#[derive(Debug, PartialEq, Eq)]
enum UISelection {
    Dashboard,
    Preferences,
}

impl UISelection {
    fn next(&self) -> Self {
        match self {
            UISelection::Dashboard => Self::Preferences,
            UISelection::Preferences => Self::Dashboard,
        }
    }
}

impl EguiApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        mut request_tx: Sender<Box<dyn BackendRequest<BackendAppState>>>,
        backend_thread_handle: JoinHandle<()>,
    ) -> Self {
        let mut dataset = DatasetHandle::new();
        dataset.load(config.data_path.clone(), &mut request_tx);

        Self {
            config,
            backend_thread_handle: Some(backend_thread_handle),
            dataset,
            controls: Controls::new(),
            dashboard: Dashboard::new(),
            request_tx,
            shortcuts_modal_open: false,
            ui_selection: UISelection::Dashboard,
            event_queue: EventQueue::<Self>::new(),
            request_redraw: None,
        }
    }

    fn update_state(&mut self) {
        self.run_events();
        if self.dataset.try_update() {
            match self.dataset.data.value() {
                Ok(data) => {
                    log::debug!("dataset arrived with {} records", data.len());
                    self.controls.sync_options(data);
                }
                Err(err) => log::error!("dataset load failed: {}", err),
            }
            self.dashboard.invalidate();
            self.request_redraw();
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }

        self.update_state();

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            // Circle main window view.
            if i.key_pressed(egui::Key::F3) {
                self.ui_selection = self.ui_selection.next();
            }
            // Quick save app state.
            if i.key_pressed(egui::Key::F6) {
                if let Err(error) = save_json(self, None) {
                    log::error!("{}", error)
                };
            }
            // Quick load app state.
            if i.key_pressed(egui::Key::F5) {
                if let Err(error) = load_json(self, None) {
                    log::error!("{}", error)
                };
            }
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                // Quitting cannot be requested from within here, the UI stops,
                // but not the backend thread.
                should_quit = true;
            }
            // Open preferences.
            if i.key_pressed(egui::Key::F12) {
                self.ui_selection = UISelection::Preferences;
            }
            if i.key_pressed(egui::Key::S) && i.modifiers.ctrl {
                log::debug!("open dialog to select save path");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().save_file());
                let event = SaveLoadRequested::new(true, Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
            if i.key_pressed(egui::Key::L) && i.modifiers.ctrl {
                log::debug!("open dialog to select load path");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                let event = SaveLoadRequested::new(false, Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
            if i.key_pressed(egui::Key::O) && i.modifiers.ctrl {
                log::debug!("open dialog to select dataset");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                let event = OpenDatasetRequested::new(Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
            if i.key_pressed(egui::Key::P) && i.modifiers.ctrl {
                log::debug!("open dialog to select svg plot path");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().save_file());
                let event = SavePlotRequested::new(Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_panel(ui, ctx);
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(handle) = self.backend_thread_handle.take() {
            dash_core::backend::request_stop(&self.request_tx, handle);
        }
    }
}

impl EguiApp {
    fn central_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        use UISelection as U;
        match self.ui_selection {
            U::Dashboard => {
                self.dataset.render_status(ui);
                if self.controls.render(ui) {
                    self.dashboard.invalidate();
                }
                ui.separator();
                self.dashboard
                    .render(&self.dataset, &self.controls.selection, &self.config, ui);
            }
            U::Preferences => {
                self.config.render(ctx, ui);
            }
        }
    }

    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Dataset").clicked() {
                        log::debug!("open dialog to select dataset");
                        let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                        let event = OpenDatasetRequested::new(Some(handle));
                        self.event_queue.queue_event(Box::new(event));
                    }
                    if ui.button("Save Session").clicked() {
                        log::debug!("open dialog to select save path");
                        let handle = std::thread::spawn(|| rfd::FileDialog::new().save_file());
                        let event = SaveLoadRequested::new(true, Some(handle));
                        self.event_queue.queue_event(Box::new(event));
                    }
                    if ui.button("Load Session").clicked() {
                        log::debug!("open dialog to select load path");
                        let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                        let event = SaveLoadRequested::new(false, Some(handle));
                        self.event_queue.queue_event(Box::new(event));
                    }
                    if ui.button("Quick Save").clicked() {
                        if let Err(error) = save_json(self, None) {
                            log::error!("{}", error)
                        };
                    }
                    if ui.button("Quick Load").clicked() {
                        // Loading happens on the main thread, the dataset
                        // itself arrives via the backend anyway.
                        if let Err(error) = load_json(self, None) {
                            log::error!("{}", error)
                        };
                    }
                    if ui.button("Preferences").clicked() {
                        self.ui_selection = UISelection::Preferences
                    };
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                // Selection of ui view.
                ui.menu_button("View", |ui| {
                    ui.selectable_value(
                        &mut self.ui_selection,
                        UISelection::Dashboard,
                        "Dashboard",
                    );
                    ui.selectable_value(
                        &mut self.ui_selection,
                        UISelection::Preferences,
                        "Preferences",
                    );
                });

                if ui.button("Export").clicked() {
                    log::debug!("open dialog to select svg plot path");
                    let handle = std::thread::spawn(|| {
                        rfd::FileDialog::new()
                            .set_file_name("chart.svg")
                            .save_file()
                    });
                    let event = SavePlotRequested::new(Some(handle));
                    self.event_queue.queue_event(Box::new(event));
                };

                ui.toggle_value(&mut self.shortcuts_modal_open, "Help (F1)");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_buttons(ui);
                });
            };
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("CTRL + O = Open Dataset");
                    ui.separator();
                    ui.label("CTRL + S = Open Save Dialog");
                    ui.separator();
                    ui.label("CTRL + L = Open Load Dialog");
                    ui.separator();
                    ui.label("CTRL + P = Export Chart as SVG");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F3 = Cycle View");
                    ui.separator();
                    ui.label("F6 = Save App State");
                    ui.separator();
                    ui.label("F5 = Load App State");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                    ui.label("F12 = Open Preferences");
                    ui.separator();
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
