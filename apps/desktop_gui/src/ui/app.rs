use std::{path::PathBuf, time::Duration};

use client_core::{CreateEventForm, ImageSelection, Navigator, Route};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::protocol::EventSummary;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::router::AppRouter;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Shown above every page until dismissed.
#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub(crate) struct PreviewTexture {
    pub texture: TextureHandle,
    pub width: usize,
    pub height: usize,
}

#[derive(Default)]
pub(crate) struct HomeState {
    pub events: Vec<EventSummary>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

pub struct EventDeskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    pub(crate) server_url: String,
    pub(crate) router: AppRouter,

    pub(crate) form: CreateEventForm,
    pub(crate) preview_texture: Option<PreviewTexture>,
    pub(crate) preview_note: Option<String>,
    active_submission: Option<u64>,
    next_submission_id: u64,

    pub(crate) home: HomeState,

    pub(crate) status: String,
    status_banner: Option<StatusBanner>,
}

impl EventDeskApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            server_url: startup.server_url.to_string(),
            router: AppRouter::new(startup.start_route),
            form: CreateEventForm::new(),
            preview_texture: None,
            preview_note: None,
            active_submission: None,
            next_submission_id: 0,
            home: HomeState::default(),
            status: "Starting backend worker...".to_string(),
            status_banner: None,
        };
        app.mount(startup.start_route);
        app.flush_refresh();
        app
    }

    pub(crate) fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => self.handle_error(err),
                UiEvent::ImagePreviewLoaded {
                    path,
                    data_url,
                    image,
                } => {
                    if self.form.apply_preview(&path, data_url) {
                        let color_image = egui::ColorImage::from_rgba_unmultiplied(
                            [image.width, image.height],
                            &image.rgba,
                        );
                        let texture = ctx.load_texture(
                            format!("event-image-preview:{}", path.display()),
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.preview_texture = Some(PreviewTexture {
                            texture,
                            width: image.width,
                            height: image.height,
                        });
                        self.preview_note = None;
                    }
                }
                UiEvent::ImagePreviewFailed { path, reason } => {
                    if self.form.image().is_some_and(|selection| selection.path == path) {
                        tracing::warn!(path = %path.display(), "preview failed: {reason}");
                        self.preview_note = Some(format!("Preview unavailable: {reason}"));
                    }
                }
                UiEvent::SubmitFinished {
                    submission_id,
                    result,
                } => {
                    if self.active_submission != Some(submission_id) {
                        tracing::debug!(submission_id, "ignoring result of abandoned submit");
                        continue;
                    }
                    self.active_submission = None;
                    let previous = self.router.current();
                    if self.form.finish_submit(result, &mut self.router) {
                        self.status = "Event created".to_string();
                    }
                    self.sync_route(previous);
                }
                UiEvent::EventsRefreshed(events) => {
                    tracing::debug!(count = events.len(), "events refreshed");
                    self.home = HomeState {
                        events,
                        loading: false,
                        loaded: true,
                        error: None,
                    };
                }
            }
        }
        self.flush_refresh();
    }

    fn handle_error(&mut self, err: UiError) {
        let text = format!("{} error: {}", err_label(err.category()), err.message());
        if err.context() == UiErrorContext::Refresh {
            self.home.loading = false;
            self.home.error = Some(text.clone());
        }
        if err.wants_banner() {
            self.status_banner = Some(StatusBanner {
                message: text.clone(),
            });
        }
        self.status = text;
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        let previous = self.router.current();
        self.router.push(route);
        self.sync_route(previous);
        self.flush_refresh();
    }

    fn sync_route(&mut self, previous: Route) {
        let current = self.router.current();
        if previous == current {
            return;
        }
        if previous == Route::CreateEvent {
            self.unmount_form();
        }
        self.mount(current);
    }

    fn mount(&mut self, route: Route) {
        match route {
            Route::CreateEvent => self.reset_form(),
            Route::Home => {
                if !self.home.loaded && !self.home.loading {
                    self.router.refresh();
                }
            }
        }
    }

    /// Leaving the page abandons an in-flight submit.
    fn unmount_form(&mut self) {
        if let Some(submission_id) = self.active_submission.take() {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::CancelSubmit { submission_id },
                &mut self.status,
            );
            self.form.cancel_submit();
        }
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form = CreateEventForm::new();
        self.preview_texture = None;
        self.preview_note = None;
    }

    pub(crate) fn request_refresh(&mut self) {
        self.router.refresh();
        self.flush_refresh();
    }

    fn flush_refresh(&mut self) {
        if !self.router.take_refresh() {
            return;
        }
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::RefreshEvents, &mut self.status)
        {
            self.home.loading = true;
            self.home.error = None;
        } else {
            self.home.error = Some(self.status.clone());
        }
    }

    pub(crate) fn pick_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.select_image(path);
        }
    }

    pub(crate) fn select_image(&mut self, path: PathBuf) {
        let selection = ImageSelection::from_path(path);
        self.form.select_image(selection.clone());
        self.preview_texture = None;
        self.preview_note = None;
        if !selection.is_image_mime() {
            tracing::warn!(mime = %selection.mime_type, "selected file is not an image");
            self.preview_note = Some(format!(
                "Preview unavailable: {} is not an image",
                selection.file_name
            ));
            return;
        }
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadImagePreview { selection },
            &mut self.status,
        );
    }

    pub(crate) fn clear_image(&mut self) {
        self.form.clear_image();
        self.preview_texture = None;
        self.preview_note = None;
    }

    pub(crate) fn submit_form(&mut self) {
        let Some(submission) = self.form.begin_submit() else {
            return;
        };
        self.next_submission_id += 1;
        let submission_id = self.next_submission_id;
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitEvent {
                submission_id,
                submission,
            },
            &mut self.status,
        ) {
            self.active_submission = Some(submission_id);
            self.status = "Creating event...".to_string();
        } else {
            self.form.fail(self.status.clone());
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            if show_error_banner(ui, &banner.message) {
                self.status_banner = None;
            }
            ui.add_space(8.0);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Event Desk");
                ui.separator();
                let current = self.router.current();
                if ui
                    .selectable_label(current == Route::Home, "Events")
                    .clicked()
                {
                    self.navigate(Route::Home);
                }
                if ui
                    .selectable_label(current == Route::CreateEvent, "Create Event")
                    .clicked()
                {
                    self.navigate(Route::CreateEvent);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(&self.status).weak());
                    ui.small(egui::RichText::new(&self.server_url).weak());
                });
            });
        });
    }
}

/// Red inline banner. Returns `true` when the user dismissed it.
pub(crate) fn show_error_banner(ui: &mut egui::Ui, message: &str) -> bool {
    let mut dismissed = false;
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(111, 53, 53))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

impl eframe::App for EventDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.show_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_status_banner(ui);
                    match self.router.current() {
                        Route::Home => self.show_home_page(ui),
                        Route::CreateEvent => self.show_create_event_page(ui),
                    }
                });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
