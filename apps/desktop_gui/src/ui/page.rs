//! Page shells for the two routes.

use client_core::Route;
use eframe::egui;

use super::app::EventDeskApp;

impl EventDeskApp {
    pub(crate) fn show_create_event_page(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(egui::RichText::new("Create New Event").size(28.0).strong());
            ui.label(
                egui::RichText::new("Fill in the details below to create your developer event")
                    .weak(),
            );
        });
        ui.add_space(16.0);

        egui::Frame::group(ui.style())
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_max_width(720.0);
                self.show_create_event_form(ui);
            });
    }

    pub(crate) fn show_home_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Events");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.home.loading, egui::Button::new("Refresh"))
                .clicked()
            {
                self.request_refresh();
            }
            if ui.button("Create Event").clicked() {
                self.navigate(Route::CreateEvent);
            }
            if self.home.loading {
                ui.spinner();
            }
        });
        ui.add_space(8.0);

        if let Some(error) = &self.home.error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, error);
            ui.add_space(4.0);
        }

        if self.home.loaded && self.home.events.is_empty() {
            ui.weak("No events yet.");
            return;
        }

        for event in &self.home.events {
            egui::Frame::group(ui.style())
                .corner_radius(egui::CornerRadius::same(6))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.strong(&event.title);
                    let details = [event.date.as_deref(), event.venue.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(" · ");
                    if !details.is_empty() {
                        ui.weak(details);
                    }
                });
            ui.add_space(4.0);
        }
    }
}
