//! Create-event form widgets.

use client_core::CreateEventForm;
use eframe::egui;
use shared::domain::{EventField, EventMode};

use super::app::{show_error_banner, EventDeskApp};
use crate::media::fit_within;

const PREVIEW_MAX: egui::Vec2 = egui::vec2(300.0, 200.0);

#[derive(Clone, Copy)]
enum InputKind {
    SingleLine,
    MultiLine(usize),
}

struct FieldWidget {
    field: EventField,
    hint: &'static str,
    input: InputKind,
}

impl FieldWidget {
    const fn line(field: EventField, hint: &'static str) -> Self {
        Self {
            field,
            hint,
            input: InputKind::SingleLine,
        }
    }

    const fn area(field: EventField, hint: &'static str, rows: usize) -> Self {
        Self {
            field,
            hint,
            input: InputKind::MultiLine(rows),
        }
    }
}

const TITLE: FieldWidget = FieldWidget::line(EventField::Title, "e.g., React Summit 2026");
const DESCRIPTION: FieldWidget =
    FieldWidget::area(EventField::Description, "Brief description of your event", 3);
const OVERVIEW: FieldWidget = FieldWidget::area(
    EventField::Overview,
    "Detailed overview of what attendees can expect",
    4,
);
const VENUE: FieldWidget = FieldWidget::line(EventField::Venue, "e.g., Tech Conference Center");
const LOCATION: FieldWidget =
    FieldWidget::line(EventField::Location, "e.g., San Francisco, CA, USA");
const DATE: FieldWidget = FieldWidget::line(EventField::Date, "YYYY-MM-DD");
const TIME: FieldWidget = FieldWidget::line(EventField::Time, "HH:MM");
const AUDIENCE: FieldWidget =
    FieldWidget::line(EventField::Audience, "e.g., Developers, Designers");
const ORGANIZER: FieldWidget = FieldWidget::line(
    EventField::Organizer,
    "Organization or person organizing the event",
);
const TAGS: FieldWidget =
    FieldWidget::line(EventField::Tags, "e.g., React, JavaScript, Frontend");
const AGENDA: FieldWidget = FieldWidget::area(
    EventField::Agenda,
    "e.g., Registration and Welcome, Keynote Speech, Workshop Session, Networking Break",
    3,
);

fn field_label(field: EventField) -> String {
    if field.is_list() {
        format!("{} * (comma-separated)", field.label())
    } else {
        format!("{} *", field.label())
    }
}

fn text_input(ui: &mut egui::Ui, form: &mut CreateEventForm, widget: &FieldWidget) {
    ui.label(egui::RichText::new(field_label(widget.field)).strong());
    let value = form.field_mut(widget.field);
    let edit = match widget.input {
        InputKind::SingleLine => egui::TextEdit::singleline(value),
        InputKind::MultiLine(rows) => egui::TextEdit::multiline(value).desired_rows(rows),
    };
    ui.add(
        edit.id_salt(widget.field.key())
            .hint_text(widget.hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
}

fn mode_input(ui: &mut egui::Ui, form: &mut CreateEventForm) {
    ui.label(egui::RichText::new(field_label(EventField::Mode)).strong());
    let current = form.draft().mode().unwrap_or_default();
    let mut selected = current;
    egui::ComboBox::from_id_salt(EventField::Mode.key())
        .selected_text(selected.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for mode in EventMode::ALL {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
        });
    if selected != current {
        form.set_field(EventField::Mode, selected.as_str());
    }
    ui.add_space(6.0);
}

fn paired_inputs(
    ui: &mut egui::Ui,
    form: &mut CreateEventForm,
    left: &FieldWidget,
    right: &FieldWidget,
) {
    ui.columns(2, |columns| {
        text_input(&mut columns[0], form, left);
        text_input(&mut columns[1], form, right);
    });
}

impl EventDeskApp {
    pub(crate) fn show_create_event_form(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = self.form.error().map(str::to_string) {
            if show_error_banner(ui, &error) {
                self.form.dismiss_error();
            }
            ui.add_space(10.0);
        }

        text_input(ui, &mut self.form, &TITLE);
        text_input(ui, &mut self.form, &DESCRIPTION);
        text_input(ui, &mut self.form, &OVERVIEW);

        self.show_image_picker(ui);

        paired_inputs(ui, &mut self.form, &VENUE, &LOCATION);
        paired_inputs(ui, &mut self.form, &DATE, &TIME);
        ui.columns(2, |columns| {
            mode_input(&mut columns[0], &mut self.form);
            text_input(&mut columns[1], &mut self.form, &AUDIENCE);
        });

        text_input(ui, &mut self.form, &ORGANIZER);
        text_input(ui, &mut self.form, &TAGS);
        text_input(ui, &mut self.form, &AGENDA);

        ui.add_space(8.0);
        let loading = self.form.is_loading();
        let label = if loading {
            "Creating Event..."
        } else {
            "Create Event"
        };
        let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
            .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add_enabled(!loading, button).clicked() {
            self.submit_form();
        }
    }

    fn show_image_picker(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Event Image *").strong());
        let mut pick = false;
        let mut clear = false;
        ui.horizontal(|ui| {
            if ui.button("Choose image...").clicked() {
                pick = true;
            }
            match self.form.image() {
                Some(selection) => {
                    ui.label(&selection.file_name);
                    if ui.small_button("Remove").clicked() {
                        clear = true;
                    }
                }
                None => {
                    ui.weak("No file chosen");
                }
            }
        });

        if let Some(preview) = &self.preview_texture {
            let size = fit_within(preview.width, preview.height, PREVIEW_MAX);
            ui.add_space(4.0);
            ui.add(
                egui::Image::new(egui::load::SizedTexture::new(preview.texture.id(), size))
                    .corner_radius(egui::CornerRadius::same(6)),
            );
        } else if let Some(note) = &self.preview_note {
            ui.weak(note);
        } else if self.form.image().is_some() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Loading preview...");
            });
        }
        ui.add_space(6.0);

        if clear {
            self.clear_image();
        } else if pick {
            self.pick_image();
        }
    }
}
