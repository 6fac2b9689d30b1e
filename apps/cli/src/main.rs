use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use client_core::{
    config::load_settings, error::UNKNOWN_FAILURE_MESSAGE, CreateEventForm, EventsClient,
    ImageSelection, Navigator, Route,
};
use shared::domain::{EventField, EventMode};
use tracing_subscriber::EnvFilter;

/// Fields left empty are reported by the form, not by clap.
#[derive(Parser, Debug)]
#[command(name = "event-cli", about = "Create a developer event from the command line")]
struct Args {
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    overview: String,
    #[arg(long, default_value = "")]
    venue: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    date: String,
    #[arg(long, default_value = "")]
    time: String,
    #[arg(long, default_value_t = EventMode::Offline)]
    mode: EventMode,
    #[arg(long, default_value = "")]
    audience: String,
    #[arg(long, default_value = "")]
    organizer: String,
    /// Comma-separated, e.g. "React, JavaScript".
    #[arg(long, default_value = "")]
    tags: String,
    /// Comma-separated agenda items.
    #[arg(long, default_value = "")]
    agenda: String,
    #[arg(long)]
    image: Option<PathBuf>,
}

impl Args {
    fn into_form(self) -> CreateEventForm {
        let mut form = CreateEventForm::new();
        let values = [
            (EventField::Title, self.title),
            (EventField::Description, self.description),
            (EventField::Overview, self.overview),
            (EventField::Venue, self.venue),
            (EventField::Location, self.location),
            (EventField::Date, self.date),
            (EventField::Time, self.time),
            (EventField::Mode, self.mode.as_str().to_string()),
            (EventField::Audience, self.audience),
            (EventField::Organizer, self.organizer),
            (EventField::Tags, self.tags),
            (EventField::Agenda, self.agenda),
        ];
        for (field, value) in values {
            form.set_field(field, value);
        }
        if let Some(path) = self.image {
            form.select_image(ImageSelection::from_path(path));
        }
        form
    }
}

/// There is nothing to show after a submit, so routes are only logged.
#[derive(Debug, Default)]
struct LogNavigator {
    route: Route,
}

impl Navigator for LogNavigator {
    fn push(&mut self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        self.route = route;
    }

    fn refresh(&mut self) {
        tracing::debug!(path = self.route.path(), "refresh");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings()?;
    if let Some(server_url) = &args.server_url {
        settings.server_url = server_url.clone();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = EventsClient::new(settings.server_url()?);
    let mut form = args.into_form();
    let mut navigator = LogNavigator::default();
    match form.submit(&client, &mut navigator).await {
        Some(created) => {
            println!("{}", serde_json::to_string_pretty(&created.body)?);
            Ok(())
        }
        None => bail!("{}", form.error().unwrap_or(UNKNOWN_FAILURE_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fill_every_field_in_order() {
        let args = Args::parse_from([
            "event-cli",
            "--title",
            "Rust Meetup",
            "--mode",
            "hybrid",
            "--tags",
            "rust, async",
            "--image",
            "/tmp/cover.png",
        ]);
        let form = args.into_form();
        assert_eq!(form.value(EventField::Title), "Rust Meetup");
        assert_eq!(form.value(EventField::Mode), "hybrid");
        assert_eq!(form.value(EventField::Tags), "rust, async");
        assert_eq!(form.value(EventField::Venue), "");
        assert_eq!(
            form.image().map(|image| image.file_name.as_str()),
            Some("cover.png")
        );
    }

    #[test]
    fn mode_defaults_to_offline_and_rejects_unknown_values() {
        let args = Args::parse_from(["event-cli"]);
        assert_eq!(args.mode, EventMode::Offline);
        assert!(Args::try_parse_from(["event-cli", "--mode", "virtual"]).is_err());
    }

    #[test]
    fn empty_flags_fail_locally_with_the_field_label() {
        let mut form = Args::parse_from(["event-cli"]).into_form();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some("Please fill in the Event Title field"));
    }

    #[test]
    fn navigator_tracks_the_last_route() {
        let mut navigator = LogNavigator::default();
        navigator.push(Route::CreateEvent);
        navigator.refresh();
        assert_eq!(navigator.route, Route::CreateEvent);
    }
}
