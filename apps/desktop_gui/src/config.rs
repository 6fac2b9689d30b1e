use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{config::Settings, Route};
use url::Url;

#[derive(Parser, Debug, Default)]
#[command(name = "event-desk", about = "Create developer events from the desktop")]
pub struct StartupArgs {
    /// Base url of the events server; overrides the settings file and environment.
    #[arg(long)]
    pub server_url: Option<String>,
    /// Page to open on launch.
    #[arg(long, default_value = "/events/create")]
    pub route: String,
}

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: Url,
    pub log_filter: String,
    pub start_route: Route,
}

impl StartupConfig {
    pub fn resolve(args: StartupArgs, mut settings: Settings) -> Result<Self> {
        if let Some(server_url) = args.server_url {
            settings.server_url = server_url;
        }
        let start_route = if args.route.is_empty() {
            Route::CreateEvent
        } else {
            Route::from_path(&args.route).ok_or_else(|| anyhow!("unknown route '{}'", args.route))?
        };
        Ok(Self {
            server_url: settings.server_url()?,
            log_filter: settings.log_filter,
            start_route,
        })
    }
}
