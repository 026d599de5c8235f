mod boot;
mod config;
mod errors;
mod loader;
mod models;
mod render;
mod routes;
mod site;
mod state;
mod theme;

#[cfg(test)]
mod fixtures;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::site::{build_site, BuildOutcome};
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Render a JSON profile into a portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Profile document path or URL (overrides PROFILE_SOURCE)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Host HTML page with the section containers (overrides HOST_PAGE)
    #[arg(long, global = true)]
    host_page: Option<PathBuf>,

    /// Output directory (overrides OUTPUT_DIR)
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Theme name: glass or terminal (overrides THEME)
    #[arg(long, global = true)]
    theme: Option<String>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Build the site once and exit
    Build,
    /// Build the site, then serve it for preview
    Serve,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(profile) = &self.profile {
            config.profile_source = profile.clone();
        }
        if let Some(host_page) = &self.host_page {
            config.host_page = host_page.clone();
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.resolve_theme()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    let (loader, page, outcome) = build_site(&config).await?;
    let failed = match outcome {
        BuildOutcome::Built { output, report } => {
            info!(
                "Built {} ({} sections rendered)",
                output.display(),
                report.count(render::Outcome::Rendered)
            );
            false
        }
        BuildOutcome::LoadFailed { output, error } => {
            let kind = if error.is_parse() {
                "malformed document"
            } else if error.is_fetch() {
                "fetch failed"
            } else {
                "unreadable source"
            };
            error!(
                status = ?error.status(),
                attempts = loader.failure_signalled(),
                "Failed to load profile data ({kind}): {error}; failure notice written to {}",
                output.display()
            );
            true
        }
    };

    if let Some(Command::Serve) = cli.command {
        serve(config, loader, page).await?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn serve(config: Config, loader: loader::Loader, page: String) -> Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState {
        loader: Arc::new(loader),
        page: Arc::new(page),
        config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Serving preview on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
