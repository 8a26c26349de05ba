use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use roadshow::batch::Batch;
use roadshow::error::Result;
use roadshow::render::Renderer;
use roadshow::targeting::write_targets;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Overrides};

mod config;
mod report;

pub const CONFIG_FILE: &str = "tour.toml";
pub const TEMPLATE_FILE: &str = "trevor-podcast-tour-updated.html";
pub const OUTPUT_DIR: &str = "lgh-tour-pages";

pub fn main() -> ExitCode {
    let flags = xflags::parse_or_exit! {
        /// Page template to render. Defaults to `trevor-podcast-tour-updated.html`.
        optional --template template: PathBuf
        /// Directory pages and artifacts are written to. Defaults to `lgh-tour-pages`.
        optional --output output: PathBuf
        /// TOML file with stops, customizations, and brand settings. Defaults to
        /// `tour.toml` when that file exists.
        optional --config config: PathBuf
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "roadshow=info,lgh_tour=info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let overrides = Overrides {
        config: flags.config,
        template: flags.template,
        output: flags.output,
    };

    match run(overrides) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(overrides: Overrides) -> Result<()> {
    let start = Instant::now();
    let config = Config::discover(overrides)?;
    if let Some(source) = &config.source {
        tracing::info!("using configuration from {}", source.display());
    }

    let renderer = Renderer::new(&config.template, &config.output)?;
    tracing::debug!(template = %renderer.template().display(), output = %renderer.output().display());

    report::banner(&config.tour);
    let report = Batch::new(&config.tour, &renderer).run();
    let now = chrono::Utc::now();
    let summary = report.write_summary(&config.tour, renderer.output(), now)?;
    report::summary(&config.tour, &report, &summary);

    let targets = write_targets(&config.tour, renderer.output())?;
    tracing::info!("generated ad targeting data for all cities: {}", targets.display());

    report::complete(&config.tour, &report);
    tracing::debug!("total time: {}ms", start.elapsed().as_millis());
    Ok(())
}
