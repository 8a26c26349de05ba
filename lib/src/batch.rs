use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::Debug;
use serde::Serialize;

use crate::artifact::Sink;
use crate::error::{Chainable, Error, Result};
use crate::record::TourStop;
use crate::render::{RenderedPage, Renderer};
use crate::tour::Tour;

pub const SUMMARY_FILE: &str = "deployment-summary.json";

/// What happened to one tour stop.
#[derive(Debug)]
pub enum Outcome {
    Rendered(RenderedPage),
    Failed { city: String, error: Error },
}

/// A tour stop that could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub city: String,
    pub message: String,
}

/// The result of rendering every stop of a tour.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub pages: Vec<RenderedPage>,
    pub failures: Vec<Failure>,
}

/// The contents of `deployment-summary.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSummary<'a> {
    pub brand: &'a str,
    pub founder: &'a str,
    pub credibility: &'a str,
    pub generated: usize,
    pub pages: &'a [RenderedPage],
    pub deployment_date: String,
    pub tour_stops: usize,
    pub branding_update: &'a str,
}

/// Renders every stop of a tour, one after another.
///
/// A stop that fails to render is logged and recorded; the batch always runs
/// to the end.
#[derive(Debug)]
pub struct Batch<'a> {
    #[debug(ignore)]
    tour: &'a Tour,
    renderer: &'a Renderer,
}

impl<'a> Batch<'a> {
    pub fn new(tour: &'a Tour, renderer: &'a Renderer) -> Self {
        Batch { tour, renderer }
    }

    /// Renders one stop, logging the outcome.
    pub fn render_stop(&self, stop: &TourStop) -> Outcome {
        tracing::info!("generating {} landing page for {}, {}",
            self.tour.brand.name, stop.city, stop.state);

        match self.renderer.render_page(self.tour, stop) {
            Ok(page) => {
                tracing::info!("generated: {}", page.file_name);
                Outcome::Rendered(page)
            }
            Err(error) => {
                tracing::error!("failed to generate {} page: {}", stop.city, error.message());
                Outcome::Failed { city: stop.city.clone(), error }
            }
        }
    }

    pub fn run(&self) -> Report {
        let mut report = Report::default();
        for stop in self.tour.roster.stops() {
            match self.render_stop(stop) {
                Outcome::Rendered(page) => report.pages.push(page),
                Outcome::Failed { city, error } => {
                    report.failures.push(Failure { city, message: error.message() });
                }
            }
        }

        report
    }
}

impl Report {
    /// The number of stops that rendered successfully.
    pub fn generated(&self) -> usize {
        self.pages.len()
    }

    pub fn attempted(&self) -> usize {
        self.pages.len() + self.failures.len()
    }

    pub fn summary<'a>(&'a self, tour: &'a Tour, at: DateTime<Utc>) -> DeploymentSummary<'a> {
        let brand = &tour.brand;
        DeploymentSummary {
            brand: &brand.name,
            founder: &brand.founder,
            credibility: &brand.credibility,
            generated: self.generated(),
            pages: &self.pages,
            deployment_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            tour_stops: tour.roster.stops().len(),
            branding_update: &brand.branding_update,
        }
    }

    /// Writes the deployment summary into `dir`, creating `dir` if needed.
    pub fn write_summary(&self, tour: &Tour, dir: &Path, at: DateTime<Utc>) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).chain_with(|| error! {
            "failed to create output directory",
            "directory" => dir.display(),
        })?;

        let path = dir.join(SUMMARY_FILE);
        path.write_json(&self.summary(tour, at))
            .chain(error!("failed to write deployment summary"))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::record::Roster;
    use crate::brand::Brand;

    fn page(city: &str) -> RenderedPage {
        RenderedPage {
            city: city.into(),
            file_name: format!("lgh-podcast-tour-{}.html", city.to_lowercase()),
            file_path: PathBuf::from("out").join(city),
            deploy_url: format!("https://example.com/{city}"),
            branding_label: "Official".into(),
        }
    }

    #[test]
    fn summary_counts_and_keys() {
        let tour = Tour::new(Roster::new([
            TourStop::new("Boston", "MA", "March 21st", "2026-03-21"),
            TourStop::new("Austin", "TX", "Dec 10th", "2026-12-10"),
        ], []), Brand::default());

        let report = Report {
            pages: vec![page("Boston")],
            failures: vec![Failure { city: "Austin".into(), message: "disk full".into() }],
        };

        let at = Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap();
        let json = serde_json::to_value(report.summary(&tour, at)).unwrap();

        assert_eq!(json["generated"], 1);
        assert_eq!(json["tourStops"], 2);
        assert_eq!(json["deploymentDate"], "2026-02-03T04:05:06.000Z");
        assert_eq!(json["brand"], "Let's Geaux Hustle");
        assert_eq!(json["pages"][0]["fileName"], "lgh-podcast-tour-boston.html");
        assert_eq!(json["pages"][0]["branding"], "Official");
        assert!(json["pages"][0]["path"].is_string());
        assert_eq!(report.attempted(), 2);
    }
}
