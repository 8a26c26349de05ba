use std::fs;
use std::path::Path;

use chrono::Utc;
use serde_json::Value;

use roadshow::Tour;
use roadshow::artifact::{Format, Json};
use roadshow::batch::{Batch, SUMMARY_FILE};
use roadshow::brand::Brand;
use roadshow::record::{CityCustomization, Roster, TourStop};
use roadshow::render::Renderer;
use roadshow::targeting::{write_targets, TARGETING_FILE};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Podcast to Cash Tour</title>
<meta name="description" content="Stock description">
<script type="application/ld+json">
{ "@type": "Event", "name": "stock" }
</script>
</head>
<body>
<h1>TREVOR LIVE IN [CITY]</h1>
<p>[EVENT DATE] &middot; [CITY NAME], [STATE]</p>
<p>Premium downtown venue</p>
</body>
</html>
"#;

const NO_SCHEMA: &str = "<title>x</title>\n<h1>[CITY]</h1>\n<p>[EVENT DATE]</p>\n";

fn write_template(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("template.html");
    fs::write(&path, contents).unwrap();
    path
}

fn denver_tour() -> Tour {
    let stops = [TourStop::new("Denver", "CO", "Jan 1st", "2026-01-01")];
    Tour::new(Roster::new(stops, []), Brand::default())
}

#[test]
fn denver_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), TEMPLATE);
    let output = dir.path().join("lgh-tour-pages");

    let tour = denver_tour();
    let renderer = Renderer::new(&template, &output).unwrap();
    let report = Batch::new(&tour, &renderer).run();
    assert_eq!(report.generated(), 1);

    let html = fs::read_to_string(output.join("lgh-podcast-tour-denver.html")).unwrap();
    assert!(html.contains("DENVER"));
    assert!(html.contains("Jan 1st"));
    assert!(html.contains("Denver venue"));

    let start = html.find("<script type=\"application/ld+json\">").unwrap();
    let end = html[start..].find("</script>").unwrap() + start;
    let body = &html[start + "<script type=\"application/ld+json\">".len()..end];
    let schema: Value = serde_json::from_str(body).unwrap();
    assert_eq!(schema["startDate"], "2026-01-01T18:30:00");
}

#[test]
fn template_without_schema_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), NO_SCHEMA);
    let output = dir.path().join("out");

    let tour = denver_tour();
    let renderer = Renderer::new(&template, &output).unwrap();
    let report = Batch::new(&tour, &renderer).run();
    assert!(report.failures.is_empty());

    let html = fs::read_to_string(&report.pages[0].file_path).unwrap();
    assert!(html.contains("<h1>DENVER</h1>"));
    assert!(html.contains("<p>Jan 1st</p>"));
    assert!(!html.contains("application/ld+json"));
}

#[test]
fn builtin_tour_renders_every_city() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), TEMPLATE);
    let output = dir.path().join("pages");

    let tour = Tour::builtin();
    let renderer = Renderer::new(&template, &output).unwrap();
    let report = Batch::new(&tour, &renderer).run();
    assert_eq!(report.generated(), tour.roster.stops().len());

    for (page, stop) in report.pages.iter().zip(tour.roster.stops()) {
        let html = fs::read_to_string(&page.file_path).unwrap();
        let custom = tour.roster.defined(&stop.city).unwrap();
        assert_eq!(page.city, stop.city);
        assert!(html.contains(&custom.local_ref), "{} lacks its venue", stop.city);
        for token in ["[CITY]", "[CITY NAME]", "[EVENT DATE]", "[EVENT_DATE_ISO]", "[STATE]"] {
            assert!(!html.contains(token), "{} still has {token}", stop.city);
        }
    }

    assert!(output.join("lgh-podcast-tour-los-angeles.html").is_file());
}

#[test]
fn rerendering_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), TEMPLATE);
    let output = dir.path().join("pages");

    let tour = Tour::builtin();
    let renderer = Renderer::new(&template, &output).unwrap();
    let stop = &tour.roster.stops()[2];

    let first = renderer.render_page(&tour, stop).unwrap();
    let first = fs::read(&first.file_path).unwrap();
    let second = renderer.render_page(&tour, stop).unwrap();
    assert_eq!(first, fs::read(&second.file_path).unwrap());
}

#[test]
fn failed_stops_do_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), TEMPLATE);
    let output = dir.path().join("pages");

    // A directory where the Austin page should go makes that one write fail.
    fs::create_dir_all(output.join("lgh-podcast-tour-austin.html")).unwrap();

    let tour = Tour::builtin();
    let renderer = Renderer::new(&template, &output).unwrap();
    let report = Batch::new(&tour, &renderer).run();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].city, "Austin");
    assert_eq!(report.generated(), tour.roster.stops().len() - 1);

    let summary_path = report.write_summary(&tour, &output, Utc::now()).unwrap();
    let summary: Value = Json::read(&summary_path).unwrap();
    assert_eq!(summary["generated"], report.generated());
    assert_eq!(summary["tourStops"], tour.roster.stops().len());
    assert_eq!(summary["pages"].as_array().map(Vec::len), Some(report.generated()));
}

#[test]
fn vanished_template_fails_each_stop() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path(), TEMPLATE);
    let output = dir.path().join("pages");

    let tour = Tour::builtin();
    let renderer = Renderer::new(&template, &output).unwrap();
    fs::remove_file(&template).unwrap();

    let report = Batch::new(&tour, &renderer).run();
    assert_eq!(report.generated(), 0);
    assert_eq!(report.failures.len(), tour.roster.stops().len());
    assert!(report.failures[0].message.starts_with("failed to open file for reading"));
}

#[test]
fn artifacts_are_written_next_to_pages() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("fresh").join("pages");

    let tour = Tour::builtin();
    let path = write_targets(&tour, &output).unwrap();
    assert_eq!(path, output.join(TARGETING_FILE));

    let targets: Vec<Value> = Json::read(&path).unwrap();
    assert_eq!(targets.len(), 7);
    assert_eq!(targets[6]["landingPage"], "lgh-podcast-tour-austin.html");
    assert_eq!(targets[6]["customization"]["localRef"], "Live music capital venue");

    let report = roadshow::batch::Report::default();
    let summary = report.write_summary(&tour, &output, Utc::now()).unwrap();
    assert_eq!(summary, output.join(SUMMARY_FILE));

    let summary: Value = Json::read(&summary).unwrap();
    assert_eq!(summary["generated"], 0);
    assert_eq!(summary["brandingUpdate"], "Aligned with letsgeauxhustleworkshop.netlify.app");
}

#[test]
fn customization_fallback_is_stable_across_runs() {
    let tour = denver_tour();
    let stop = &tour.roster.stops()[0];
    assert_eq!(*tour.roster.customization(stop), CityCustomization::fallback("Denver"));
    assert_eq!(tour.roster.customization(stop), tour.roster.customization(stop));
}
