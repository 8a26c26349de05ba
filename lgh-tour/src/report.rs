use std::path::Path;

use roadshow::Tour;
use roadshow::batch::Report;

pub fn banner(tour: &Tour) {
    println!("Generating {} podcast tour landing pages...\n", tour.brand.name.to_uppercase());
}

pub fn summary(tour: &Tour, report: &Report, summary: &Path) {
    let brand = &tour.brand;
    let dir = summary.parent().unwrap_or(summary);

    println!("\n{} DEPLOYMENT SUMMARY:", brand.name.to_uppercase());
    println!("Generated {} of {} city-specific pages", report.generated(), report.attempted());
    for failure in &report.failures {
        println!("  failed: {} ({})", failure.city, failure.message);
    }

    println!("Saved to: {}", dir.display());
    println!("Summary: {}", summary.display());

    println!("\nNEXT STEPS:");
    println!("1. Deploy pages to hosting ({})", host(&brand.deploy_base));
    println!("2. Set up veteran-focused Facebook/Google ads");
    println!("3. Target military communities and veteran entrepreneurs");
    println!("4. Leverage {} email list and social media", brand.name);
}

pub fn complete(tour: &Tour, report: &Report) {
    println!("\n{} PODCAST TOUR DEPLOYMENT COMPLETE!", tour.brand.name.to_uppercase());
    println!("{} veteran-focused pages ready for ads", report.generated());
    println!("\"Veteran. Entrepreneur. One of you.\" - {}", tour.brand.presenter);
}

/// The host part of a URL: `https://a.example/b` becomes `a.example`.
fn host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split('/').next().unwrap_or(rest)
}
