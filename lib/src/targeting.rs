//! Ad-targeting data for every tour stop.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::artifact::Sink;
use crate::error::{Chainable, Result};
use crate::record::{CityCustomization, TourStop};
use crate::tour::Tour;

pub const TARGETING_FILE: &str = "veteran-ad-targeting.json";

const RADIUS: &str = "50 miles";

const BEHAVIORS: &[&str] = &[
    "Military veterans",
    "Small business owners",
    "Entrepreneurs",
    "Frequent podcast listeners",
];

const MILITARY_ANGLE: &str =
    "From service to success - the veteran entrepreneur's podcast blueprint";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdTarget<'a> {
    pub city: &'a str,
    pub state: &'a str,
    pub date: &'a str,
    pub landing_page: String,
    pub targeting: Targeting<'a>,
    pub ad_copy: AdCopy,
    /// Only a customization defined for the city; never the fallback.
    #[serde(serialize_with = "defined_or_empty")]
    pub customization: Option<&'a CityCustomization>,
}

#[derive(Debug, Serialize)]
pub struct Targeting<'a> {
    pub location: String,
    pub radius: &'static str,
    pub interests: Vec<&'a str>,
    pub demographics: Demographics,
    pub behaviors: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Demographics {
    pub age: &'static str,
    pub income: &'static str,
    pub education: &'static str,
    pub military: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AdCopy {
    pub headline: String,
    pub description: String,
    pub cta: String,
    pub military_angle: &'static str,
}

impl Demographics {
    pub const VETERANS: Demographics = Demographics {
        age: "25-55",
        income: "Top 30%",
        education: "Some college+",
        military: "Veterans and military families",
    };
}

fn defined_or_empty<S>(custom: &Option<&CityCustomization>, ser: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    use serde::ser::SerializeMap;

    match custom {
        Some(custom) => custom.serialize(ser),
        None => ser.serialize_map(Some(0))?.end(),
    }
}

fn interests(brand: &str) -> Vec<&str> {
    vec![
        "Podcasting",
        "Entrepreneurship",
        "Military Veterans",
        "Veteran Business Owners",
        "Digital Marketing",
        "Online Business",
        "Content Creation",
        "Personal Branding",
        brand,
        "Military Transition",
    ]
}

/// The ad-targeting entry for `stop`.
pub fn target<'a>(tour: &'a Tour, stop: &'a TourStop) -> AdTarget<'a> {
    let brand = &tour.brand;
    let (city, date) = (&*stop.city, &*stop.display_date);

    AdTarget {
        city,
        state: &stop.state,
        date,
        landing_page: brand.page_file_name(city),
        targeting: Targeting {
            location: format!("{city}, {}", stop.state),
            radius: RADIUS,
            interests: interests(&brand.name),
            demographics: Demographics::VETERANS,
            behaviors: BEHAVIORS,
        },
        ad_copy: AdCopy {
            headline: format!("{city} Veterans: Podcast to Cash Workshop"),
            description: format!("{} from {} reveals his $10M system LIVE in {city} {date}",
                brand.presenter_first_name(), brand.name),
            cta: format!("Get {city} Tickets - Veterans Only Event"),
            military_angle: MILITARY_ANGLE,
        },
        customization: tour.roster.defined(city),
    }
}

/// One entry per tour stop, in tour order.
pub fn targets(tour: &Tour) -> Vec<AdTarget<'_>> {
    tour.roster.stops().iter().map(|stop| target(tour, stop)).collect()
}

/// Writes the ad-targeting data into `dir`, creating `dir` if needed.
pub fn write_targets(tour: &Tour, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).chain_with(|| error! {
        "failed to create output directory",
        "directory" => dir.display(),
    })?;

    let path = dir.join(TARGETING_FILE);
    path.write_json(&targets(tour)).chain(error!("failed to write ad targeting data"))?;
    Ok(path)
}
