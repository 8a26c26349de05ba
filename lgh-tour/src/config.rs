use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use roadshow::{error, Tour};
use roadshow::artifact::{Format, Toml};
use roadshow::brand::Brand;
use roadshow::error::{Chainable, Result};
use roadshow::record::{CityCustomization, Roster, TourStop};

/// Paths given on the command line. They win over the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Config {
    pub tour: Tour,
    pub template: PathBuf,
    pub output: PathBuf,
    /// The configuration file that was read, if any.
    pub source: Option<PathBuf>,
}

/// The contents of a configuration file. Everything is optional; anything
/// left out keeps its built-in value.
#[derive(Default, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub brand: Brand,
    /// Replaces the built-in stop list when present.
    pub stops: Option<Vec<TourStop>>,
    /// Replaces the built-in customization table when present.
    pub customizations: Option<FxHashMap<String, CityCustomization>>,
}

impl Config {
    pub fn discover(overrides: Overrides) -> Result<Self> {
        Self::discover_in(Path::new("."), overrides)
    }

    /// Like [`Config::discover()`] but resolves the default configuration
    /// file, template, and output directory against `root`.
    pub fn discover_in(root: &Path, overrides: Overrides) -> Result<Self> {
        let source = match overrides.config {
            Some(path) => Some(path),
            None => Some(root.join(crate::CONFIG_FILE)).filter(|p| p.is_file()),
        };

        let settings = match &source {
            Some(path) => Toml::read::<_, Settings>(path).chain_with(|| error! {
                "failed to load configuration",
                "config file" => path.display(),
            })?,
            None => Settings::default(),
        };

        let stops = settings.stops.unwrap_or_else(roadshow::tour::stops);
        let customizations: Vec<_> = match settings.customizations {
            Some(table) => table.into_iter().collect(),
            None => roadshow::tour::customizations(),
        };

        let tour = Tour::new(Roster::new(stops, customizations), settings.brand);
        tour.validate().chain_with(|| match &source {
            Some(path) => error!("invalid tour configuration", "config file" => path.display()),
            None => error!("invalid built-in tour configuration"),
        })?;

        Ok(Config {
            tour,
            template: overrides.template
                .or(settings.template)
                .unwrap_or_else(|| root.join(crate::TEMPLATE_FILE)),
            output: overrides.output
                .or(settings.output)
                .unwrap_or_else(|| root.join(crate::OUTPUT_DIR)),
            source,
        })
    }
}
