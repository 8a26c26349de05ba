//! Turning the template and one tour stop into a finished page.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::artifact::{Sink, Source};
use crate::brand::Brand;
use crate::error::{Chainable, Result};
use crate::record::{CityCustomization, TourStop};
use crate::tour::Tour;

static TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<title>.*?</title>").expect("valid title pattern")
});

static DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta name="description" content=".*?">"#).expect("valid meta pattern")
});

static SCHEMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script type="application/ld\+json">.*?</script>"#)
        .expect("valid schema pattern")
});

/// The headline the template ships with; replaced with the city's hero copy.
const STOCK_HEADLINE: &str = "The Veteran Entrepreneur Who Helped 5,000+ Build Wealth Now \
    Reveals His Podcast Monetization System";

const STOCK_VENUE: &str = "Premium downtown venue";

const STOCK_DEADLINE: &str = "Miss this deployment, and you'll wait until 2027";

/// A literal, global text replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
}

impl Substitution {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Substitution { pattern: pattern.into(), replacement: replacement.into() }
    }

    /// Replaces every occurrence of the pattern in `text`. Neither the pattern
    /// nor the replacement is interpreted.
    pub fn apply(&self, text: String) -> String {
        if self.pattern.is_empty() || !text.contains(&*self.pattern) {
            return text;
        }

        text.replace(&*self.pattern, &self.replacement)
    }
}

/// The substitutions for `stop`, in the order they must be applied.
///
/// Each entry sees the output of the ones before it. The first `[CITY]` entry
/// consumes every `[CITY]` token, which leaves nothing for the later entries
/// that mention `[CITY]` to match.
pub fn substitutions(stop: &TourStop, custom: &CityCustomization, brand: &Brand) -> Vec<Substitution> {
    let city = &*stop.city;
    let presenter = &*brand.presenter;
    let first_name = brand.presenter_first_name();

    let in_city = |template: &str| Substitution::new(
        template.replace("{}", "[CITY]"),
        template.replace("{}", city),
    );

    vec![
        Substitution::new("[CITY]", city.to_uppercase()),
        Substitution::new("[CITY]", city),
        Substitution::new("[CITY NAME]", city),
        Substitution::new("[EVENT DATE]", &*stop.display_date),
        Substitution::new("[EVENT_DATE_ISO]", brand.starts_at(&stop.iso_date)),
        Substitution::new("[STATE]", &*stop.state),
        Substitution::new(STOCK_VENUE, &*custom.local_ref),
        Substitution::new(STOCK_HEADLINE, format!("{} - {city} Exclusive Workshop", custom.hero_accent)),
        in_city(&format!("{first_name} is only doing ONE workshop in {{}} this year")),
        in_city(&format!("Join {presenter} LIVE in {{}}")),
        in_city("SECURE YOUR SEAT IN {}"),
        in_city("GET {} TICKETS"),
        Substitution::new(STOCK_DEADLINE, format!("{STOCK_DEADLINE}... {}", custom.urgency_text)),
    ]
}

/// Renders `template` for `stop`.
///
/// Applies [`substitutions()`] in order, then replaces the first `<title>`,
/// the first meta description, and the first JSON-LD `<script>` block. Any of
/// those may be missing from the template; nothing is inserted in that case.
pub fn render(template: &str, stop: &TourStop, custom: &CityCustomization, brand: &Brand) -> String {
    let html = substitutions(stop, custom, brand)
        .iter()
        .fold(template.to_owned(), |html, sub| sub.apply(html));

    let title = format!(
        "<title>{} - {} LIVE in {} - Podcast to Cash Workshop {}</title>",
        brand.presenter, brand.name, stop.city, stop.display_date
    );

    let description = format!(
        "<meta name=\"description\" content=\"Join {} from {} LIVE in {} {}! The veteran \
        entrepreneur who helped 5,000+ build wealth reveals his podcast monetization system.\">",
        brand.presenter, brand.name, stop.city, stop.display_date
    );

    let html = TITLE.replace(&html, NoExpand(&title));
    let html = DESCRIPTION.replace(&html, NoExpand(&description));
    let html = SCHEMA.replace(&html, NoExpand(&schema::script_block(stop, custom, brand)));
    html.into_owned()
}

/// A page written to disk for one tour stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub city: String,
    pub file_name: String,
    #[serde(rename = "path")]
    pub file_path: PathBuf,
    pub deploy_url: String,
    #[serde(rename = "branding")]
    pub branding_label: String,
}

/// Renders tour stops from a template file into an output directory.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: PathBuf,
    output: PathBuf,
}

impl Renderer {
    /// Fails if `template` is not an existing file. The output directory is
    /// created lazily by the first write.
    pub fn new<T, O>(template: T, output: O) -> Result<Self>
        where T: AsRef<Path>, O: AsRef<Path>
    {
        let template = template.as_ref();
        if !template.is_file() {
            return err! {
                "page template not found",
                "template path" => template.display(),
            };
        }

        Ok(Renderer {
            template: template.to_path_buf(),
            output: output.as_ref().to_path_buf(),
        })
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Creates the output directory if it doesn't already exist.
    pub fn ensure_output(&self) -> Result<()> {
        fs::create_dir_all(&self.output).chain_with(|| error! {
            "failed to create output directory",
            "directory" => self.output.display(),
        })
    }

    /// Renders `stop` and writes the page into the output directory.
    ///
    /// The template is read afresh on every call.
    pub fn render_page(&self, tour: &Tour, stop: &TourStop) -> Result<RenderedPage> {
        let brand = &tour.brand;
        let template = (&self.template).read()?;
        let custom = tour.roster.customization(stop);
        let html = render(&template, stop, &custom, brand);

        self.ensure_output()?;
        let file_name = brand.page_file_name(&stop.city);
        let file_path = self.output.join(&file_name);
        tracing::debug!(path = %file_path.display(), bytes = html.len(), "writing page");
        file_path.write_str(&html)?;

        Ok(RenderedPage {
            city: stop.city.clone(),
            deploy_url: brand.deploy_url(&file_name),
            branding_label: brand.label.clone(),
            file_name,
            file_path,
        })
    }
}
