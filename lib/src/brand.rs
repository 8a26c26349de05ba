use serde::{Deserialize, Serialize};

use crate::util::slugify;

/// Brand, presenter, and ticketing constants shared by every page and
/// artifact of a tour.
///
/// Deserialization fills any missing field from [`Brand::default()`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Brand name, e.g. `Let's Geaux Hustle`.
    pub name: String,
    /// Full name of the person presenting every event.
    pub presenter: String,
    /// Prefix of every page file name.
    pub page_prefix: String,
    /// Public URL the page files are deployed under.
    pub deploy_base: String,
    /// Label recorded with each rendered page in the deployment summary.
    pub label: String,
    pub founder: String,
    pub credibility: String,
    pub branding_update: String,
    pub event_name: String,
    pub event_description: String,
    /// Local start and end time of each event, as `HH:MM:SS`.
    pub start_time: String,
    pub end_time: String,
    pub organizer: Organizer,
    pub tickets: Vec<TicketTier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organizer {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTier {
    pub name: String,
    pub price: String,
    pub currency: String,
    pub url: String,
}

impl Brand {
    /// The presenter's first name, as used in conversational copy.
    pub fn presenter_first_name(&self) -> &str {
        self.presenter.split_whitespace().next().unwrap_or(&self.presenter)
    }

    /// The page file name for `city`: `<prefix>-<city slug>.html`.
    pub fn page_file_name(&self, city: &str) -> String {
        format!("{}-{}.html", self.page_prefix, slugify(city))
    }

    pub fn deploy_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.deploy_base.trim_end_matches('/'), file_name)
    }

    /// Joins an ISO date with the event start time.
    pub fn starts_at(&self, iso_date: &str) -> String {
        format!("{iso_date}T{}", self.start_time)
    }

    pub fn ends_at(&self, iso_date: &str) -> String {
        format!("{iso_date}T{}", self.end_time)
    }
}

impl Default for Brand {
    fn default() -> Self {
        const TICKETS: &str = "https://podcasttocashtour.com";

        let tier = |name: &str, price: &str| TicketTier {
            name: name.into(),
            price: price.into(),
            currency: "USD".into(),
            url: TICKETS.into(),
        };

        Brand {
            name: "Let's Geaux Hustle".into(),
            presenter: "Trevor Calais".into(),
            page_prefix: "lgh-podcast-tour".into(),
            deploy_base: "https://lgh-podcast-tour.netlify.app".into(),
            label: "Let's Geaux Hustle Official".into(),
            founder: "Trevor Calais - Veteran, Entrepreneur, One of you".into(),
            credibility: "$10M+ Funded, 5,000+ Veterans Served".into(),
            branding_update: "Aligned with letsgeauxhustleworkshop.netlify.app".into(),
            event_name: "Let's Geaux Hustle Presents: Podcast to Cash with Trevor Calais".into(),
            event_description: "The veteran entrepreneur behind Let's Geaux Hustle teaches \
                his podcast monetization system live".into(),
            start_time: "18:30:00".into(),
            end_time: "21:30:00".into(),
            organizer: Organizer::default(),
            tickets: vec![tier("Basic Deployment", "49"), tier("VIP Command", "99")],
        }
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Organizer {
            name: "Trevor Calais".into(),
            description: "U.S. Army Veteran, Entrepreneur, Founder of Let's Geaux Hustle".into(),
            url: "https://letsgeauxhustleworkshop.netlify.app".into(),
        }
    }
}
