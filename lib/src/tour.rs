use crate::brand::Brand;
use crate::error::Result;
use crate::record::{CityCustomization, Roster, TourStop};

/// Everything a batch needs besides file paths: the roster and the brand.
///
/// A `Tour` is built once at startup and only ever borrowed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tour {
    pub roster: Roster,
    pub brand: Brand,
}

impl Tour {
    pub fn new(roster: Roster, brand: Brand) -> Self {
        Tour { roster, brand }
    }

    /// The Let's Geaux Hustle podcast tour as currently scheduled.
    pub fn builtin() -> Self {
        Tour::new(Roster::new(stops(), customizations()), Brand::default())
    }

    pub fn validate(&self) -> Result<()> {
        self.roster.validate()
    }
}

/// The scheduled stops, in tour order.
pub fn stops() -> Vec<TourStop> {
    vec![
        TourStop::new("Boston", "MA", "March 21st", "2026-03-21"),
        TourStop::new("New York", "NY", "April 18th", "2026-04-18"),
        TourStop::new("Toronto", "ON", "May 1st-2nd", "2026-05-01"),
        TourStop::new("Scottsdale", "AZ", "May 22nd-23rd", "2026-05-22"),
        TourStop::new("Los Angeles", "CA", "June 19th-20th", "2026-06-19"),
        TourStop::new("Dallas", "TX", "Nov 13th-14th", "2026-11-13"),
        TourStop::new("Austin", "TX", "Dec 10th-11th", "2026-12-10"),
    ]
}

pub fn customizations() -> Vec<(String, CityCustomization)> {
    let custom = |city: &str, urgency: &str, hero: &str, local: &str, military: &str| {
        (city.to_string(), CityCustomization {
            urgency_text: urgency.into(),
            hero_accent: hero.into(),
            local_ref: local.into(),
            military_connection: military.into(),
        })
    };

    vec![
        custom("New York",
            "In the city that never sleeps, opportunities move fast",
            "Take that NYC hustle from the streets to the podcast booth",
            "Manhattan venue",
            "Where Wall Street meets warrior mindset"),
        custom("Los Angeles",
            "In the entertainment capital, content is king",
            "Turn your Hollywood dreams into podcast empire reality",
            "Premium LA venue",
            "Where veterans build media empires"),
        custom("Boston",
            "In the city of innovation and education",
            "Revolutionary ideas meet revolutionary execution",
            "Historic Boston venue",
            "Where American independence was born - now build yours"),
        custom("Dallas",
            "Everything is bigger in Texas, including opportunities",
            "Texas-sized results from veteran-tested strategies",
            "Premium Dallas venue",
            "Big D, bigger dreams, biggest results"),
        custom("Austin",
            "Keep Austin weird, but keep your profits real",
            "Music City meets podcast mastery - veteran style",
            "Live music capital venue",
            "Where creativity and discipline create wealth"),
        custom("Toronto",
            "The 6ix is ready for your success story",
            "International opportunities with brotherhood execution",
            "Downtown Toronto venue",
            "Cross-border success, veteran values"),
        custom("Scottsdale",
            "Desert luxury meets podcast mastery",
            "Premium results in premium surroundings",
            "Scottsdale luxury venue",
            "Where veterans level up to luxury lifestyle"),
    ]
}

#[cfg(test)] static_assertions::assert_impl_all!(Tour: Send, Sync);
