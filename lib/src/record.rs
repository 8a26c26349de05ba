use std::borrow::Cow;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Chainable, Result};

/// One scheduled city event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourStop {
    pub city: String,
    pub state: String,
    /// The date as shown to visitors, e.g. `May 1st-2nd`.
    #[serde(rename = "date")]
    pub display_date: String,
    /// The first event day as `YYYY-MM-DD`.
    #[serde(rename = "eventDate")]
    pub iso_date: String,
}

impl TourStop {
    pub fn new(city: &str, state: &str, display_date: &str, iso_date: &str) -> Self {
        TourStop {
            city: city.into(),
            state: state.into(),
            display_date: display_date.into(),
            iso_date: iso_date.into(),
        }
    }
}

/// City-specific marketing copy used to personalize a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityCustomization {
    pub urgency_text: String,
    pub hero_accent: String,
    pub local_ref: String,
    pub military_connection: String,
}

impl CityCustomization {
    /// The customization used for a city without one of its own. Depends only
    /// on `city`.
    pub fn fallback(city: &str) -> Self {
        CityCustomization {
            urgency_text: "This opportunity won't wait".into(),
            hero_accent: "Turn your service into success".into(),
            local_ref: format!("{city} venue"),
            military_connection: "Where veterans build wealth".into(),
        }
    }
}

/// The ordered tour stops and the per-city customization table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    stops: Vec<TourStop>,
    customizations: FxHashMap<String, CityCustomization>,
}

impl Roster {
    pub fn new<I, C>(stops: I, customizations: C) -> Self
        where I: IntoIterator<Item = TourStop>,
              C: IntoIterator<Item = (String, CityCustomization)>,
    {
        Roster {
            stops: stops.into_iter().collect(),
            customizations: customizations.into_iter().collect(),
        }
    }

    pub fn stops(&self) -> &[TourStop] {
        &self.stops
    }

    /// The customization defined for `city`, if there is one.
    pub fn defined(&self, city: &str) -> Option<&CityCustomization> {
        self.customizations.get(city)
    }

    /// The customization for `stop`: its own if defined, otherwise the
    /// fallback synthesized from its city name.
    pub fn customization(&self, stop: &TourStop) -> Cow<'_, CityCustomization> {
        match self.defined(&stop.city) {
            Some(custom) => Cow::Borrowed(custom),
            None => Cow::Owned(CityCustomization::fallback(&stop.city)),
        }
    }

    /// Checks that every stop has a city and a well-formed ISO date.
    pub fn validate(&self) -> Result<()> {
        for (i, stop) in self.stops.iter().enumerate() {
            if stop.city.trim().is_empty() {
                return err! {
                    "tour stop is missing a city",
                    "stop index" => i,
                };
            }

            let invalid = || error! {
                "tour stop has an invalid event date",
                "city" => &stop.city,
                "event date" => &stop.iso_date,
                "expected format" => "YYYY-MM-DD",
            };

            // chrono accepts unpadded fields, so insist on the canonical form
            let date = NaiveDate::parse_from_str(&stop.iso_date, "%Y-%m-%d").chain_with(invalid)?;
            if date.format("%Y-%m-%d").to_string() != stop.iso_date {
                return Err(invalid());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let boston = CityCustomization {
            urgency_text: "In the city of innovation".into(),
            hero_accent: "Revolutionary ideas".into(),
            local_ref: "Historic Boston venue".into(),
            military_connection: "Build yours".into(),
        };

        Roster::new(
            [TourStop::new("Boston", "MA", "March 21st", "2026-03-21"),
             TourStop::new("Denver", "CO", "Jan 1st", "2026-01-01")],
            [("Boston".to_string(), boston)],
        )
    }

    #[test]
    fn lookup_prefers_defined_customization() {
        let roster = roster();
        let custom = roster.customization(&roster.stops()[0]);

        assert!(matches!(custom, Cow::Borrowed(_)));
        assert_eq!(custom.local_ref, "Historic Boston venue");
    }

    #[test]
    fn lookup_falls_back_deterministically() {
        let roster = roster();
        let denver = &roster.stops()[1];

        let first = roster.customization(denver).into_owned();
        let second = roster.customization(denver).into_owned();
        assert_eq!(first, second);
        assert_eq!(first.local_ref, "Denver venue");
        assert_eq!(first, CityCustomization::fallback("Denver"));
        assert!(roster.defined("Denver").is_none());
    }

    #[test]
    fn stops_keep_their_order() {
        let roster = roster();
        let cities: Vec<_> = roster.stops().iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, ["Boston", "Denver"]);
    }

    #[test]
    fn validation_rejects_bad_dates() {
        assert!(roster().validate().is_ok());

        let roster = Roster::new([TourStop::new("Austin", "TX", "Dec 10th", "2026-13-10")], []);
        let error = roster.validate().unwrap_err();
        assert!(error.message().starts_with("tour stop has an invalid event date"));

        let roster = Roster::new([TourStop::new(" ", "TX", "Dec 10th", "2026-12-10")], []);
        assert!(roster.validate().is_err());

        for unpadded in ["2026-1-1", "2026-01-1", "2026-1-01", "26-01-01"] {
            let roster = Roster::new([TourStop::new("Denver", "CO", "Jan 1st", unpadded)], []);
            let error = roster.validate().unwrap_err();
            assert!(error.message().starts_with("tour stop has an invalid event date"));
            assert!(error.to_string().contains(&format!("event date: {unpadded}")), "{unpadded}");
        }
    }

    #[test]
    fn customization_uses_camel_case_keys() {
        let json = serde_json::to_value(CityCustomization::fallback("Reno")).unwrap();
        assert_eq!(json["localRef"], "Reno venue");
        assert_eq!(json["urgencyText"], "This opportunity won't wait");
    }
}
