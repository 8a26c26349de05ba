use serde_json::{json, Value};

use crate::brand::Brand;
use crate::record::{CityCustomization, TourStop};

/// The schema.org `Event` describing `stop`.
pub fn event(stop: &TourStop, custom: &CityCustomization, brand: &Brand) -> Value {
    let offers: Vec<Value> = brand.tickets.iter()
        .map(|tier| json!({
            "@type": "Offer",
            "name": tier.name,
            "price": tier.price,
            "priceCurrency": tier.currency,
            "url": tier.url,
            "availability": "https://schema.org/LimitedAvailability",
        }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Event",
        "name": brand.event_name,
        "description": brand.event_description,
        "startDate": brand.starts_at(&stop.iso_date),
        "endDate": brand.ends_at(&stop.iso_date),
        "location": {
            "@type": "Place",
            "name": custom.local_ref,
            "address": {
                "@type": "PostalAddress",
                "addressLocality": stop.city,
                "addressRegion": stop.state,
            }
        },
        "organizer": {
            "@type": "Person",
            "name": brand.organizer.name,
            "description": brand.organizer.description,
            "url": brand.organizer.url,
        },
        "offers": offers,
    })
}

/// The `<script>` element embedding [`event()`] as pretty-printed JSON-LD.
///
/// `</` is written as `<\/`, which JSON reads back unchanged, so no value can
/// close the element early.
pub fn script_block(stop: &TourStop, custom: &CityCustomization, brand: &Brand) -> String {
    let json = format!("{:#}", event(stop, custom, brand)).replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">\n{json}\n</script>")
}
