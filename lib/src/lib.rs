#![doc = svgbobdoc::transform!(
//! A toolkit for rendering per-city landing pages for a live event tour.
//!
//! # Overview
//!
//! A tour is a fixed, ordered list of stops plus a table of city-specific
//! marketing copy. Rendering a tour turns one HTML template into one page per
//! stop and records what was produced:
//!
//! ```svgbob
//!  +----------+      +--------+      +-----------------------+
//!  | template +----->|        +----->| <prefix>-<city>.html  |...
//!  +----------+      |        |      +-----------------------+
//!                    | render |
//!  +----------+      |        |      +-------------------------+
//!  |   Tour   +----->|        +----->| deployment-summary.json |
//!  +----+-----+      +--------+      +-------------------------+
//!       |
//!       |            +-----------+   +----------------------------+
//!       +----------->| targeting +-->| veteran-ad-targeting.json  |
//!                    +-----------+   +----------------------------+
//! ```
//!
//! In words, a [`Tour`] consists of:
//!
//!   * A [`Roster`](record::Roster): the ordered [`TourStop`](record::TourStop)s
//!     and a city → [`CityCustomization`](record::CityCustomization) map. A
//!     city without an entry gets a fallback synthesized from its name.
//!
//!   * A [`Brand`](brand::Brand): names, URLs, event times, and ticket tiers
//!     shared by every page.
//!
//! ## Rendering
//!
//! A tour is typically rendered via the following set of operations:
//!
//! 1. A [`Renderer`](render::Renderer) is created for a template file and an
//!    output directory. A missing template fails here, before any page.
//! 2. A [`Batch`](batch::Batch) renders every stop in order. Each stop's page
//!    is the template with an ordered list of literal
//!    [`Substitution`](render::Substitution)s applied, followed by the
//!    title, meta description, and JSON-LD event block being replaced. A stop
//!    that fails is recorded and skipped.
//! 3. The resulting [`Report`](batch::Report) is written out as the
//!    deployment summary.
//! 4. The ad-targeting data is built from the same tour and written
//!    separately.
)]

#[macro_use]
pub mod error;
pub mod util;
pub mod artifact;
pub mod record;
pub mod brand;
pub mod tour;
pub mod render;
pub mod batch;
pub mod targeting;

pub use tour::Tour;
