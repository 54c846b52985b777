/// Fetch layer: blocking HTTP against the two sources.
///
/// * `reviews` – the review site embeds its course/review data as a Next.js
///   `#__NEXT_DATA__` JSON payload; we pull it out and flatten it.
/// * `specs` – each specialization has a program page listing its courses as
///   plain `<li>` items.
///
/// Both snapshots are fetched to completion before the caller aggregates;
/// there is no retry, pagination, or partial-result handling here.

pub mod reviews;
pub mod specs;

use anyhow::Result;

use crate::data::model::{ReviewRecord, SpecializationIndex};

/// Fetch both snapshots. Either both succeed or the whole fetch fails —
/// no partial joins.
pub fn fetch_all() -> Result<(Vec<ReviewRecord>, SpecializationIndex)> {
    let reviews = reviews::fetch_reviews()?;
    let specs = specs::fetch_spec_index()?;
    log::info!(
        "fetched {} reviews and {} specializations",
        reviews.len(),
        specs.len()
    );
    Ok((reviews, specs))
}
