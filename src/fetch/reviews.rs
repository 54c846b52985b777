use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::data::model::{normalize_code, ReviewRecord};

const REVIEWS_URL: &str = "https://www.omscentral.com/";

// ---------------------------------------------------------------------------
// Next.js payload shape (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct NextData {
    props: Props,
}

#[derive(Debug, Deserialize)]
struct Props {
    #[serde(rename = "pageProps")]
    page_props: PageProps,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    courses: Vec<RawCourse>,
}

#[derive(Debug, Deserialize)]
struct RawCourse {
    name: String,
    code: String,
    #[serde(default)]
    reviews: Vec<RawReview>,
}

/// One review object. Metrics the reviewer skipped are absent or null in the
/// payload; either way they land as `None`.
#[derive(Debug, Deserialize)]
struct RawReview {
    rating: Option<f64>,
    difficulty: Option<f64>,
    workload: Option<f64>,
}

// ---------------------------------------------------------------------------
// Fetch + extraction
// ---------------------------------------------------------------------------

/// Fetch the review site and flatten its embedded payload into one
/// [`ReviewRecord`] per (course, review) pair.
pub fn fetch_reviews() -> Result<Vec<ReviewRecord>> {
    log::info!("fetching reviews from {REVIEWS_URL}");
    let body = reqwest::blocking::get(REVIEWS_URL)
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("requesting {REVIEWS_URL}"))?
        .text()
        .context("reading review page body")?;
    extract_reviews(&body)
}

/// Pull `script#__NEXT_DATA__` out of the page and flatten its course list.
/// Split from the HTTP call so it can run against fixture HTML.
pub fn extract_reviews(html: &str) -> Result<Vec<ReviewRecord>> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("script#__NEXT_DATA__").expect("static selector is well-formed");

    let payload = document
        .select(&selector)
        .next()
        .context("review page has no #__NEXT_DATA__ script")?
        .text()
        .collect::<String>();

    let data: NextData =
        serde_json::from_str(&payload).context("parsing #__NEXT_DATA__ JSON payload")?;

    let mut records = Vec::new();
    for course in data.props.page_props.courses {
        let code = normalize_code(&course.code);
        for review in course.reviews {
            records.push(ReviewRecord {
                course_name: course.name.clone(),
                course_code: code.clone(),
                difficulty: review.difficulty,
                workload: review.workload,
                rating: review.rating,
            });
        }
    }
    Ok(records)
}
