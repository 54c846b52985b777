use std::collections::BTreeSet;

use anyhow::{Context, Result};
use scraper::{Html, Selector};

use crate::data::model::SpecializationIndex;

const SPEC_URL_BASE: &str = "https://omscs.gatech.edu/specialization-";

/// Specializations with a scrapeable program page.
pub const SPEC_SLUGS: [&str; 4] = [
    "computational-perception-robotics",
    "computing-systems",
    "interactive-intelligence",
    "machine-learning",
];

/// Fetch every specialization page and build the slug → course-code index.
pub fn fetch_spec_index() -> Result<SpecializationIndex> {
    let mut index = SpecializationIndex::new();
    for slug in SPEC_SLUGS {
        let url = format!("{SPEC_URL_BASE}{slug}");
        log::info!("fetching specialization page {url}");
        let body = reqwest::blocking::get(&url)
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("requesting {url}"))?
            .text()
            .with_context(|| format!("reading body of {url}"))?;

        let codes = extract_spec_courses(&body)
            .with_context(|| format!("extracting courses from {url}"))?;
        index.insert(slug.to_string(), codes);
    }
    Ok(index)
}

/// Extract course codes from a specialization program page.
///
/// The course list lives in the first `div.body.with-aside` block as `<li>`
/// items like "CS 6515 Introduction to Graduate Algorithms"; the code is the
/// first two whitespace-separated tokens. Split from the HTTP call so it can
/// run against fixture HTML.
pub fn extract_spec_courses(html: &str) -> Result<BTreeSet<String>> {
    let document = Html::parse_document(html);
    let body_selector =
        Selector::parse("div.body.with-aside").expect("static selector is well-formed");
    let item_selector = Selector::parse("li").expect("static selector is well-formed");

    let body = document
        .select(&body_selector)
        .next()
        .context("page has no div.body.with-aside block")?;

    let mut codes = BTreeSet::new();
    for item in body.select(&item_selector) {
        let text = item.text().collect::<String>();
        let code = text
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ");
        if !code.is_empty() {
            codes.insert(code);
        }
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="body with-aside">
            <p>Core courses:</p>
            <ul>
              <li>CS 6515 Introduction to Graduate Algorithms</li>
              <li>  CS 6210   Advanced Operating Systems </li>
              <li>CS 6250 Computer Networks</li>
            </ul>
          </div>
          <div class="body with-aside">
            <ul><li>CS 9999 From The Second Block</li></ul>
          </div>
        </body></html>"#;

    #[test]
    fn extracts_first_two_tokens_as_code() {
        let codes = extract_spec_courses(PAGE).unwrap();
        assert!(codes.contains("CS 6515"));
        assert!(codes.contains("CS 6210"));
        assert!(codes.contains("CS 6250"));
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn only_first_block_is_read() {
        let codes = extract_spec_courses(PAGE).unwrap();
        assert!(!codes.contains("CS 9999"));
    }

    #[test]
    fn page_without_course_block_is_an_error() {
        assert!(extract_spec_courses("<html><body></body></html>").is_err());
    }
}
