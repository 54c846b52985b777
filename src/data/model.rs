use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// ReviewRecord – one scraped review, pre-aggregation
// ---------------------------------------------------------------------------

/// A single course review as fetched from the review site.
/// Metrics are `None` when the reviewer left them blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub course_name: String,
    /// Normalized course code (hyphens replaced with spaces, e.g. "CS 6515").
    pub course_code: String,
    pub difficulty: Option<f64>,
    pub workload: Option<f64>,
    pub rating: Option<f64>,
}

/// Normalize a course code so the two sources agree: the review site reports
/// "CS-6515", the program pages list "CS 6515".
pub fn normalize_code(code: &str) -> String {
    code.replace('-', " ")
}

// ---------------------------------------------------------------------------
// SpecializationIndex – slug → set of course codes
// ---------------------------------------------------------------------------

/// Specialization slug (e.g. "machine-learning") mapped to the set of
/// normalized course codes belonging to it. Built once per scrape,
/// read-only afterwards. A code may appear in any number of specializations.
pub type SpecializationIndex = BTreeMap<String, BTreeSet<String>>;

/// Human-readable label for a specialization slug:
/// "machine-learning" → "Machine Learning".
pub fn spec_label(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Membership – In-Spec / Out-of-Spec flag
// ---------------------------------------------------------------------------

/// Whether a course belongs to a given specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Membership {
    InSpec,
    OutOfSpec,
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Membership::InSpec => write!(f, "In-Spec"),
            Membership::OutOfSpec => write!(f, "Out-of-Spec"),
        }
    }
}

// ---------------------------------------------------------------------------
// CourseSummary – one aggregated row
// ---------------------------------------------------------------------------

/// Per-course aggregate: mean metrics over non-missing review values (rounded
/// to 2 decimals) plus specialization membership flags. A metric is `None`
/// when every review in the group left it blank.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course_name: String,
    pub course_code: String,
    pub avg_difficulty: Option<f64>,
    pub avg_workload: Option<f64>,
    pub avg_rating: Option<f64>,
    /// Count of reviews in the group, including those with missing metrics.
    pub review_count: u32,
    /// One entry per specialization key in the index.
    pub membership: BTreeMap<String, Membership>,
}

impl CourseSummary {
    /// Membership flag for a specialization key; `OutOfSpec` if the key is
    /// unknown (only happens when the caller holds a stale key).
    pub fn membership_in(&self, spec_key: &str) -> Membership {
        self.membership
            .get(spec_key)
            .copied()
            .unwrap_or(Membership::OutOfSpec)
    }
}

// ---------------------------------------------------------------------------
// CourseTable – the complete aggregated dataset
// ---------------------------------------------------------------------------

/// The full aggregated table with the list of specialization columns every
/// row carries.
#[derive(Debug, Clone, Default)]
pub struct CourseTable {
    /// One row per unique (course_name, course_code) pair.
    pub rows: Vec<CourseSummary>,
    /// Sorted specialization keys; empty when the index was empty.
    pub spec_keys: Vec<String>,
}

impl CourseTable {
    /// Number of courses.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has any rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (label, slug) pairs for the specialization selectors, sorted by slug.
    pub fn spec_choices(&self) -> Vec<(String, String)> {
        self.spec_keys
            .iter()
            .map(|k| (spec_label(k), k.clone()))
            .collect()
    }
}
