use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{normalize_code, ReviewRecord};

// ---------------------------------------------------------------------------
// CSV snapshot loader
// ---------------------------------------------------------------------------

/// One CSV row. Empty metric cells deserialize to `None` (missing, not zero).
#[derive(Debug, Deserialize)]
struct SnapshotRow {
    #[serde(rename = "Course Name")]
    course_name: String,
    #[serde(rename = "Course Code")]
    course_code: String,
    rating: Option<f64>,
    difficulty: Option<f64>,
    workload: Option<f64>,
}

/// Load a per-review snapshot from a CSV file.
///
/// Expected header: `Course Name,Course Code,rating,difficulty,workload`.
/// Course codes are normalized on read so snapshots taken before
/// normalization still join against the specialization index.
pub fn load_snapshot(path: &Path) -> Result<Vec<ReviewRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening snapshot {}", path.display()))?;

    let mut reviews = Vec::new();
    for (i, result) in reader.deserialize::<SnapshotRow>().enumerate() {
        let row = result.with_context(|| format!("snapshot row {i}"))?;
        reviews.push(ReviewRecord {
            course_name: row.course_name,
            course_code: normalize_code(&row.course_code),
            difficulty: row.difficulty,
            workload: row.workload,
            rating: row.rating,
        });
    }
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("omscope-snapshot-{}.csv", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_rows_with_missing_metrics() {
        let path = write_temp(
            "Course Name,Course Code,rating,difficulty,workload\n\
             Grad Algorithms,CS-6515,4.0,5.0,20.0\n\
             Grad Algorithms,CS-6515,,3.0,\n",
        );
        let reviews = load_snapshot(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].course_code, "CS 6515");
        assert_eq!(reviews[0].rating, Some(4.0));
        assert_eq!(reviews[1].rating, None);
        assert_eq!(reviews[1].workload, None);
        assert_eq!(reviews[1].difficulty, Some(3.0));
    }
}
