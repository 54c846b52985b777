use std::collections::BTreeMap;

use super::model::{CourseSummary, CourseTable, Membership, ReviewRecord, SpecializationIndex};

// ---------------------------------------------------------------------------
// Aggregation: reviews → one row per course
// ---------------------------------------------------------------------------

/// Running sum/count for one metric. Missing values touch neither side, so a
/// metric nobody filled in finalizes to `None` rather than zero.
#[derive(Debug, Default, Clone, Copy)]
struct MetricAcc {
    sum: f64,
    count: u32,
}

impl MetricAcc {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| round2(self.sum / self.count as f64))
    }
}

#[derive(Debug, Default)]
struct CourseAcc {
    difficulty: MetricAcc,
    workload: MetricAcc,
    rating: MetricAcc,
    review_count: u32,
}

/// Round to 2 decimal places, half away from zero (`f64::round` semantics).
/// Idempotent: re-rounding an already-rounded value is a no-op.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Aggregate raw reviews into a [`CourseTable`], one row per unique
/// `(course_name, course_code)` pair, then join specialization membership.
///
/// Pure transform: an empty review set yields an empty table, and a course
/// absent from every specialization gets `Out-of-Spec` in every column.
pub fn aggregate_reviews(reviews: &[ReviewRecord], specs: &SpecializationIndex) -> CourseTable {
    let mut groups: BTreeMap<(String, String), CourseAcc> = BTreeMap::new();

    for rec in reviews {
        let acc = groups
            .entry((rec.course_name.clone(), rec.course_code.clone()))
            .or_default();
        acc.difficulty.push(rec.difficulty);
        acc.workload.push(rec.workload);
        acc.rating.push(rec.rating);
        acc.review_count += 1;
    }

    let spec_keys: Vec<String> = specs.keys().cloned().collect();

    let rows = groups
        .into_iter()
        .map(|((course_name, course_code), acc)| {
            let membership = specs
                .iter()
                .map(|(key, codes)| {
                    let flag = if codes.contains(&course_code) {
                        Membership::InSpec
                    } else {
                        Membership::OutOfSpec
                    };
                    (key.clone(), flag)
                })
                .collect();

            CourseSummary {
                course_name,
                course_code,
                avg_difficulty: acc.difficulty.mean(),
                avg_workload: acc.workload.mean(),
                avg_rating: acc.rating.mean(),
                review_count: acc.review_count,
                membership,
            }
        })
        .collect();

    CourseTable { rows, spec_keys }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn review(
        name: &str,
        code: &str,
        rating: Option<f64>,
        difficulty: Option<f64>,
        workload: Option<f64>,
    ) -> ReviewRecord {
        ReviewRecord {
            course_name: name.to_string(),
            course_code: code.to_string(),
            difficulty,
            workload,
            rating,
        }
    }

    fn one_spec(key: &str, codes: &[&str]) -> SpecializationIndex {
        let mut specs = SpecializationIndex::new();
        specs.insert(
            key.to_string(),
            codes.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
        );
        specs
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = aggregate_reviews(&[], &SpecializationIndex::new());
        assert!(table.is_empty());
        assert!(table.spec_keys.is_empty());
    }

    #[test]
    fn groups_by_name_and_code_with_rounded_means() {
        let reviews = vec![
            review("Grad Algorithms", "CS 6515", Some(4.0), Some(5.0), Some(20.0)),
            review("Grad Algorithms", "CS 6515", Some(2.0), Some(3.0), Some(10.0)),
        ];
        let specs = one_spec("computing-systems", &["CS 6515"]);

        let table = aggregate_reviews(&reviews, &specs);
        assert_eq!(table.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.avg_rating, Some(3.0));
        assert_eq!(row.avg_difficulty, Some(4.0));
        assert_eq!(row.avg_workload, Some(15.0));
        assert_eq!(row.review_count, 2);
        assert_eq!(row.membership_in("computing-systems"), Membership::InSpec);
    }

    #[test]
    fn missing_metric_excluded_from_mean_but_counted() {
        let reviews = vec![
            review("ML", "CS 7641", Some(4.5), None, Some(12.0)),
            review("ML", "CS 7641", None, None, Some(18.0)),
        ];
        let table = aggregate_reviews(&reviews, &SpecializationIndex::new());

        let row = &table.rows[0];
        // Single non-missing rating is the mean; all-missing difficulty stays missing.
        assert_eq!(row.avg_rating, Some(4.5));
        assert_eq!(row.avg_difficulty, None);
        assert_eq!(row.avg_workload, Some(15.0));
        assert_eq!(row.review_count, 2);
    }

    #[test]
    fn unique_rows_and_counts_match_groups() {
        let reviews = vec![
            review("A", "CS 1", Some(1.0), None, None),
            review("A", "CS 1", Some(2.0), None, None),
            review("B", "CS 2", Some(3.0), None, None),
        ];
        let table = aggregate_reviews(&reviews, &SpecializationIndex::new());

        let mut seen = BTreeSet::new();
        for row in &table.rows {
            assert!(seen.insert((row.course_name.clone(), row.course_code.clone())));
        }
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].review_count, 2);
        assert_eq!(table.rows[1].review_count, 1);
    }

    #[test]
    fn course_outside_every_spec_is_out_of_spec_everywhere() {
        let reviews = vec![review("Elective", "PUBP 6725", Some(4.0), None, None)];
        let specs = one_spec("machine-learning", &["CS 7641"]);

        let table = aggregate_reviews(&reviews, &specs);
        assert_eq!(
            table.rows[0].membership_in("machine-learning"),
            Membership::OutOfSpec
        );
    }

    #[test]
    fn rounding_half_away_from_zero_and_idempotent() {
        // 0.125 is exact in binary, so the half case is genuinely a half.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(round2(3.1459)), round2(3.1459));
        assert_eq!(round2(15.0), 15.0);
    }
}
