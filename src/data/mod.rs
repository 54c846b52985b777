/// Data layer: core types, aggregation, loading, and filtering.
///
/// Architecture:
/// ```text
///  fetch / .csv snapshot
///        │
///        ▼
///   ┌────────────┐
///   │ ReviewRecord│  one per (course, review) pair
///   └────────────┘
///        │  + SpecializationIndex
///        ▼
///   ┌────────────┐
///   │  aggregate  │  group by course → CourseTable
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │   filter    │  specialization union filter → visible indices
///   └────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::aggregate::aggregate_reviews;
    use super::filter::{filtered_indices, SpecSelection};
    use super::model::{Membership, ReviewRecord, SpecializationIndex};

    #[test]
    fn aggregate_then_filter_end_to_end() {
        let reviews = vec![
            ReviewRecord {
                course_name: "Grad Algorithms".to_string(),
                course_code: "CS 6515".to_string(),
                difficulty: Some(5.0),
                workload: Some(20.0),
                rating: Some(4.0),
            },
            ReviewRecord {
                course_name: "Grad Algorithms".to_string(),
                course_code: "CS 6515".to_string(),
                difficulty: Some(3.0),
                workload: Some(10.0),
                rating: Some(2.0),
            },
        ];
        let mut specs = SpecializationIndex::new();
        specs.insert(
            "computing-systems".to_string(),
            BTreeSet::from(["CS 6515".to_string()]),
        );

        let table = aggregate_reviews(&reviews, &specs);
        assert_eq!(table.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.avg_rating, Some(3.0));
        assert_eq!(row.avg_difficulty, Some(4.0));
        assert_eq!(row.avg_workload, Some(15.0));
        assert_eq!(row.review_count, 2);
        assert_eq!(row.membership_in("computing-systems"), Membership::InSpec);

        let all: SpecSelection = ["computing-systems".to_string()].into_iter().collect();
        assert_eq!(filtered_indices(&table, &all), vec![0]);
        assert!(filtered_indices(&table, &SpecSelection::new()).is_empty());
    }
}
