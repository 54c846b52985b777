use std::collections::BTreeSet;

use super::model::{CourseTable, Membership};

// ---------------------------------------------------------------------------
// Specialization filter: which courses stay visible
// ---------------------------------------------------------------------------

/// Selected specialization keys. Union semantics: a course stays visible if
/// it is In-Spec for ANY selected key.
pub type SpecSelection = BTreeSet<String>;

/// All specializations selected — the initial state after a fetch.
pub fn init_selection(table: &CourseTable) -> SpecSelection {
    table.spec_keys.iter().cloned().collect()
}

/// Return indices of rows that pass the specialization filter.
///
/// * No specialization columns exist at all → every row passes (there is no
///   filter to apply, which is not the same as nothing being selected).
/// * Empty selection → empty result (no implicit "select all").
/// * Otherwise → a row passes if any selected key's flag is In-Spec.
///
/// Output rows are untouched: this is a pure subset over indices.
pub fn filtered_indices(table: &CourseTable, selected: &SpecSelection) -> Vec<usize> {
    if table.spec_keys.is_empty() {
        return (0..table.len()).collect();
    }

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            selected
                .iter()
                .any(|key| row.membership_in(key) == Membership::InSpec)
        })
        .map(|(i, _)| i)
        .collect()
}
