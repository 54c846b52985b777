use crate::data::aggregate::aggregate_reviews;
use crate::data::filter::{filtered_indices, init_selection, SpecSelection};
use crate::data::model::{CourseTable, ReviewRecord, SpecializationIndex};
use crate::encoding::{self, AxisParam, ColorParam, EncodingError, EncodingSpec, SizeParam};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Aggregated course table (None until a fetch or snapshot load).
    pub table: Option<CourseTable>,

    /// Selected specialization keys (union filter).
    pub spec_filter: SpecSelection,

    /// Indices of courses passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Axis / size / colour parameter selections.
    pub x_param: AxisParam,
    pub y_param: AxisParam,
    pub size_param: SizeParam,
    pub color_param: ColorParam,

    /// Which specialization colours the points when
    /// `color_param == Specialization`.
    pub spec_choice: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a fetch or load is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        // Same defaults the sidebar opens with: difficulty vs. rating,
        // sized by review count, coloured by workload.
        Self {
            table: None,
            spec_filter: SpecSelection::default(),
            visible_indices: Vec::new(),
            x_param: AxisParam::AvgDifficulty,
            y_param: AxisParam::AvgRating,
            size_param: SizeParam::Metric(AxisParam::ReviewCount),
            color_param: ColorParam::AvgWorkload,
            spec_choice: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Aggregate freshly fetched snapshots and reset filter state.
    /// Both snapshots must be complete; the join happens here, once.
    pub fn ingest(&mut self, reviews: &[ReviewRecord], specs: &SpecializationIndex) {
        let table = aggregate_reviews(reviews, specs);

        self.spec_filter = init_selection(&table);
        self.visible_indices = (0..table.len()).collect();
        self.spec_choice = table.spec_keys.first().cloned();
        if table.spec_keys.is_empty() && self.color_param == ColorParam::Specialization {
            // No membership columns to colour by.
            self.color_param = ColorParam::None;
        }

        self.table = Some(table);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.spec_filter);
        }
    }

    /// Toggle one specialization in the filter.
    pub fn toggle_spec(&mut self, key: &str) {
        if !self.spec_filter.remove(key) {
            self.spec_filter.insert(key.to_string());
        }
        self.refilter();
    }

    /// Select every specialization.
    pub fn select_all_specs(&mut self) {
        if let Some(table) = &self.table {
            self.spec_filter = init_selection(table);
        }
        self.refilter();
    }

    /// Clear the specialization selection (hides everything).
    pub fn select_no_specs(&mut self) {
        self.spec_filter.clear();
        self.refilter();
    }

    /// Resolve the current parameter selections against the table.
    pub fn resolve_encoding(&self) -> Result<EncodingSpec, EncodingError> {
        let table = self.table.as_ref().cloned().unwrap_or_default();
        encoding::resolve(
            self.x_param,
            self.y_param,
            self.size_param,
            self.color_param,
            self.spec_choice.as_deref(),
            &table,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::model::Membership;

    fn snapshots() -> (Vec<ReviewRecord>, SpecializationIndex) {
        let reviews = vec![
            ReviewRecord {
                course_name: "Grad Algorithms".to_string(),
                course_code: "CS 6515".to_string(),
                difficulty: Some(5.0),
                workload: Some(20.0),
                rating: Some(4.0),
            },
            ReviewRecord {
                course_name: "Elective".to_string(),
                course_code: "PUBP 6725".to_string(),
                difficulty: None,
                workload: None,
                rating: Some(3.0),
            },
        ];
        let mut specs = SpecializationIndex::new();
        specs.insert(
            "computing-systems".to_string(),
            BTreeSet::from(["CS 6515".to_string()]),
        );
        (reviews, specs)
    }

    #[test]
    fn ingest_selects_all_specs_and_shows_members() {
        let (reviews, specs) = snapshots();
        let mut state = AppState::default();
        state.ingest(&reviews, &specs);

        assert!(state.spec_filter.contains("computing-systems"));
        // Only the in-spec course is visible with the full selection.
        assert_eq!(state.visible_indices.len(), 1);
        let table = state.table.as_ref().unwrap();
        assert_eq!(
            table.rows[state.visible_indices[0]].membership_in("computing-systems"),
            Membership::InSpec
        );
    }

    #[test]
    fn deselecting_everything_hides_everything() {
        let (reviews, specs) = snapshots();
        let mut state = AppState::default();
        state.ingest(&reviews, &specs);
        state.select_no_specs();
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn snapshot_without_specs_passes_all_rows() {
        let (reviews, _) = snapshots();
        let mut state = AppState::default();
        state.ingest(&reviews, &SpecializationIndex::new());
        assert_eq!(state.visible_indices.len(), 2);
    }

    #[test]
    fn encoding_resolves_with_default_selections() {
        let (reviews, specs) = snapshots();
        let mut state = AppState::default();
        state.ingest(&reviews, &specs);
        let spec = state.resolve_encoding().unwrap();
        assert!(!spec.color_is_categorical);
        assert_eq!(spec.x_clamp, Some((1.0, 5.0)));
    }

    #[test]
    fn specialization_color_falls_back_when_no_specs_exist() {
        let (reviews, _) = snapshots();
        let mut state = AppState {
            color_param: ColorParam::Specialization,
            ..AppState::default()
        };
        state.ingest(&reviews, &SpecializationIndex::new());
        assert_eq!(state.color_param, ColorParam::None);
        assert!(state.resolve_encoding().is_ok());
    }
}
