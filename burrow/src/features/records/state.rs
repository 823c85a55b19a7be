use std::collections::HashSet;

use burrow_ui_table::{Expansions, RowKey, has_children};

use super::model::{LoadPhase, Record};

/// State owned by the records feature.
///
/// Records for every fetched level live in one flat dataset. Child rows are
/// recognized by their parent tag, and a completed child fetch doubles as the
/// cache mark that suppresses a second fetch for the same parent.
#[derive(Debug, Default)]
pub(crate) struct RecordsState {
    phase: LoadPhase,
    records: Vec<Record>,
    expansions: Expansions<u64>,
    hovered: Option<RowKey<u64>>,
    fetching: HashSet<u64>,
}

impl RecordsState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return current phase of the root dataset.
    pub(crate) fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Return the merged record dataset.
    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    /// Return the expansion registry for visible rows.
    pub(crate) fn expansions(&self) -> &Expansions<u64> {
        &self.expansions
    }

    /// Return hovered row key.
    pub(crate) fn hovered_key(&self) -> Option<&RowKey<u64>> {
        self.hovered.as_ref()
    }

    pub(crate) fn set_hovered_key(&mut self, key: Option<RowKey<u64>>) {
        self.hovered = key;
    }

    /// Return parent ids with a child fetch currently in flight.
    pub(crate) fn fetching(&self) -> &HashSet<u64> {
        &self.fetching
    }

    /// Flip expansion for a row and return the new expanded state.
    pub(crate) fn toggle(&mut self, key: RowKey<u64>) -> bool {
        self.expansions.toggle(key)
    }

    /// Reset to a fresh loading pass, dropping merged data and expansions.
    pub(crate) fn begin_refresh(&mut self) {
        self.phase = LoadPhase::Loading;
        self.records.clear();
        self.expansions.clear();
        self.fetching.clear();
        self.hovered = None;
    }

    /// Replace the dataset with freshly loaded root records.
    pub(crate) fn apply_roots(&mut self, records: Vec<Record>) {
        self.records = records;
        self.phase = LoadPhase::Ready;
    }

    /// Mark the root load as failed.
    pub(crate) fn fail_roots(&mut self, message: String) {
        self.phase = LoadPhase::Failed { message };
    }

    /// Mark a child fetch as pending.
    ///
    /// Returns false when the parent already has merged children or a fetch
    /// in flight, in which case no new request may start.
    pub(crate) fn begin_child_fetch(&mut self, parent: u64) -> bool {
        if self.fetching.contains(&parent)
            || has_children(&self.records, &parent)
        {
            return false;
        }

        self.fetching.insert(parent);
        true
    }

    /// Append loaded children to the dataset, tagged with their parent id.
    pub(crate) fn apply_children(
        &mut self,
        parent: u64,
        children: Vec<Record>,
    ) {
        self.fetching.remove(&parent);
        self.records.extend(
            children
                .into_iter()
                .map(|record| record.with_parent(parent)),
        );
    }

    /// Clear the pending mark so a later expand can retry the fetch.
    pub(crate) fn fail_child_fetch(&mut self, parent: u64) {
        self.fetching.remove(&parent);
    }
}

#[cfg(test)]
mod tests {
    use burrow_ui_table::{RowKey, TableRecord};

    use super::{LoadPhase, Record, RecordsState};

    fn record(id: u64) -> Record {
        Record::new(id, format!("record {id}"), String::from("body"))
    }

    #[test]
    fn given_new_state_when_created_then_phase_is_loading() {
        let state = RecordsState::new();

        assert_eq!(state.phase(), &LoadPhase::Loading);
        assert!(state.records().is_empty());
    }

    #[test]
    fn given_loaded_roots_when_applied_then_phase_is_ready() {
        let mut state = RecordsState::new();

        state.apply_roots(vec![record(1), record(2)]);

        assert_eq!(state.phase(), &LoadPhase::Ready);
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn given_pending_fetch_when_begun_again_then_second_begin_is_rejected() {
        let mut state = RecordsState::new();
        state.apply_roots(vec![record(1)]);

        assert!(state.begin_child_fetch(1));
        assert!(!state.begin_child_fetch(1));
    }

    #[test]
    fn given_merged_children_when_fetch_begins_then_cached_parent_is_rejected()
    {
        let mut state = RecordsState::new();
        state.apply_roots(vec![record(1)]);
        state.apply_children(1, vec![record(11)]);

        assert!(!state.begin_child_fetch(1));
        assert!(state.fetching().is_empty());
    }

    #[test]
    fn given_failed_child_fetch_when_cleared_then_parent_can_retry() {
        let mut state = RecordsState::new();
        state.apply_roots(vec![record(1)]);

        assert!(state.begin_child_fetch(1));
        state.fail_child_fetch(1);

        assert!(state.begin_child_fetch(1));
    }

    #[test]
    fn given_loaded_children_when_applied_then_records_carry_parent_tag() {
        let mut state = RecordsState::new();
        state.apply_roots(vec![record(1)]);

        state.begin_child_fetch(1);
        state.apply_children(1, vec![record(11), record(12)]);

        let tagged: Vec<Option<u64>> = state
            .records()
            .iter()
            .map(TableRecord::parent)
            .collect();
        assert_eq!(tagged, vec![None, Some(1), Some(1)]);
        assert!(state.fetching().is_empty());
    }

    #[test]
    fn given_populated_state_when_refresh_begins_then_everything_resets() {
        let mut state = RecordsState::new();
        state.apply_roots(vec![record(1)]);
        state.toggle(RowKey::new(1, 0));
        state.begin_child_fetch(1);
        state.set_hovered_key(Some(RowKey::new(1, 0)));

        state.begin_refresh();

        assert_eq!(state.phase(), &LoadPhase::Loading);
        assert!(state.records().is_empty());
        assert!(state.expansions().is_empty());
        assert!(state.fetching().is_empty());
        assert!(state.hovered_key().is_none());
    }

    #[test]
    fn given_failed_roots_when_marked_then_phase_keeps_the_message() {
        let mut state = RecordsState::new();

        state.fail_roots(String::from("connection refused"));

        assert_eq!(
            state.phase(),
            &LoadPhase::Failed {
                message: String::from("connection refused"),
            },
        );
    }
}
