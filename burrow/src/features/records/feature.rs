use std::collections::HashSet;

use burrow_ui_table::{Expansions, RowKey};
use iced::Task;

use super::event::RecordsEvent;
use super::model::{FetchTarget, LoadPhase, Record};
use super::services::ApiClient;
use super::state::RecordsState;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Runtime dependencies for the records feature reducer.
pub(crate) struct RecordsCtx<'a> {
    pub(crate) api: &'a ApiClient,
}

/// Feature root that owns records state and reduction logic.
#[derive(Debug)]
pub(crate) struct RecordsFeature {
    state: RecordsState,
}

impl RecordsFeature {
    /// Construct records feature with default state.
    pub(crate) fn new() -> Self {
        Self {
            state: RecordsState::new(),
        }
    }

    /// Return current phase of the root dataset.
    pub(crate) fn phase(&self) -> &LoadPhase {
        self.state.phase()
    }

    /// Return merged records for table rendering.
    pub(crate) fn records(&self) -> &[Record] {
        self.state.records()
    }

    /// Return the expansion registry for table rendering.
    pub(crate) fn expansions(&self) -> &Expansions<u64> {
        self.state.expansions()
    }

    /// Return hovered row key.
    pub(crate) fn hovered_key(&self) -> Option<&RowKey<u64>> {
        self.state.hovered_key()
    }

    /// Return parent ids with a child fetch in flight.
    pub(crate) fn fetching(&self) -> &HashSet<u64> {
        self.state.fetching()
    }

    fn reduce_refresh(&mut self, ctx: &RecordsCtx<'_>) -> Task<AppEvent> {
        self.state.begin_refresh();
        request_load_roots(ctx.api.clone())
    }

    fn reduce_row_pressed(
        &mut self,
        ctx: &RecordsCtx<'_>,
        key: RowKey<u64>,
    ) -> Task<AppEvent> {
        let parent = key.id;
        if !self.state.toggle(key) {
            return Task::none();
        }
        if !self.state.begin_child_fetch(parent) {
            return Task::none();
        }

        request_load_children(ctx.api.clone(), parent)
    }

    fn reduce_fetch_failed(
        &mut self,
        target: FetchTarget,
        message: String,
    ) -> Task<AppEvent> {
        log::warn!("records failed to load {target}: {message}");

        match target {
            FetchTarget::Roots => self.state.fail_roots(message),
            FetchTarget::Children { parent } => {
                self.state.fail_child_fetch(parent)
            },
        }

        Task::none()
    }
}

impl Feature for RecordsFeature {
    type Event = RecordsEvent;
    type Ctx<'a>
        = RecordsCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: RecordsEvent,
        ctx: &RecordsCtx<'a>,
    ) -> Task<AppEvent> {
        use RecordsEvent::*;

        match event {
            Refresh => self.reduce_refresh(ctx),
            RowPressed { key } => self.reduce_row_pressed(ctx, key),
            RowHovered { key } => {
                self.state.set_hovered_key(key);
                Task::none()
            },
            RootsLoaded { records } => {
                self.state.apply_roots(records);
                Task::none()
            },
            ChildrenLoaded { parent, records } => {
                self.state.apply_children(parent, records);
                Task::none()
            },
            FetchFailed { target, message } => {
                self.reduce_fetch_failed(target, message)
            },
        }
    }
}

fn request_load_roots(api: ApiClient) -> Task<AppEvent> {
    Task::perform(
        async move { api.fetch_roots().await },
        |result| match result {
            Ok(records) => {
                AppEvent::Records(RecordsEvent::RootsLoaded { records })
            },
            Err(err) => AppEvent::Records(RecordsEvent::FetchFailed {
                target: FetchTarget::Roots,
                message: format!("{err}"),
            }),
        },
    )
}

fn request_load_children(api: ApiClient, parent: u64) -> Task<AppEvent> {
    Task::perform(
        async move {
            let loaded = api.fetch_children(parent).await;
            (parent, loaded)
        },
        |(parent, result)| match result {
            Ok(records) => AppEvent::Records(RecordsEvent::ChildrenLoaded {
                parent,
                records,
            }),
            Err(err) => AppEvent::Records(RecordsEvent::FetchFailed {
                target: FetchTarget::Children { parent },
                message: format!("{err}"),
            }),
        },
    )
}

#[cfg(test)]
mod tests {
    use burrow_ui_table::{RowKey, flatten_table};

    use super::{
        ApiClient, FetchTarget, LoadPhase, Record, RecordsCtx, RecordsEvent,
        RecordsFeature,
    };
    use crate::app::config::AppConfig;
    use crate::features::Feature;

    fn api() -> ApiClient {
        ApiClient::new(&AppConfig::default()).expect("client should build")
    }

    fn ctx(api: &ApiClient) -> RecordsCtx<'_> {
        RecordsCtx { api }
    }

    fn record(id: u64) -> Record {
        Record::new(id, format!("record {id}"), String::from("body"))
    }

    fn loaded_feature(root_ids: &[u64]) -> RecordsFeature {
        let mut feature = RecordsFeature::new();
        let api = api();
        let _task = feature.reduce(
            RecordsEvent::RootsLoaded {
                records: root_ids.iter().map(|id| record(*id)).collect(),
            },
            &ctx(&api),
        );
        feature
    }

    #[test]
    fn given_roots_loaded_event_when_reduced_then_dataset_is_ready() {
        let mut feature = RecordsFeature::new();
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RootsLoaded {
                records: vec![record(1), record(2)],
            },
            &ctx(&api),
        );

        assert_eq!(feature.phase(), &LoadPhase::Ready);
        assert_eq!(feature.records().len(), 2);
        assert!(feature.expansions().is_empty());
    }

    #[test]
    fn given_roots_fetch_failure_when_reduced_then_phase_keeps_the_message() {
        let mut feature = RecordsFeature::new();
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::FetchFailed {
                target: FetchTarget::Roots,
                message: String::from("connection refused"),
            },
            &ctx(&api),
        );

        assert_eq!(
            feature.phase(),
            &LoadPhase::Failed {
                message: String::from("connection refused"),
            },
        );
    }

    #[test]
    fn given_collapsed_root_row_when_pressed_then_child_fetch_is_marked_pending()
     {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );

        assert!(feature.expansions().is_expanded(&RowKey::new(1, 0)));
        assert!(feature.fetching().contains(&1));
    }

    #[test]
    fn given_expanded_row_when_pressed_again_then_row_collapses_without_canceling()
     {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );

        assert!(!feature.expansions().is_expanded(&RowKey::new(1, 0)));
        assert!(feature.fetching().contains(&1));
    }

    #[test]
    fn given_children_loaded_event_when_reduced_then_rows_nest_under_parent() {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::ChildrenLoaded {
                parent: 1,
                records: vec![record(11)],
            },
            &ctx(&api),
        );

        let rows = flatten_table(feature.records(), feature.expansions());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].record.id(), 11);
        assert_eq!(rows[1].depth, 1);
        assert!(feature.fetching().is_empty());
    }

    #[test]
    fn given_collapsed_parent_when_children_arrive_then_rows_wait_for_reexpand()
     {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::ChildrenLoaded {
                parent: 1,
                records: vec![record(11)],
            },
            &ctx(&api),
        );

        assert_eq!(feature.records().len(), 2);
        let rows = flatten_table(feature.records(), feature.expansions());
        assert_eq!(rows.len(), 1);

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );

        assert!(feature.fetching().is_empty());
        let rows = flatten_table(feature.records(), feature.expansions());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].depth, 1);
    }

    #[test]
    fn given_child_fetch_failure_when_reduced_then_dataset_is_kept() {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::FetchFailed {
                target: FetchTarget::Children { parent: 1 },
                message: String::from("boom"),
            },
            &ctx(&api),
        );

        assert_eq!(feature.phase(), &LoadPhase::Ready);
        assert_eq!(feature.records().len(), 1);
        assert!(feature.fetching().is_empty());
    }

    #[test]
    fn given_populated_feature_when_refresh_is_reduced_then_dataset_resets() {
        let mut feature = loaded_feature(&[1, 2]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(RecordsEvent::Refresh, &ctx(&api));

        assert_eq!(feature.phase(), &LoadPhase::Loading);
        assert!(feature.records().is_empty());
        assert!(feature.expansions().is_empty());
        assert!(feature.fetching().is_empty());
    }

    #[test]
    fn given_row_hover_event_when_reduced_then_hover_key_is_updated() {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowHovered {
                key: Some(RowKey::new(1, 0)),
            },
            &ctx(&api),
        );

        assert_eq!(feature.hovered_key(), Some(&RowKey::new(1, 0)));
    }

    #[test]
    fn given_cached_children_when_row_is_reexpanded_then_no_fetch_is_marked() {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::ChildrenLoaded {
                parent: 1,
                records: vec![record(11)],
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );

        assert!(feature.expansions().is_expanded(&RowKey::new(1, 0)));
        assert!(feature.fetching().is_empty());
    }

    #[test]
    fn given_child_row_when_pressed_then_grandchild_fetch_is_marked() {
        let mut feature = loaded_feature(&[1]);
        let api = api();

        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(1, 0),
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::ChildrenLoaded {
                parent: 1,
                records: vec![record(11)],
            },
            &ctx(&api),
        );
        let _task = feature.reduce(
            RecordsEvent::RowPressed {
                key: RowKey::new(11, 1),
            },
            &ctx(&api),
        );

        assert!(feature.expansions().is_expanded(&RowKey::new(11, 1)));
        assert!(feature.fetching().contains(&11));
    }
}
