use burrow_ui_table::RowKey;

use super::model::{FetchTarget, Record};

/// Events emitted by the records table UI and async fetches.
#[derive(Debug, Clone)]
pub(crate) enum RecordsEvent {
    Refresh,
    RowPressed {
        key: RowKey<u64>,
    },
    RowHovered {
        key: Option<RowKey<u64>>,
    },
    RootsLoaded {
        records: Vec<Record>,
    },
    ChildrenLoaded {
        parent: u64,
        records: Vec<Record>,
    },
    FetchFailed {
        target: FetchTarget,
        message: String,
    },
}
