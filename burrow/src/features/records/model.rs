use std::fmt;

use burrow_ui_table::TableRecord;
use serde::Deserialize;

/// Record returned by the records endpoint.
///
/// The wire payload never carries nesting information. The `parent` tag is
/// attached locally when a child fetch merges its rows into the dataset.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Record {
    id: u64,
    title: String,
    body: String,
    #[serde(skip)]
    parent: Option<u64>,
}

impl Record {
    /// Build a record directly, bypassing payload decoding.
    #[cfg(test)]
    pub(crate) fn new(id: u64, title: String, body: String) -> Self {
        Self {
            id,
            title,
            body,
            parent: None,
        }
    }

    /// Return record identifier.
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Return record title.
    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    /// Return record body text.
    pub(crate) fn body(&self) -> &str {
        &self.body
    }

    /// Tag the record as a child of `parent`.
    pub(crate) fn with_parent(mut self, parent: u64) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl TableRecord for Record {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn parent(&self) -> Option<u64> {
        self.parent
    }
}

/// Scope of an in-flight records request, used in failure handling.
#[derive(Debug, Clone)]
pub(crate) enum FetchTarget {
    Roots,
    Children { parent: u64 },
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::Roots => write!(f, "root records"),
            FetchTarget::Children { parent } => {
                write!(f, "children of record {parent}")
            },
        }
    }
}

/// Lifecycle phase of the root dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use burrow_ui_table::TableRecord;

    use super::{FetchTarget, LoadPhase, Record};

    #[test]
    fn given_decoded_record_when_tagged_then_parent_is_attached() {
        let record =
            Record::new(2, String::from("beta"), String::from("body"))
                .with_parent(1);

        assert_eq!(TableRecord::parent(&record), Some(1));
        assert_eq!(TableRecord::id(&record), 2);
    }

    #[test]
    fn given_roots_target_when_displayed_then_describes_root_scope() {
        assert_eq!(format!("{}", FetchTarget::Roots), "root records");
    }

    #[test]
    fn given_children_target_when_displayed_then_names_parent_record() {
        let target = FetchTarget::Children { parent: 7 };

        assert_eq!(format!("{target}"), "children of record 7");
    }

    #[test]
    fn given_default_phase_when_created_then_dataset_is_loading() {
        assert_eq!(LoadPhase::default(), LoadPhase::Loading);
    }
}
