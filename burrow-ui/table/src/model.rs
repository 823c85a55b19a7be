use std::collections::HashSet;
use std::hash::Hash;

/// Maximum nesting depth rendered by [`flatten_table`].
///
/// Rows at this depth or deeper are not emitted, so the walk terminates
/// even when parent links form a cycle.
pub const MAX_TABLE_DEPTH: usize = 5;

/// Trait implemented by record types consumable by this crate.
pub trait TableRecord {
    /// Identifier shared by a record and the parent tag of its children.
    type Id: Clone + Eq + Hash;

    /// Unique identity of the record within the dataset.
    fn id(&self) -> Self::Id;
    /// Identity of the record this one was loaded under, if any.
    ///
    /// Records without a parent are treated as roots.
    fn parent(&self) -> Option<Self::Id>;
}

/// Key of one visible row: record identity plus nesting depth.
///
/// The same record can surface at several depths when it is reachable
/// through more than one expanded ancestor. Each occurrence carries its
/// own key, so expanding one never expands the others. Keeping both
/// fields structural avoids the ambiguity of encoding them into a single
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey<Id> {
    /// Identity of the record behind the row.
    pub id: Id,
    /// Zero-based nesting depth the row is shown at.
    pub depth: usize,
}

impl<Id> RowKey<Id> {
    pub fn new(id: Id, depth: usize) -> Self {
        Self { id, depth }
    }
}

/// Set of rows currently expanded.
///
/// Keys are held independently of the dataset: a key may stay in the set
/// while its row is not visible, and it becomes effective again once the
/// row reappears.
#[derive(Debug, Clone)]
pub struct Expansions<Id: Eq + Hash> {
    expanded: HashSet<RowKey<Id>>,
}

impl<Id: Eq + Hash> Default for Expansions<Id> {
    fn default() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }
}

impl<Id: Eq + Hash> Expansions<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return whether the row behind `key` is expanded.
    pub fn is_expanded(&self, key: &RowKey<Id>) -> bool {
        self.expanded.contains(key)
    }

    /// Flip the expansion state behind `key` and return the new state.
    ///
    /// `true` means the row just became expanded, which is the only
    /// transition that should trigger a child load.
    pub fn toggle(&mut self, key: RowKey<Id>) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Collapse every row.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Number of expanded rows.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Return whether no row is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

/// Flattened representation of a visible table row.
pub struct FlattenedRow<'a, T: TableRecord> {
    /// Zero-based nesting depth (`0` for root rows).
    pub depth: usize,
    /// Borrowed source record.
    pub record: &'a T,
    /// Expansion key for this row.
    pub key: RowKey<T::Id>,
    /// Whether the row is currently expanded.
    pub expanded: bool,
}

/// Flatten a dataset into a depth-first list of visible rows.
///
/// Roots are the records without a parent tag, walked in dataset order.
/// An expanded row is followed by the records tagged with its id, one
/// level deeper, and collapsed rows contribute nothing below themselves.
/// The walk stops at [`MAX_TABLE_DEPTH`].
pub fn flatten_table<'a, T: TableRecord>(
    records: &'a [T],
    expansions: &Expansions<T::Id>,
) -> Vec<FlattenedRow<'a, T>> {
    let mut rows = Vec::new();
    for record in records.iter().filter(|record| record.parent().is_none()) {
        push_row(record, 0, records, expansions, &mut rows);
    }
    rows
}

fn push_row<'a, T: TableRecord>(
    record: &'a T,
    depth: usize,
    records: &'a [T],
    expansions: &Expansions<T::Id>,
    rows: &mut Vec<FlattenedRow<'a, T>>,
) {
    if depth >= MAX_TABLE_DEPTH {
        return;
    }

    let key = RowKey::new(record.id(), depth);
    let expanded = expansions.is_expanded(&key);
    rows.push(FlattenedRow {
        depth,
        record,
        key,
        expanded,
    });

    if expanded {
        let parent = record.id();
        let children = records
            .iter()
            .filter(|child| child.parent().as_ref() == Some(&parent));
        for child in children {
            push_row(child, depth + 1, records, expansions, rows);
        }
    }
}

/// Return whether the dataset holds at least one child of `id`.
pub fn has_children<T: TableRecord>(records: &[T], id: &T::Id) -> bool {
    records
        .iter()
        .any(|record| record.parent().as_ref() == Some(id))
}
