//! Drill-down table helpers and a lightweight [`iced`] table widget.
//!
//! This crate is split into two layers:
//! - model helpers ([`TableRecord`], [`Expansions`], [`flatten_table`]) that
//!   are UI-agnostic;
//! - view helpers ([`TableView`], [`TableRowContext`]) that render rows in
//!   `iced`.
//!
//! The recommended flow for interactive tables:
//! 1. store an [`Expansions`] set and the hovered [`RowKey`] in your app
//!    state;
//! 2. feed them into [`TableView::new`] and [`TableView::hovered`];
//! 3. update that state from callbacks like [`TableView::on_press`] and
//!    [`TableView::on_hover`], loading children when [`Expansions::toggle`]
//!    reports a row just expanded.
//!
//! See `examples/drilldown.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use burrow_ui_table::{Expansions, RowKey, TableRecord, TableView};
//! use iced::widget::{container, text};
//! use iced::{Element, Length};
//!
//! #[derive(Clone)]
//! struct Item {
//!     id: u64,
//!     parent: Option<u64>,
//!     title: String,
//! }
//!
//! impl TableRecord for Item {
//!     type Id = u64;
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn parent(&self) -> Option<u64> {
//!         self.parent
//!     }
//! }
//!
//! #[derive(Clone)]
//! enum Message {
//!     RowPressed(RowKey<u64>),
//!     RowHovered(Option<RowKey<u64>>),
//! }
//!
//! struct State {
//!     items: Vec<Item>,
//!     expansions: Expansions<u64>,
//!     hovered: Option<RowKey<u64>>,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     TableView::new(&state.items, &state.expansions, |ctx| {
//!         container(text(ctx.row.record.title.as_str()))
//!             .width(Length::Fill)
//!             .into()
//!     })
//!     .hovered(state.hovered.as_ref())
//!     .on_press(Message::RowPressed)
//!     .on_hover(Message::RowHovered)
//!     .indent_width(16.0)
//!     .view()
//! }
//! ```

mod model;
mod view;

pub use model::{
    Expansions, FlattenedRow, MAX_TABLE_DEPTH, RowKey, TableRecord,
    flatten_table, has_children,
};
pub use view::{TableRow, TableRowContext, TableView};
