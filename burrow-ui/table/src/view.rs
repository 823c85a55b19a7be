use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::model::{
    Expansions, FlattenedRow, RowKey, TableRecord, flatten_table,
};

/// Flattened table row used by [`TableView`] render callbacks.
pub type TableRow<'a, T> = FlattenedRow<'a, T>;

/// Rendering context passed to row callbacks.
pub struct TableRowContext<'a, T: TableRecord> {
    pub row: TableRow<'a, T>,
    pub is_hovered: bool,
    /// Whether the next visible row is nested under this one.
    pub has_visible_children: bool,
}

type RowRenderer<'a, T, Message> =
    dyn Fn(&TableRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowStyle<'a, T> =
    dyn Fn(&TableRowContext<'a, T>) -> container::Style + 'a;
type ToggleContent<'a, T, Message> =
    dyn Fn(&TableRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowAction<'a, Id, Message> = dyn Fn(RowKey<Id>) -> Message + 'a;
type HoverAction<'a, Id, Message> =
    dyn Fn(Option<RowKey<Id>>) -> Message + 'a;
type RowExtra<'a, T, Message> =
    dyn Fn(&TableRowContext<'a, T>) -> Option<Element<'a, Message>> + 'a;

/// Lightweight drill-down table helper that wires expansion state to row
/// rendering.
pub struct TableView<'a, T: TableRecord, Message: Clone + 'a> {
    records: &'a [T],
    expansions: &'a Expansions<T::Id>,
    hovered: Option<&'a RowKey<T::Id>>,
    on_press: Option<Box<RowAction<'a, T::Id, Message>>>,
    on_toggle: Option<Box<RowAction<'a, T::Id, Message>>>,
    on_hover: Option<Box<HoverAction<'a, T::Id, Message>>>,
    render_row: Box<RowRenderer<'a, T, Message>>,
    row_style: Option<Box<RowStyle<'a, T>>>,
    toggle_content: Option<Box<ToggleContent<'a, T, Message>>>,
    empty_expansion: Option<Box<RowExtra<'a, T, Message>>>,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a, T, Message> TableView<'a, T, Message>
where
    T: TableRecord + 'a,
    Message: Clone + 'a,
{
    /// Create a table view that renders each visible row using
    /// `render_row`.
    pub fn new(
        records: &'a [T],
        expansions: &'a Expansions<T::Id>,
        render_row: impl Fn(&TableRowContext<'a, T>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            records,
            expansions,
            hovered: None,
            on_press: None,
            on_toggle: None,
            on_hover: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            empty_expansion: None,
            spacing: 0.0,
            indent_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Provide the currently hovered key to inform row rendering.
    pub fn hovered(mut self, key: Option<&'a RowKey<T::Id>>) -> Self {
        self.hovered = key;
        self
    }

    /// Emit a message when a row receives a left press.
    pub fn on_press(
        mut self,
        on_press: impl Fn(RowKey<T::Id>) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Emit a message when the toggle area of a row is clicked.
    pub fn on_toggle(
        mut self,
        on_toggle: impl Fn(RowKey<T::Id>) -> Message + 'a,
    ) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<RowKey<T::Id>>) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&TableRowContext<'a, T>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content to render inside the toggle area.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(&TableRowContext<'a, T>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Insert content under an expanded row that has no visible children.
    ///
    /// The content is indented one level past the row it annotates.
    pub fn empty_expansion(
        mut self,
        empty_expansion: impl Fn(
            &TableRowContext<'a, T>,
        ) -> Option<Element<'a, Message>>
        + 'a,
    ) -> Self {
        self.empty_expansion = Some(Box::new(empty_expansion));
        self
    }

    /// Set indentation width per nesting level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle area.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the table view.
    pub fn view(self) -> Element<'a, Message> {
        let rows = flatten_table(self.records, self.expansions);

        // Children of an expanded row follow it immediately, so one row
        // of look-ahead decides whether the expansion produced anything.
        let mut child_follows = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let follows = rows
                .get(index + 1)
                .map(|next| next.depth > row.depth)
                .unwrap_or(false);
            child_follows.push(follows);
        }

        let mut column = Column::new().spacing(self.spacing);

        for (entry, has_visible_children) in
            rows.into_iter().zip(child_follows)
        {
            let is_hovered = self
                .hovered
                .map(|key| key == &entry.key)
                .unwrap_or(false);
            let key = entry.key.clone();
            let context = TableRowContext {
                row: entry,
                is_hovered,
                has_visible_children,
            };

            let content = (self.render_row)(&context);
            let content = wrap_mouse_area(
                content,
                self.on_press.as_deref(),
                self.on_hover.as_deref(),
                &key,
            );

            let mut row = Row::new().spacing(0.0);

            if self.indent_width > 0.0 {
                let indent = context.row.depth as f32 * self.indent_width;
                if indent > 0.0 {
                    row = row.push(Space::new().width(Length::Fixed(indent)));
                }
            }

            if self.toggle_width > 0.0 || self.toggle_content.is_some() {
                row = row.push(build_toggle_slot(&context, &self, &key));
            }

            row = row.push(content);

            let mut row_element: Element<'a, Message> = row.into();

            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                row_element =
                    container(row_element).style(move |_| style).into();
            }

            column = column.push(row_element);

            if context.row.expanded && !context.has_visible_children {
                if let Some(ref empty_expansion) = self.empty_expansion {
                    if let Some(extra) = empty_expansion(&context) {
                        column = column.push(indent_extra(
                            extra,
                            context.row.depth + 1,
                            self.indent_width,
                            self.toggle_width,
                        ));
                    }
                }
            }
        }

        column.into()
    }
}

fn wrap_mouse_area<'a, Id, Message>(
    element: Element<'a, Message>,
    on_press: Option<&(dyn Fn(RowKey<Id>) -> Message + 'a)>,
    on_hover: Option<&(dyn Fn(Option<RowKey<Id>>) -> Message + 'a)>,
    key: &RowKey<Id>,
) -> Element<'a, Message>
where
    Id: Clone + 'a,
    Message: Clone + 'a,
{
    if on_press.is_none() && on_hover.is_none() {
        return element;
    }

    let mut area = mouse_area(element);

    if let Some(on_press) = on_press {
        area = area.on_press(on_press(key.clone()));
    }

    if let Some(on_hover) = on_hover {
        area = area
            .on_enter(on_hover(Some(key.clone())))
            .on_exit(on_hover(None));
    }

    area.interaction(mouse::Interaction::Pointer).into()
}

fn build_toggle_slot<'a, T, Message>(
    context: &TableRowContext<'a, T>,
    view: &TableView<'a, T, Message>,
    key: &RowKey<T::Id>,
) -> Element<'a, Message>
where
    T: TableRecord + 'a,
    Message: Clone + 'a,
{
    let width = view.toggle_width.max(0.0);
    let content = view
        .toggle_content
        .as_ref()
        .map(|toggle| toggle(context))
        .unwrap_or_else(|| Space::new().into());

    let content = container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into();

    let on_toggle = view.on_toggle.as_deref().or(view.on_press.as_deref());
    wrap_mouse_area(content, on_toggle, view.on_hover.as_deref(), key)
}

fn indent_extra<'a, Message: Clone + 'a>(
    extra: Element<'a, Message>,
    depth: usize,
    indent_width: f32,
    toggle_width: f32,
) -> Element<'a, Message> {
    let indent = depth as f32 * indent_width + toggle_width;
    if indent <= 0.0 {
        return extra;
    }

    Row::new()
        .spacing(0.0)
        .push(Space::new().width(Length::Fixed(indent)))
        .push(extra)
        .into()
}
