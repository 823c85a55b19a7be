use std::collections::HashSet;

use burrow_ui_table::{Expansions, RowKey, TableRowContext, TableView};
use iced::alignment;
use iced::widget::text::Wrapping;
use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Background, Element, Length};

use crate::features::records::Record;
use crate::theme::{IcedColorPalette, ThemeProps};

const HEADER_HEIGHT: f32 = 28.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const HEADER_RULE_HEIGHT: f32 = 1.0;

const ROW_HEIGHT: f32 = 26.0;
const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING_X: f32 = 8.0;
const CELL_SPACING: f32 = 10.0;

const ID_COLUMN_WIDTH: f32 = 64.0;
const TITLE_COLUMN_PORTION: u16 = 2;
const BODY_COLUMN_PORTION: u16 = 3;

const INDENT_WIDTH: f32 = 16.0;
const TOGGLE_WIDTH: f32 = 18.0;

const PLACEHOLDER_FONT_SIZE: f32 = 12.0;
const PLACEHOLDER_PADDING_Y: f32 = 4.0;

/// UI events emitted by the records table.
#[derive(Debug, Clone)]
pub(crate) enum RecordsTableEvent {
    Toggled(RowKey<u64>),
    Hovered(Option<RowKey<u64>>),
}

/// Props for rendering the drill-down records table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordsTableProps<'a> {
    pub(crate) records: &'a [Record],
    pub(crate) expansions: &'a Expansions<u64>,
    pub(crate) hovered: Option<&'a RowKey<u64>>,
    pub(crate) fetching: &'a HashSet<u64>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the records table with a fixed header and scrollable rows.
pub(crate) fn view<'a>(
    props: RecordsTableProps<'a>,
) -> Element<'a, RecordsTableEvent> {
    let palette = props.theme.theme.iced_palette();
    let fetching = props.fetching;

    let table = TableView::new(props.records, props.expansions, move |ctx| {
        record_cells(ctx, palette)
    })
    .hovered(props.hovered)
    .on_press(RecordsTableEvent::Toggled)
    .on_hover(RecordsTableEvent::Hovered)
    .toggle_content(move |ctx| toggle_icon(ctx, palette))
    .empty_expansion(move |ctx| expansion_placeholder(ctx, fetching, palette))
    .row_style(move |ctx| record_row_style(palette, ctx.is_hovered))
    .indent_width(INDENT_WIDTH)
    .toggle_width(TOGGLE_WIDTH)
    .view();

    let scroller_fallback = palette.dim_foreground;
    let body = scrollable::Scrollable::new(table)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(move |theme, status| {
            let mut style = scrollable::default(theme, status);
            let radius = iced::border::Radius::from(0.0);

            style.vertical_rail.border.radius = radius;
            style.vertical_rail.scroller.border.radius = radius;
            style.horizontal_rail.border.radius = radius;
            style.horizontal_rail.scroller.border.radius = radius;

            let mut scroller_color =
                match style.vertical_rail.scroller.background {
                    Background::Color(color) => color,
                    _ => scroller_fallback,
                };
            scroller_color.a = (scroller_color.a * 0.7).min(1.0);
            style.vertical_rail.scroller.background =
                Background::Color(scroller_color);
            style.horizontal_rail.scroller.background =
                Background::Color(scroller_color);

            style
        });

    column![header_row(palette), header_rule(palette), body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header_row<'a>(
    palette: &'a IcedColorPalette,
) -> Element<'a, RecordsTableEvent> {
    let label_color = palette.dim_foreground;

    let id_label = text("ID")
        .size(HEADER_FONT_SIZE)
        .width(Length::Fixed(ID_COLUMN_WIDTH))
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style {
            color: Some(label_color),
        });

    let title_label = text("Title")
        .size(HEADER_FONT_SIZE)
        .width(Length::FillPortion(TITLE_COLUMN_PORTION))
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style {
            color: Some(label_color),
        });

    let body_label = text("Body")
        .size(HEADER_FONT_SIZE)
        .width(Length::FillPortion(BODY_COLUMN_PORTION))
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style {
            color: Some(label_color),
        });

    let content = row![
        Space::new().width(Length::Fixed(TOGGLE_WIDTH)),
        id_label,
        title_label,
        body_label,
    ]
    .spacing(CELL_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn header_rule<'a>(
    palette: &'a IcedColorPalette,
) -> Element<'a, RecordsTableEvent> {
    let rule_color = palette.bright_black;

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_RULE_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(rule_color.into()),
            ..Default::default()
        })
        .into()
}

fn record_cells<'a>(
    ctx: &TableRowContext<'a, Record>,
    palette: &'a IcedColorPalette,
) -> Element<'a, RecordsTableEvent> {
    let record = ctx.row.record;
    let dim_color = palette.dim_foreground;

    let id_cell = text(record.id().to_string())
        .size(ROW_FONT_SIZE)
        .width(Length::Fixed(ID_COLUMN_WIDTH))
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style {
            color: Some(dim_color),
        });

    let title_cell = text(record.title())
        .size(ROW_FONT_SIZE)
        .width(Length::FillPortion(TITLE_COLUMN_PORTION))
        .wrapping(Wrapping::None);

    let body_cell = text(record.body())
        .size(ROW_FONT_SIZE)
        .width(Length::FillPortion(BODY_COLUMN_PORTION))
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style {
            color: Some(dim_color),
        });

    let content = row![id_cell, title_cell, body_cell]
        .spacing(CELL_SPACING)
        .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn toggle_icon<'a>(
    ctx: &TableRowContext<'a, Record>,
    palette: &'a IcedColorPalette,
) -> Element<'a, RecordsTableEvent> {
    let (glyph, color) = if ctx.row.expanded {
        ("▾", palette.blue)
    } else {
        ("▸", palette.dim_foreground)
    };

    text(glyph)
        .size(ROW_FONT_SIZE)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}

fn expansion_placeholder<'a>(
    ctx: &TableRowContext<'a, Record>,
    fetching: &'a HashSet<u64>,
    palette: &'a IcedColorPalette,
) -> Option<Element<'a, RecordsTableEvent>> {
    let label = if fetching.contains(&ctx.row.key.id) {
        "Loading records…"
    } else {
        "No nested records"
    };
    let label_color = palette.dim_foreground;

    let placeholder = text(label)
        .size(PLACEHOLDER_FONT_SIZE)
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style {
            color: Some(label_color),
        });

    Some(
        container(placeholder)
            .padding([PLACEHOLDER_PADDING_Y, ROW_PADDING_X])
            .into(),
    )
}

fn record_row_style(
    palette: &IcedColorPalette,
    is_hovered: bool,
) -> iced::widget::container::Style {
    let background = if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    iced::widget::container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}
