use burrow_ui_table::{
    Expansions, RowKey, TableRecord, TableRowContext, TableView, has_children,
};
use iced::widget::{column, container, row, text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
enum Message {
    Toggle(RowKey<u64>),
    Hover(Option<RowKey<u64>>),
}

#[derive(Clone)]
struct Item {
    id: u64,
    parent: Option<u64>,
    title: String,
}

impl Item {
    fn root(id: u64) -> Self {
        Self {
            id,
            parent: None,
            title: format!("Item {id}"),
        }
    }

    fn child(id: u64, parent: u64) -> Self {
        Self {
            id,
            parent: Some(parent),
            title: format!("Item {id}"),
        }
    }
}

impl TableRecord for Item {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn parent(&self) -> Option<u64> {
        self.parent
    }
}

struct AppState {
    items: Vec<Item>,
    expansions: Expansions<u64>,
    hovered: Option<RowKey<u64>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            items: vec![Item::root(1), Item::root(2), Item::root(3)],
            expansions: Expansions::new(),
            hovered: None,
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Toggle(key) => {
            let expanded = state.expansions.toggle(key.clone());
            if expanded && !has_children(&state.items, &key.id) {
                load_children(state, key.id);
            }
        },
        Message::Hover(key) => {
            state.hovered = key;
        },
    }
}

// Stand-in for an async fetch: odd ids produce two children, even ids
// stay empty so the placeholder slot shows up.
fn load_children(state: &mut AppState, parent: u64) {
    if parent % 2 == 0 {
        return;
    }

    let base = parent * 10;
    state.items.push(Item::child(base + 1, parent));
    state.items.push(Item::child(base + 2, parent));
}

fn view(state: &AppState) -> Element<'_, Message> {
    let table = TableView::new(&state.items, &state.expansions, render_row)
        .hovered(state.hovered.as_ref())
        .on_press(Message::Toggle)
        .on_hover(Message::Hover)
        .row_style(row_style)
        .toggle_content(toggle_icon)
        .empty_expansion(empty_expansion)
        .toggle_width(24.0)
        .indent_width(18.0)
        .spacing(0.0)
        .view();

    container(column![text("Drill-down table").size(20), table].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .into()
}

fn render_row<'a>(context: &TableRowContext<'a, Item>) -> Element<'a, Message> {
    let item = context.row.record;
    let label = row![
        text(item.title.as_str()),
        text(format!("#{}", item.id)).size(12),
    ]
    .spacing(8);

    container(label).padding([4, 8]).width(Length::Fill).into()
}

fn row_style(context: &TableRowContext<'_, Item>) -> container::Style {
    let background = if context.is_hovered {
        Some(Color::from_rgb(0.18, 0.18, 0.18).into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(Color::from_rgb(0.9, 0.9, 0.9)),
        ..Default::default()
    }
}

fn toggle_icon<'a>(context: &TableRowContext<'a, Item>) -> Element<'a, Message> {
    let label = if context.row.expanded { "[-]" } else { "[+]" };
    text(label).into()
}

fn empty_expansion<'a>(
    _context: &TableRowContext<'a, Item>,
) -> Option<Element<'a, Message>> {
    Some(
        container(text("No nested items").size(12))
            .padding([4, 8])
            .into(),
    )
}

fn main() -> iced::Result {
    iced::run(update, view)
}
