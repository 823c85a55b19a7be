use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme, alignment};

use crate::app::config::AppConfig;
use crate::features::Feature;
use crate::features::records::{
    ApiClient, LoadPhase, RecordsCtx, RecordsEvent, RecordsFeature,
};
use crate::theme::{ThemeManager, ThemeProps};
use crate::ui::widgets::records_table::{
    self, RecordsTableEvent, RecordsTableProps,
};
use crate::ui::widgets::status_line::{
    self, StatusLineEvent, StatusLineProps,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
const NOTICE_FONT_SIZE: f32 = 14.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    IcedReady,
    Records(RecordsEvent),
    Table(RecordsTableEvent),
    Status(StatusLineEvent),
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    api: ApiClient,
    records: RecordsFeature,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let config = AppConfig::from_env();
        let api =
            ApiClient::new(&config).expect("failed to initialize http client");

        let app = App {
            theme_manager: ThemeManager::new(),
            api,
            records: RecordsFeature::new(),
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        String::from("Burrow")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::IcedReady => self.reduce_records(RecordsEvent::Refresh),
            Event::Records(event) => self.reduce_records(event),
            Event::Table(event) => self.handle_table(event),
            Event::Status(event) => self.handle_status(event),
        }
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        let theme = self.theme_manager.current();
        let theme_props = ThemeProps::new(theme);

        let header = status_line::view(StatusLineProps {
            phase: self.records.phase(),
            total_records: self.records.records().len(),
            expanded_rows: self.records.expansions().len(),
            theme: theme_props,
        })
        .map(Event::Status);

        let body = match self.records.phase() {
            LoadPhase::Loading => {
                build_phase_notice("Loading records…", theme_props, false)
            },
            LoadPhase::Failed { message } => {
                build_phase_notice(message, theme_props, true)
            },
            LoadPhase::Ready => records_table::view(RecordsTableProps {
                records: self.records.records(),
                expansions: self.records.expansions(),
                hovered: self.records.hovered_key(),
                fetching: self.records.fetching(),
                theme: theme_props,
            })
            .map(Event::Table),
        };

        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn handle_table(&mut self, event: RecordsTableEvent) -> Task<Event> {
        match event {
            RecordsTableEvent::Toggled(key) => {
                self.reduce_records(RecordsEvent::RowPressed { key })
            },
            RecordsTableEvent::Hovered(key) => {
                self.reduce_records(RecordsEvent::RowHovered { key })
            },
        }
    }

    fn handle_status(&mut self, event: StatusLineEvent) -> Task<Event> {
        match event {
            StatusLineEvent::RefreshPressed => {
                self.reduce_records(RecordsEvent::Refresh)
            },
        }
    }

    fn reduce_records(&mut self, event: RecordsEvent) -> Task<Event> {
        let ctx = RecordsCtx { api: &self.api };
        self.records.reduce(event, &ctx)
    }
}

fn build_phase_notice<'a>(
    message: &'a str,
    theme: ThemeProps<'a>,
    is_error: bool,
) -> Element<'a, Event> {
    let palette = theme.theme.iced_palette();
    let color = if is_error {
        palette.red
    } else {
        palette.dim_foreground
    };

    let notice = text(message).size(NOTICE_FONT_SIZE).style(move |_| {
        iced::widget::text::Style { color: Some(color) }
    });

    container(notice)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
