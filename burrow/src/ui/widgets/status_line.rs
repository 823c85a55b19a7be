use iced::alignment;
use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::features::records::LoadPhase;
use crate::theme::{IcedColorPalette, ThemeProps};

const BAR_HEIGHT: f32 = 32.0;
const BAR_PADDING_X: f32 = 12.0;
const BAR_SPACING: f32 = 10.0;
const LABEL_FONT_SIZE: f32 = 12.0;

const BUTTON_HEIGHT: f32 = 22.0;
const BUTTON_PADDING_X: f32 = 10.0;

/// UI events emitted by the status line.
#[derive(Debug, Clone)]
pub(crate) enum StatusLineEvent {
    RefreshPressed,
}

/// Props for rendering the records status line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusLineProps<'a> {
    pub(crate) phase: &'a LoadPhase,
    pub(crate) total_records: usize,
    pub(crate) expanded_rows: usize,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the status line with a dataset summary and a refresh action.
pub(crate) fn view<'a>(
    props: StatusLineProps<'a>,
) -> Element<'a, StatusLineEvent> {
    let palette = props.theme.theme.iced_palette();

    let name_label = text("RECORDS")
        .size(LABEL_FONT_SIZE)
        .wrapping(Wrapping::None);

    let summary = phase_summary(props, palette);
    let refresh = refresh_button(props.theme);

    let content = row![name_label, summary, refresh]
        .spacing(BAR_SPACING)
        .align_y(alignment::Vertical::Center);

    let background = palette.overlay;
    let text_color = palette.foreground;

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            ..Default::default()
        })
        .into()
}

fn phase_summary<'a>(
    props: StatusLineProps<'a>,
    palette: &'a IcedColorPalette,
) -> Element<'a, StatusLineEvent> {
    let (label, color) = match props.phase {
        LoadPhase::Loading => {
            (String::from("Loading…"), palette.dim_foreground)
        },
        LoadPhase::Ready => (
            format!(
                "{} records, {} expanded",
                props.total_records, props.expanded_rows
            ),
            palette.dim_foreground,
        ),
        LoadPhase::Failed { message } => (message.clone(), palette.red),
    };

    text(label)
        .size(LABEL_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}

fn refresh_button<'a>(theme: ThemeProps<'a>) -> Element<'a, StatusLineEvent> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(
        text("Refresh")
            .size(LABEL_FONT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, BUTTON_PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_, status| refresh_button_style(&palette, status))
        .on_press(StatusLineEvent::RefreshPressed)
        .into()
}

fn refresh_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let (background, text_color) = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            (palette.dim_blue, palette.dim_black)
        },
        _ => (palette.dim_black, palette.foreground),
    };

    iced::widget::button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::refresh_button_style;

    #[test]
    fn given_hovered_status_when_building_style_then_uses_hover_colors() {
        let theme = crate::theme::AppTheme::default();
        let palette = theme.iced_palette();

        let style = refresh_button_style(palette, ButtonStatus::Hovered);

        assert_eq!(style.text_color, palette.dim_black);
        assert_eq!(style.background, Some(Background::Color(palette.dim_blue)));
    }

    #[test]
    fn given_active_status_when_building_style_then_uses_idle_colors() {
        let theme = crate::theme::AppTheme::default();
        let palette = theme.iced_palette();

        let style = refresh_button_style(palette, ButtonStatus::Active);

        assert_eq!(style.text_color, palette.foreground);
        assert_eq!(
            style.background,
            Some(Background::Color(palette.dim_black))
        );
    }
}
