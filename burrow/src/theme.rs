use iced::theme::Palette;
use iced::{Color, Theme};

/// Palette of pre-resolved colors used by widget styling.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) bright_black: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
}

impl Default for IcedColorPalette {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb8(0xC0, 0xC5, 0xCE),
            background: Color::from_rgb8(0x16, 0x18, 0x22),
            red: Color::from_rgb8(0xE0, 0x6C, 0x75),
            green: Color::from_rgb8(0x98, 0xC3, 0x79),
            yellow: Color::from_rgb8(0xE5, 0xC0, 0x7B),
            blue: Color::from_rgb8(0x4F, 0xA6, 0xED),
            bright_black: Color::from_rgb8(0x4F, 0x56, 0x66),
            dim_black: Color::from_rgb8(0x0F, 0x11, 0x15),
            dim_blue: Color::from_rgb8(0x2F, 0x63, 0x8F),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            overlay: Color::from_rgb8(0x23, 0x25, 0x30),
        }
    }
}

/// Global application theme shared across widgets.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.background,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from App down to widgets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}
