//! Light/dark theme with a persisted preference

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted flag; unrecognized values fall back to Light
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The flag written to the config store
    pub fn as_config_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                success: Color::Green,
                error: Color::Red,
            },
            Theme::Dark => Palette {
                bg: Color::Black,
                fg: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                success: Color::LightGreen,
                error: Color::LightRed,
            },
        }
    }
}

/// Colors the UI draws with for the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_flag_round_trips() {
        let theme = Theme::from_config(Some("dark"));
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.as_config_str(), "dark");
    }

    #[test]
    fn test_unknown_flag_falls_back_to_light() {
        assert_eq!(Theme::from_config(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_config(None), Theme::Light);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut theme = Theme::Light;
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette().bg, Theme::Dark.palette().bg);
    }
}
