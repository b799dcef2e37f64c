//! Color theme for the TUI.
//!
//! Dark and light themes built from a Tailwind CSS slate palette with a blue
//! accent for the active page.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub info: Color,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,

    // Pager controls
    pub page: Style,
    pub page_active: Style,
    pub page_disabled: Style,
    pub nav_button: Style,
    pub total: Style,

    // Jump input
    pub input: Style,
    pub input_focused: Style,
    pub input_cursor: Style,

    // Record list
    pub record: Style,
    pub record_index: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Accent colors (Tailwind CSS)
        let blue_400 = Color::Rgb(96, 165, 250);
        let blue_600 = Color::Rgb(37, 99, 235);
        let green_500 = Color::Rgb(34, 197, 94);
        let yellow_500 = Color::Rgb(234, 179, 8);
        let amber_500 = Color::Rgb(245, 158, 11);

        Self {
            variant: ThemeVariant::Dark,
            background: slate_900,
            foreground: slate_100,
            muted: slate_500,

            success: green_500,
            warning: yellow_500,
            info: blue_400,

            border: Style::new().fg(slate_600),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),

            header: Style::new().bg(slate_800).fg(slate_100),
            footer: Style::new().bg(slate_800).fg(slate_400),

            page: Style::new().fg(slate_300),
            page_active: Style::new().bg(blue_600).fg(slate_50).add_modifier(Modifier::BOLD),
            page_disabled: Style::new().fg(slate_600),
            nav_button: Style::new().fg(blue_400),
            total: Style::new().fg(amber_500),

            input: Style::new().bg(slate_800).fg(slate_300),
            input_focused: Style::new().bg(slate_700).fg(slate_50),
            input_cursor: Style::new().add_modifier(Modifier::REVERSED),

            record: Style::new().fg(slate_100),
            record_index: Style::new().fg(slate_500),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Accent colors (Tailwind CSS - darker variants for light theme)
        let blue_600 = Color::Rgb(37, 99, 235);
        let blue_700 = Color::Rgb(29, 78, 216);
        let green_600 = Color::Rgb(22, 163, 74);
        let yellow_600 = Color::Rgb(202, 138, 4);
        let amber_600 = Color::Rgb(217, 119, 6);

        Self {
            variant: ThemeVariant::Light,
            background: slate_50,
            foreground: slate_900,
            muted: slate_500,

            success: green_600,
            warning: yellow_600,
            info: blue_600,

            border: Style::new().fg(slate_400),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),

            header: Style::new().bg(slate_100).fg(slate_800),
            footer: Style::new().bg(slate_100).fg(slate_600),

            page: Style::new().fg(slate_700),
            page_active: Style::new().bg(blue_600).fg(slate_50).add_modifier(Modifier::BOLD),
            page_disabled: Style::new().fg(slate_400),
            nav_button: Style::new().fg(blue_700),
            total: Style::new().fg(amber_600),

            input: Style::new().bg(slate_100).fg(slate_700),
            input_focused: Style::new().bg(slate_200).fg(slate_900),
            input_cursor: Style::new().add_modifier(Modifier::REVERSED),

            record: Style::new().fg(slate_900),
            record_index: Style::new().fg(slate_500),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::dark();
        assert_eq!(theme.toggle().variant, ThemeVariant::Light);
        assert_eq!(theme.toggle().toggle().variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("light".parse::<ThemeVariant>().unwrap(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Dark.to_string(), "dark");
    }
}
