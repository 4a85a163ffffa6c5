//! Theme system

use ratatui::style::Color;

/// Two-color palette for one proportion chart: the solved arc and the
/// remaining arc share the same dark base across all difficulties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicePalette {
    pub solved: Color,
    pub remaining: Color,
}

const BASE_DARK: Color = Color::Rgb(31, 41, 55);

/// Complete color palette for TUI rendering
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    // Backgrounds
    pub bg_primary: Color,

    // Borders
    pub border_default: Color,
    pub border_focus: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status
    pub error: Color,
    pub info: Color,

    // Accents
    pub accent_purple: Color,
    pub accent_blue: Color,
}

impl ThemeColors {
    /// Default theme
    pub const DEFAULT: Self = Self {
        bg_primary: Color::Rgb(17, 24, 39),

        border_default: Color::Rgb(75, 85, 99),
        border_focus: Color::Rgb(168, 85, 247),

        text_primary: Color::Rgb(243, 244, 246),
        text_secondary: Color::Rgb(229, 231, 235),
        text_muted: Color::Rgb(156, 163, 175),

        error: Color::Rgb(248, 113, 113),
        info: Color::Rgb(156, 163, 175),

        accent_purple: Color::Rgb(192, 132, 252),
        accent_blue: Color::Rgb(96, 165, 250),
    };

    /// Easy chart palette (green on dark)
    #[inline]
    pub const fn easy(&self) -> SlicePalette {
        SlicePalette {
            solved: Color::Rgb(52, 211, 153),
            remaining: BASE_DARK,
        }
    }

    /// Medium chart palette (amber on dark)
    #[inline]
    pub const fn medium(&self) -> SlicePalette {
        SlicePalette {
            solved: Color::Rgb(251, 191, 36),
            remaining: BASE_DARK,
        }
    }

    /// Hard chart palette (red on dark)
    #[inline]
    pub const fn hard(&self) -> SlicePalette {
        SlicePalette {
            solved: Color::Rgb(239, 68, 68),
            remaining: BASE_DARK,
        }
    }

    #[inline]
    pub const fn palette(&self, difficulty: crate::stats::Difficulty) -> SlicePalette {
        match difficulty {
            crate::stats::Difficulty::Easy => self.easy(),
            crate::stats::Difficulty::Medium => self.medium(),
            crate::stats::Difficulty::Hard => self.hard(),
        }
    }
}

/// Theme container providing access to color palette
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl Theme {
    #[inline]
    pub const fn colors(&self) -> ThemeColors {
        ThemeColors::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Difficulty;

    #[test]
    fn test_theme_background() {
        let colors = ThemeColors::DEFAULT;
        assert_eq!(colors.bg_primary, Color::Rgb(17, 24, 39));
    }

    #[test]
    fn test_palettes_share_dark_base() {
        let colors = ThemeColors::DEFAULT;
        for d in Difficulty::ALL {
            assert_eq!(colors.palette(d).remaining, BASE_DARK);
        }
        assert_ne!(colors.easy().solved, colors.hard().solved);
    }
}
