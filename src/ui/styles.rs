use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::ui_state::NotificationKind;

// Zen Theme Colors
pub const ZEN_BG: Color = Color::from_rgb(0.992, 0.988, 0.973); // #FDFCF8
pub const ZEN_SURFACE: Color = Color::from_rgb(0.949, 0.937, 0.914); // #F2EFE9
pub const ZEN_TEXT: Color = Color::from_rgb(0.29, 0.29, 0.29); // #4A4A4A
pub const ZEN_SUBTEXT: Color = Color::from_rgb(0.55, 0.55, 0.55); // #8C8C8C
pub const ZEN_ACCENT: Color = Color::from_rgb(0.545, 0.616, 0.467); // #8B9D77 (Sage)
pub const ZEN_ACCENT_HOVER: Color = Color::from_rgb(0.49, 0.56, 0.41);
pub const ZEN_DESTRUCTIVE: Color = Color::from_rgb(0.831, 0.647, 0.647); // #D4A5A5
pub const ZEN_ERROR: Color = Color::from_rgb(0.70, 0.33, 0.33);

/// Segmented toggle (Month/Week); the active side is raised.
pub struct ToggleStyle {
    pub active: bool,
}

impl button::StyleSheet for ToggleStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        if self.active {
            button::Appearance {
                background: Some(Background::Color(Color::WHITE)),
                text_color: ZEN_ACCENT,
                border: Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
                ..Default::default()
            }
        } else {
            button::Appearance {
                background: None,
                text_color: ZEN_SUBTEXT,
                ..Default::default()
            }
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        if self.active {
            return self.active(style);
        }
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.03))),
            text_color: ZEN_TEXT,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
}

/// Flat text-like button used for navigation arrows and links.
pub struct GhostButtonStyle;
impl button::StyleSheet for GhostButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: ZEN_TEXT,
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.04))),
            text_color: ZEN_TEXT,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
    fn disabled(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: ZEN_SUBTEXT,
            ..Default::default()
        }
    }
}

/// Right-hand panel holding the open dialog.
pub struct PanelStyle;
impl container::StyleSheet for PanelStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(ZEN_SURFACE)),
            border: Border {
                width: 1.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct BackgroundStyle;
impl container::StyleSheet for BackgroundStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(ZEN_BG)),
            ..Default::default()
        }
    }
}

pub struct CardStyle;
impl container::StyleSheet for CardStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.03),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.02),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        }
    }
}

/// One day of the grid. Days outside the displayed month are dimmed.
pub struct DayCellStyle {
    pub in_period: bool,
    pub selected: bool,
    pub today: bool,
}

impl DayCellStyle {
    fn appearance(&self, hovered: bool) -> button::Appearance {
        let background = match (self.selected, self.in_period) {
            (true, _) => Color::from_rgba(0.545, 0.616, 0.467, 0.15),
            (false, true) => Color::WHITE,
            (false, false) => ZEN_SURFACE,
        };
        let background = if hovered && !self.selected {
            Color::from_rgba(0.545, 0.616, 0.467, 0.08)
        } else {
            background
        };
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color: if self.in_period { ZEN_TEXT } else { ZEN_SUBTEXT },
            border: Border {
                radius: 4.0.into(),
                width: if self.today { 2.0 } else { 1.0 },
                color: if self.today {
                    ZEN_ACCENT
                } else {
                    Color::from_rgba(0.0, 0.0, 0.0, 0.06)
                },
            },
            ..Default::default()
        }
    }
}

impl button::StyleSheet for DayCellStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        self.appearance(false)
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        self.appearance(true)
    }
    fn pressed(&self, _style: &Self::Style) -> button::Appearance {
        self.appearance(true)
    }
}

/// Event chip filled with the event's display color.
pub struct ChipStyle(pub Color);
impl button::StyleSheet for ChipStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.0)),
            text_color: Color::WHITE,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            ..self.active(style)
        }
    }
}

/// Notification banner at the top of the page.
pub struct BannerStyle(pub NotificationKind);
impl container::StyleSheet for BannerStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (background, text) = match self.0 {
            NotificationKind::Success => (Color::from_rgba(0.545, 0.616, 0.467, 0.2), ZEN_ACCENT_HOVER),
            NotificationKind::Error => (Color::from_rgba(0.831, 0.647, 0.647, 0.3), ZEN_ERROR),
        };
        container::Appearance {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct InputStyle;
impl text_input::StyleSheet for InputStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::WHITE),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            },
            icon_color: ZEN_SUBTEXT,
        }
    }
    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: ZEN_ACCENT,
                ..active.border
            },
            icon_color: ZEN_ACCENT,
            ..active
        }
    }
    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.0, 0.0, 0.0, 0.3)
    }
    fn value_color(&self, _style: &Self::Style) -> Color {
        ZEN_TEXT
    }
    fn disabled_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.0, 0.0, 0.0, 0.3)
    }
    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.545, 0.616, 0.467, 0.2)
    }
    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }
}

pub struct PrimaryButtonStyle;
impl button::StyleSheet for PrimaryButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ZEN_ACCENT)),
            text_color: Color::WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ZEN_ACCENT_HOVER)),
            ..self.active(style)
        }
    }
    fn disabled(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.8, 0.8, 0.8))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct DestructiveButtonStyle;
impl button::StyleSheet for DestructiveButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: ZEN_DESTRUCTIVE,
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: ZEN_DESTRUCTIVE,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ZEN_DESTRUCTIVE)),
            text_color: Color::WHITE,
            ..self.active(style)
        }
    }
    // Shown while a delete is in flight
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: ZEN_SUBTEXT,
            ..self.active(style)
        }
    }
}
