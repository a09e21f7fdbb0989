use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    let style = button(&theme.colors.buttons.link, status);
    Style {
        border: Border::default(),
        ..style
    }
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: 8.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 8.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => {
            if let Some(pressed) = p.pressed {
                style(&pressed)
            } else {
                style(&p.hovered)
            }
        }
        Status::Disabled => {
            let disabled = style(&p.disabled.unwrap_or(p.active));
            Style {
                text_color: Color {
                    a: 0.7,
                    ..disabled.text_color
                },
                ..disabled
            }
        }
    }
}
