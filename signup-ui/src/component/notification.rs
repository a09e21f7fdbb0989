use iced::{widget::container::Style, Length};

use crate::{
    component::text::{p1_bold, p2_regular},
    theme::{self, Theme},
    widget::*,
};

const TOAST_WIDTH: f32 = 360.0;

fn toast<'a, T: 'a + Clone>(
    title: &'a str,
    description: &'a str,
    style: fn(&Theme) -> Style,
    on_dismiss: T,
) -> Button<'a, T> {
    Button::new(
        Container::new(
            Column::new()
                .spacing(5)
                .push(p1_bold(title))
                .push(p2_regular(description)),
        )
        .padding(15)
        .width(Length::Fill)
        .style(style),
    )
    .padding(0)
    .width(Length::Fixed(TOAST_WIDTH))
    .style(theme::button::transparent)
    .on_press(on_dismiss)
}

/// A neutral toast, dismissed by clicking on it.
pub fn default<'a, T: 'a + Clone>(
    title: &'a str,
    description: &'a str,
    on_dismiss: T,
) -> Button<'a, T> {
    toast(title, description, theme::notification::default, on_dismiss)
}

/// A toast reporting a failure, dismissed by clicking on it.
pub fn destructive<'a, T: 'a + Clone>(
    title: &'a str,
    description: &'a str,
    on_dismiss: T,
) -> Button<'a, T> {
    toast(title, description, theme::notification::destructive, on_dismiss)
}
