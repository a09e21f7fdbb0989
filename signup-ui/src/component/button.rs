use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::secondary)
}

/// Underlined-looking text button, shrinks to its content.
pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t).size(super::text::P2_SIZE)).align_y(Vertical::Center))
        .padding(0)
        .style(theme::button::link)
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
