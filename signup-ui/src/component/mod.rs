pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// A bordered white card wrapping the given content.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::card::simple)
}
