use iced::widget::text_input;
use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            valid: true,
        }
    }
}

/// Returns true if `value` only holds ASCII digits and is at most `max_len` characters long.
pub fn is_digits_within(value: &str, max_len: usize) -> bool {
    value.chars().count() <= max_len && value.chars().all(|c| c.is_ascii_digit())
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: text_input::TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: None,
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that only accepts ASCII digits, up to `max_len` of them.
    /// Any edit producing another value is discarded and the `on_change` function receives the
    /// current value instead.
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - the maximum number of digits
    /// - a function that produces a message when the [`Form`] changes
    pub fn new_digits<F>(
        placeholder: &str,
        value: &Value<String>,
        max_len: usize,
        on_change: F,
    ) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        let current = value.value.clone();
        Self {
            input: text_input::TextInput::new(placeholder, &value.value).on_input(move |s| {
                if is_digits_within(&s, max_len) {
                    on_change(s)
                } else {
                    on_change(current.clone())
                }
            }),
            warning: None,
            valid: value.valid,
        }
    }

    /// Sets the [`Form`] with a warning message
    pub fn warning(mut self, warning: &'a str) -> Self {
        self.warning = Some(warning);
        self
    }

    /// Sets the message produced when the user presses Enter in the [`Form`].
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Sets the widget id of the [`Form`] input, used to focus it.
    pub fn id(mut self, id: text_input::Id) -> Self {
        self.input = self.input.id(id);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
