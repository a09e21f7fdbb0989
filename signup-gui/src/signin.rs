use iced::{Alignment, Length, Task};

use signup_ui::{
    component::{button, card, text::*},
    theme,
    widget::*,
};

use crate::gui::Route;

#[derive(Debug, Clone)]
pub enum Message {
    OpenApp,
    StartTrial,
    /// Handled by the caller, which owns the routes.
    Navigate(Route),
}

/// Landing page of accounts that already exist: sign in happens in the web application.
pub struct SignIn {
    app_url: String,
    error: Option<String>,
}

impl SignIn {
    pub fn new(app_url: String) -> Self {
        Self {
            app_url,
            error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenApp => {
                if let Err(e) = open::that_detached(&self.app_url) {
                    tracing::error!("Error opening '{}': {}", self.app_url, e);
                    self.error = Some(format!("Failed to open {}", self.app_url));
                } else {
                    self.error = None;
                }
                Task::none()
            }
            Message::StartTrial => Task::done(Message::Navigate(Route::Signup)),
            Message::Navigate(_) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        Container::new(
            card(
                Column::new()
                    .spacing(20)
                    .align_x(Alignment::Center)
                    .push(h2("Sign in"))
                    .push(
                        p1_regular("Sign in to your account from the web application.")
                            .style(theme::text::secondary),
                    )
                    .push(p2_regular(&self.app_url).style(theme::text::accent))
                    .push_maybe(
                        self.error
                            .as_ref()
                            .map(|e| caption(e).style(theme::text::error)),
                    )
                    .push(
                        button::primary("Open web app")
                            .width(Length::Fill)
                            .padding(10)
                            .on_press(Message::OpenApp),
                    )
                    .push(
                        button::secondary("Start free trial")
                            .width(Length::Fill)
                            .padding(10)
                            .on_press(Message::StartTrial),
                    ),
            )
            .padding(40)
            .max_width(480.0),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::background)
        .into()
    }
}
