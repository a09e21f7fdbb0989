use std::time::Duration;

use iced::{
    alignment::{Horizontal, Vertical},
    Length,
};
use signup_ui::{component::notification, widget::*};

/// How long a toast stays on screen if not dismissed.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub variant: Variant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(variant: Variant, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: usize,
    pub notification: Notification,
}

/// Toasts currently displayed, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: usize,
    list: Vec<Toast>,
}

impl Toasts {
    /// Displays the notification and returns the id of its toast.
    pub fn push(&mut self, notification: Notification) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        match notification.variant {
            Variant::Default => tracing::info!(
                "{}: {}",
                notification.title,
                notification.description
            ),
            Variant::Destructive => tracing::warn!(
                "{}: {}",
                notification.title,
                notification.description
            ),
        }
        self.list.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: usize) {
        self.list.retain(|t| t.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.list.iter()
    }

    /// Toasts stacked in the bottom right corner of the window.
    pub fn view<'a, M: Clone + 'a>(&'a self, on_dismiss: fn(usize) -> M) -> Element<'a, M> {
        Container::new(self.list.iter().fold(Column::new().spacing(10), |col, toast| {
            let Notification {
                variant,
                title,
                description,
            } = &toast.notification;
            col.push(match variant {
                Variant::Default => notification::default(title, description, on_dismiss(toast.id)),
                Variant::Destructive => {
                    notification::destructive(title, description, on_dismiss(toast.id))
                }
            })
        }))
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
    }
}

/// Resolves with the toast id once it should be dismissed.
pub async fn expire(id: usize) -> usize {
    tokio::time::sleep(TOAST_DURATION).await;
    id
}
