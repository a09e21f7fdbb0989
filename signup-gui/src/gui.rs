use std::sync::Arc;

use iced::{
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous},
    Subscription, Task,
};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use signup_ui::widget::{Element, Stack};

use crate::{
    config::{self, ConfigError, API_URL_ENV},
    dir::SignupDirectory,
    logger::setup_logger,
    notification::{self, Notification, Toasts},
    services::signup::{SignupApi, SignupClient},
    signin::{self, SignIn},
    signup::{self, SignupPanel},
    APP_NAME, VERSION,
};

/// Pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Signup,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::Signup => "/signup",
        }
    }
}

enum Screen {
    Signup(SignupPanel),
    SignIn(SignIn),
}

pub struct GUI {
    settings: config::Config,
    api: Arc<dyn SignupApi>,
    screen: Screen,
    toasts: Toasts,
}

#[derive(Debug, Clone)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    KeyPressed(Key),
    DismissToast(usize),
    Signup(signup::Message),
    SignIn(signin::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

/// Applies the api url overrides to the configuration file content, the command line
/// taking precedence over the environment.
fn resolve_settings(
    file: Result<config::Config, ConfigError>,
    env_api_url: Option<String>,
    cli_api_url: Option<String>,
) -> config::Config {
    file.unwrap_or_else(|e| {
        warn!("Using default configuration: {}", e);
        config::Config::default()
    })
    .with_api_url(env_api_url)
    .with_api_url(cli_api_url)
}

impl GUI {
    pub fn title(&self) -> String {
        format!("{} v{}", APP_NAME, VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        let datadir = &config.signup_directory;
        let datadir_error = if datadir.exists() {
            None
        } else {
            datadir.init().err().map(|e| e.to_string())
        };

        let file = config::Config::load_or_create(&datadir.config_path());
        let log_level = log_level
            .or_else(|| file.as_ref().ok().and_then(|c| c.log_level().ok()))
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, datadir) {
            warn!("Error while setting up the logger: {}", e);
        }
        if let Some(e) = datadir_error {
            error!("Failed to create data directory: {}", e);
        }

        let settings = resolve_settings(
            file,
            std::env::var(API_URL_ENV).ok(),
            config.api_url.clone(),
        );
        let client = SignupClient::new(settings.signup_url());
        info!("Signup endpoint: {}", client.url());
        let api: Arc<dyn SignupApi> = Arc::new(client);

        let (panel, cmd) = SignupPanel::new(api.clone(), settings.company_name.clone());
        (
            Self {
                settings,
                api,
                screen: Screen::Signup(panel),
                toasts: Toasts::default(),
            },
            Task::batch(vec![
                Task::perform(ctrl_c(), |_| Message::CtrlC),
                cmd.map(Message::Signup),
            ]),
        )
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        info!("Navigating to {}", route.path());
        match route {
            Route::SignIn => {
                self.screen = Screen::SignIn(SignIn::new(self.settings.app_url.clone()));
                Task::none()
            }
            Route::Signup => {
                let (panel, cmd) =
                    SignupPanel::new(self.api.clone(), self.settings.company_name.clone());
                self.screen = Screen::Signup(panel);
                cmd.map(Message::Signup)
            }
        }
    }

    fn notify(&mut self, notification: Notification) -> Task<Message> {
        let id = self.toasts.push(notification);
        Task::perform(notification::expire(id), Message::DismissToast)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::KeyPressed(Key::Tab(shift)) => {
                log::debug!("Tab pressed!");
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::Signup(signup::Message::Notify(notification)) => self.notify(notification),
            Message::Signup(signup::Message::Navigate(route))
            | Message::SignIn(signin::Message::Navigate(route)) => self.navigate(route),
            Message::Signup(msg) => {
                if let Screen::Signup(panel) = &mut self.screen {
                    panel.update(msg).map(Message::Signup)
                } else {
                    Task::none()
                }
            }
            Message::SignIn(msg) => {
                if let Screen::SignIn(signin) = &mut self.screen {
                    signin.update(msg).map(Message::SignIn)
                } else {
                    Task::none()
                }
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut vec = vec![event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            _ => None,
        })];
        if let Screen::Signup(panel) = &self.screen {
            vec.push(panel.subscription().map(Message::Signup));
        }
        Subscription::batch(vec)
    }

    pub fn view(&self) -> Element<Message> {
        let content = match &self.screen {
            Screen::Signup(panel) => panel.view().map(Message::Signup),
            Screen::SignIn(signin) => signin.view().map(Message::SignIn),
        };
        if self.toasts.is_empty() {
            content
        } else {
            Stack::new()
                .push(content)
                .push(self.toasts.view(Message::DismissToast))
                .into()
        }
    }
}

pub struct Config {
    pub signup_directory: SignupDirectory,
    /// Api url given on the command line.
    pub api_url: Option<String>,
}

impl Config {
    pub fn new(signup_directory: SignupDirectory, api_url: Option<String>) -> Self {
        Self {
            signup_directory,
            api_url,
        }
    }
}
