#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::error;

use signup_ui::{component::text, font, theme};

use signup_gui::{
    args::{self, parse_args},
    dir::SignupDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let args = parse_args(std::env::args().collect(), VERSION)?;
    let signup_directory = match args::datadir(&args) {
        Some(datadir) => datadir,
        None => SignupDirectory::new_default()?,
    };
    let config = Config::new(signup_directory, args::api_url(&args));
    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("BranchSignup".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 1100.0,
            height: 800.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 800.0,
            height: 650.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
