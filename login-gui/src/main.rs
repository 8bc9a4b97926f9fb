#![windows_subsystem = "windows"]

use std::error::Error;

use iced::{Settings, Size};
use tracing::{error, info};

use login_gui::{
    app::App,
    args::{args_to_config, parse_args},
    logger::{parse_log_level, setup_logger},
    VERSION,
};
use login_ui::{component::text, font};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let config = args_to_config(&args)?;

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level)?;
    info!("login-gui {}", VERSION);

    let settings = Settings {
        id: Some("login-gui".to_string()),
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 520.0,
            height: 640.0,
        },
        min_size: Some(Size {
            width: 360.0,
            height: 520.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}
