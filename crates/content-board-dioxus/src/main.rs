use content_board_config::{Config, DEFAULT_WINDOW_TITLE};
use dioxus::prelude::*;

mod ui;

use ui::App;
use ui::components::ErrorScreen;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("content-board starting up!");
    log::info!("Config path: {}", Config::config_path().display());

    let window_title = match Config::load_or_default() {
        Ok(config) => config.window_title,
        Err(e) => {
            // app_root reports the error on screen
            log::error!("Config load failed: {e}");
            DEFAULT_WINDOW_TITLE.to_string()
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config(&window_title))
        .launch(app_root);
}

fn app_root() -> Element {
    match Config::load_or_default() {
        Ok(config) => {
            log::info!(
                "Starting with {} board, new items default to {}",
                if config.load_demo_content { "demo" } else { "empty" },
                config.new_item_kind
            );
            rsx! {
                App {
                    initial_board: config.initial_board(),
                    title: config.window_title.clone(),
                    new_item_kind: config.new_item_kind
                }
            }
        }
        Err(e) => rsx! {
            ErrorScreen {
                title: "Configuration error".to_string(),
                message: format!("Fix or remove {}", Config::config_path().display()),
                details: Some(e.to_string())
            }
        },
    }
}

fn make_window_config(title: &str) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false);

    Config::default().with_window(window)
}
