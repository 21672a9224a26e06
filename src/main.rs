mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::config::{ensure_webview_data_dir, AppConfig};

fn main() {
    let config = AppConfig::from_env().expect("should resolve application config");
    dioxus::logger::init(config.log_level).expect("should initialize logger");
    tracing::info!(
        db_path = %config.db_path.display(),
        page_size = config.page_size,
        "starting product table"
    );

    let webview_data_dir = ensure_webview_data_dir(&config.webview_data_dir)
        .expect("should resolve and create webview data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Products"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(app::App);
}
