mod alerts;
mod app;
mod components;
mod dialog;
mod registry;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();

    let window_builder = WindowBuilder::new()
        .with_title("Organization Admin")
        .with_inner_size(LogicalSize::new(560.0, 680.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_menu(None).with_window(window_builder))
        .launch(app::App);
}
