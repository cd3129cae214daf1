//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::Root;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::state::log_state::LogLevel;
use crate::utils::config_store::load_app_config;

actions!(ui_catalog, [Quit]);

/// Run the UI catalog application
pub fn run_app() {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|cx: &mut App| {
            // Toolkit globals must exist before any input is created
            gpui_component::init(cx);

            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let config = load_app_config();
            let entities = AppEntities::init(config, cx);
            cx.set_global(entities.clone());
            entities.log(LogLevel::Info, "Preferences loaded", cx);

            if let Err(e) = open_main_window(entities, cx) {
                tracing::error!("Failed to open main window: {:#}", e);
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}

fn open_main_window(entities: AppEntities, cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("UI Catalog")),
            appears_transparent: true,
            traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |window, cx| {
        let view = cx.new(|cx| Workspace::new(entities.clone(), window, cx));
        cx.new(|cx| Root::new(view, window, cx))
    })
    .context("open main window")?;
    Ok(())
}
