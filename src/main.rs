#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bonsai_search::app;
use bonsai_search::config;
use bonsai_search::web_assets;
use std::sync::{Arc, Mutex};
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::WindowBuilder,
};
use wry::WebViewBuilder;

fn main() {
    // Initialize logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Create the event loop and window
    let event_loop = EventLoopBuilder::<app::events::UserEvent>::with_user_event().build();

    // The single application state, owned here and handed to each consumer.
    let state = Arc::new(Mutex::new(app::state::AppState::default()));

    let (width, height, pos_x, pos_y) = {
        let state_guard = app::helpers::lock_state(&state);
        let (width, height) = state_guard.config.window_size;
        let (pos_x, pos_y) = state_guard.config.window_position;
        (width, height, pos_x, pos_y)
    };

    let window = WindowBuilder::new()
        .with_title("Bonsai Search")
        .with_inner_size(tao::dpi::LogicalSize::new(width, height))
        .with_position(tao::dpi::LogicalPosition::new(pos_x, pos_y))
        .with_min_inner_size(tao::dpi::LogicalSize::new(320, 400))
        .build(&event_loop)
        .expect("Failed to build Window");

    let window = Arc::new(window);
    let proxy = event_loop.create_proxy();

    let ipc_handler_state = state.clone();
    let ipc_handler_proxy = proxy.clone();
    let ipc_handler = move |message: String| {
        app::handle_ipc_message(
            message,
            ipc_handler_proxy.clone(),
            ipc_handler_state.clone(),
        );
    };

    let html_content = web_assets::index_html().expect("Embedded index.html is missing");

    let webview = WebViewBuilder::new(&*window)
        .with_html(&html_content)
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(ipc_handler)
        .build()
        .expect("Failed to build WebView");

    let state_for_events = state.clone();
    let window_for_events = window.clone();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                tracing::info!("Application initialized.");
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    tracing::info!("Close requested. Saving final window state...");
                    let mut state_guard = app::helpers::lock_state(&state_for_events);
                    let scale_factor = window_for_events.scale_factor();
                    state_guard.remember_window_size(window_for_events.inner_size(), scale_factor);
                    if let Ok(position) = window_for_events.outer_position() {
                        state_guard.remember_window_position(position, scale_factor);
                    }

                    if let Err(e) = config::settings::save_config(&state_guard.config, None) {
                        tracing::error!("Failed to save config on exit: {}", e);
                    }
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    let mut state_guard = app::helpers::lock_state(&state_for_events);
                    state_guard.remember_window_size(size, window_for_events.scale_factor());
                }
                WindowEvent::Moved(position) => {
                    let mut state_guard = app::helpers::lock_state(&state_for_events);
                    state_guard.remember_window_position(position, window_for_events.scale_factor());
                }
                _ => (),
            },
            Event::UserEvent(user_event) => {
                app::handle_user_event(user_event, &webview);
            }
            _ => (),
        }
    });
}
