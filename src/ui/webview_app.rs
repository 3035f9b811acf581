//! Desktop shell using `wry` + `tao`.
//!
//! One window holds a chrome view (sidebar and toolbar, rendered from
//! [`ChromeState`]) plus one child view per tab, stacked over the content
//! area with only the active tab visible. Tab engines and the chrome's IPC
//! handler wake the event loop through the proxy; all state changes happen
//! on the event loop thread.

use std::rc::Rc;

use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::dpi::{LogicalPosition, LogicalSize as ViewSize};
use wry::{Rect, WebView, WebViewBuilder};

use super::chrome::{ChromeCommand, ChromeState};
use super::wry_engine::WryEngineFactory;
use crate::app::App;
use crate::config::APP_TITLE;
use crate::engine::EventSink;
use crate::platform::shell::DesktopShell;

#[derive(Debug)]
pub enum UserEvent {
    /// A tab engine queued navigation events.
    EngineActivity,
    /// Raw IPC body from the chrome view.
    Command(String),
}

const CHROME_HTML: &str = include_str!("chrome.html");

/// Must match the sidebar width and toolbar height in `chrome.html`.
const SIDEBAR_WIDTH: f64 = 260.0;
const TOOLBAR_HEIGHT: f64 = 48.0;

fn window_size(window: &Window) -> (f64, f64) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    (size.width, size.height)
}

fn full_bounds(window: &Window) -> Rect {
    let (width, height) = window_size(window);
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: ViewSize::new(width, height).into(),
    }
}

fn content_bounds(window: &Window) -> Rect {
    let (width, height) = window_size(window);
    Rect {
        position: LogicalPosition::new(SIDEBAR_WIDTH, 0.0).into(),
        size: ViewSize::new(
            (width - SIDEBAR_WIDTH).max(0.0),
            (height - TOOLBAR_HEIGHT).max(0.0),
        )
        .into(),
    }
}

fn render_chrome(chrome: &WebView, state: &ChromeState) {
    match state.to_render_script() {
        Ok(js) => {
            if let Err(e) = chrome.evaluate_script(&js) {
                warn!(error = %e, "chrome render failed");
            }
        }
        Err(e) => warn!(error = %e, "chrome state not serializable"),
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = Rc::new(
        WindowBuilder::new()
            .with_title(APP_TITLE)
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .build(&event_loop)?,
    );

    // Built before any tab so tab views stack above it.
    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let chrome = WebViewBuilder::new()
        .with_html(CHROME_HTML)
        .with_bounds(full_bounds(&window))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = ipc_proxy.send_event(UserEvent::Command(msg.body().clone()));
        })
        .with_on_page_load_handler(move |_, _| {
            let _ = load_proxy.send_event(UserEvent::EngineActivity);
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(&*window)?;

    let events = EventSink::new();
    let factory = WryEngineFactory::new(
        Rc::clone(&window),
        events.clone(),
        proxy,
        content_bounds(&window),
    );
    let mut app = App::new(Box::new(factory.clone()), events, None)
        .with_shell(Box::new(DesktopShell::new()));
    factory.layout(app.registry.active_id(), content_bounds(&window));
    info!("window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("shutting down");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                if let Err(e) = chrome.set_bounds(full_bounds(&window)) {
                    warn!(error = %e, "chrome resize failed");
                }
                factory.layout(app.registry.active_id(), content_bounds(&window));
            }

            Event::UserEvent(UserEvent::EngineActivity) => {
                let delivered = app.pump_events();
                debug!(delivered, "engine events");
                render_chrome(&chrome, &app.chrome_state());
            }

            Event::UserEvent(UserEvent::Command(body)) => {
                match ChromeCommand::parse(&body) {
                    Ok(command) => {
                        debug!(?command, "chrome command");
                        app.apply_command(command);
                        app.pump_events();
                    }
                    Err(e) => warn!(error = %e, "malformed chrome message"),
                }
                factory.layout(app.registry.active_id(), content_bounds(&window));
                render_chrome(&chrome, &app.chrome_state());
            }

            _ => {}
        }
    })
}
