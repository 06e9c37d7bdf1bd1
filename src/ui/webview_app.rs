//! WebView shell for URLibrary using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served from the `urlib://` custom protocol, with its CSS and
//!   script inlined from `resources/ui/`.
//! - The page calls Rust via `window.ipc.postMessage()` with
//!   `{"id", "method", "params"}`; replies are delivered by evaluating
//!   `window.__urlib_reply(reply)` on the event loop thread.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info};
use wry::WebViewBuilder;

use crate::app::App;
use crate::platform;
use crate::rpc_handler::handle_message;
use crate::services::logger::init_logger;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

const PAGE_HTML: &str = include_str!("../../resources/ui/index.html");
const PAGE_CSS: &str = include_str!("../../resources/ui/styles.css");
const PAGE_JS: &str = include_str!("../../resources/ui/app.js");

/// Assembles the single library page.
fn library_page() -> String {
    PAGE_HTML
        .replace("/*__STYLES__*/", PAGE_CSS)
        .replace("/*__SCRIPT__*/", PAGE_JS)
}

/// Wraps a reply envelope in the script that hands it to the page.
fn reply_script(reply: &serde_json::Value) -> String {
    format!("window.__urlib_reply && window.__urlib_reply({})", reply)
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(None);
    let settings = settings_engine.load().unwrap_or_default();
    init_logger(&settings.logging.level);

    let db_path = platform::get_database_path();
    let app = App::with_settings(settings_engine, &db_path.to_string_lossy())?;
    let ipc_state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let ipc_proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("URLibrary")
        .with_inner_size(tao::dpi::LogicalSize::new(settings.window.width, settings.window.height))
        .build(&event_loop)?;

    let builder = WebViewBuilder::new()
        .with_custom_protocol("urlib".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(Cow::Owned(library_page().into_bytes()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&b""[..])))
        })
        .with_url("urlib://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let preview: String = body.chars().take(200).collect();
            debug!(message = %preview, "ipc");
            let reply = handle_message(&ipc_state, body);
            let _ = ipc_proxy.send_event(UserEvent::EvalScript(reply_script(&reply)));
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("Failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    info!("window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
