//! Method dispatcher for the URLibrary page.
//!
//! The webview posts `{"id", "method", "params"}` messages over IPC; this
//! module maps each method onto the `App` and returns a JSON result. It has no
//! window dependency so it can be unit-tested directly.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::view::LibraryView;
use crate::ui::html_renderer::{HtmlSurface, RenderSurface};
use crate::ui::prompt::RecordedPrompt;
use crate::ui::view_controller::Submission;

/// Builds the reply for any method that changes what the list shows.
fn view_reply(view: &LibraryView, extra: Value) -> Result<Value, String> {
    let mut surface = HtmlSurface::new();
    surface.present(view);
    let mut reply = json!({
        "view": view,
        "html": surface.list_html(),
        "empty": surface.empty_state_visible(),
    });
    if let (Some(map), Value::Object(extra)) = (reply.as_object_mut(), extra) {
        map.extend(extra);
    }
    Ok(reply)
}

fn str_param<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

/// Dispatch a method call from the page.
///
/// Returns `Ok(Value)` on success or `Err(String)` with a message for the user.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Library ───
        "library.render" => {
            let query = str_param(params, "query").unwrap_or("");
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let view = a.controller.render(query);
            view_reply(&view, json!({}))
        }
        "library.filter_tag" => {
            let tag = str_param(params, "tag").ok_or("missing tag")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let view = a.controller.filter_by_tag(tag);
            view_reply(&view, json!({}))
        }

        // ─── Form ───
        "form.submit" => {
            let url = str_param(params, "url").ok_or("missing url")?;
            let title = str_param(params, "title").unwrap_or("");
            let tags = str_param(params, "tags").unwrap_or("");
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut prompt = RecordedPrompt::answering(false);
            let submission = a
                .controller
                .submit_form(url, title, tags, &mut prompt)
                .map_err(|e| e.to_string())?;
            let saved = match submission {
                Submission::Added(bm) => json!({"action": "added", "id": bm.id}),
                Submission::Updated { id, found } => json!({"action": "updated", "id": id, "found": found}),
            };
            view_reply(&a.controller.view(), json!({"saved": saved}))
        }
        "form.edit" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let found = a.controller.begin_edit(id);
            view_reply(&a.controller.view(), json!({"found": found}))
        }
        "form.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.controller.reset_form();
            view_reply(&a.controller.view(), json!({}))
        }

        // ─── Bookmarks ───
        "bookmark.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let confirmed = params.get("confirmed").and_then(|v| v.as_bool()).unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut prompt = RecordedPrompt::answering(confirmed);
            let removed = a
                .controller
                .request_delete(id, &mut prompt)
                .map_err(|e| e.to_string())?;
            view_reply(&a.controller.view(), json!({"removed": removed}))
        }

        // ─── Logo modal ───
        "modal.open" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.logo_modal.show()))
        }
        "modal.close" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.logo_modal.hide()))
        }
        "modal.click" => {
            let on_backdrop = params.get("on_backdrop").and_then(|v| v.as_bool()).unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.logo_modal.click(on_backdrop)))
        }
        "modal.key" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.logo_modal.key_down(key)))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key.starts_with("storage.") {
                let storage = a.settings().storage.clone();
                let view = a.controller.apply_storage_settings(&storage);
                return view_reply(&view, json!({"ok": true, "restart_required": false}));
            }
            // The logger and the window are set up once at startup.
            Ok(json!({"ok": true, "restart_required": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Handles one raw IPC message and returns the JSON reply envelope
/// `{"id", "result"}` or `{"id", "error"}`.
pub fn handle_message(app: &Mutex<App>, body: &str) -> Value {
    let req: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return json!({"id": null, "error": format!("parse error: {}", e)}),
    };
    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));

    match handle_method(app, method, &params) {
        Ok(result) => json!({"id": id, "result": result}),
        Err(error) => json!({"id": id, "error": error}),
    }
}
