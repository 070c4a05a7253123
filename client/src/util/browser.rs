//! Thin wrappers over blocking dialogs, the clipboard, file download, print,
//! and transient toasts.
//!
//! Every helper is a no-op during SSR. `confirm` answers `false` there so
//! destructive actions never run without a user.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Name the response page downloads its JSON under.
pub const DOWNLOAD_FILENAME: &str = "generatedReport.json";

#[cfg(any(test, feature = "hydrate"))]
const TOAST_FADE_MS: u32 = 1200;
#[cfg(any(test, feature = "hydrate"))]
const TOAST_REMOVE_MS: u32 = 1600;

#[cfg(any(test, feature = "hydrate"))]
fn toast_style() -> &'static str {
    "position:fixed;left:50%;top:24px;transform:translateX(-50%);background:#111827;color:#fff;\
     padding:10px 14px;border-radius:8px;box-shadow:0 8px 24px rgba(0,0,0,.18);z-index:9999"
}

/// Blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Blocking confirm dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Write `text` to the system clipboard. Fire and forget.
pub fn copy_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Offer `content` as a JSON file download.
pub fn download_json(filename: &str, content: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Some(anchor) = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                anchor.remove();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, content);
    }
}

/// Open the browser print dialog.
pub fn print() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }
}

/// Show a short-lived message pinned to the top of the page.
pub fn toast(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        el.set_text_content(Some(message));
        let _ = el.set_attribute("style", toast_style());
        let Some(body) = document.body() else {
            return;
        };
        let _ = body.append_child(&el);

        let fading = el.clone();
        Timeout::new(TOAST_FADE_MS, move || {
            let style = fading.style();
            let _ = style.set_property("transition", "opacity .25s");
            let _ = style.set_property("opacity", "0");
        })
        .forget();
        Timeout::new(TOAST_REMOVE_MS, move || el.remove()).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
