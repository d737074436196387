use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use super::{Capability, ClipboardWriteFailure, ClipboardWriter, CopyPath, WithFallback};

pub type SystemClipboard = WithFallback<AsyncClipboard, LegacyCopy>;

/// The async API when the probe found it, the textarea trick otherwise.
pub fn system_clipboard(support: Capability) -> SystemClipboard {
    WithFallback::new(AsyncClipboard { support }, LegacyCopy)
}

/// `"clipboard" in navigator`. Only meaningful in a live document.
pub fn detect_async_clipboard() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("clipboard")).ok())
        .unwrap_or(false)
}

fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(e.name()), String::from(e.message()));
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `navigator.clipboard.writeText`.
pub struct AsyncClipboard {
    support: Capability,
}

impl AsyncClipboard {
    async fn write(text: &str) -> Result<(), ClipboardWriteFailure> {
        let fail = |cause: String| ClipboardWriteFailure::new(CopyPath::AsyncApi, cause);
        let window = web_sys::window().ok_or_else(|| fail("no window".into()))?;
        let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| fail(describe(&e)))?
            .dyn_into::<web_sys::Clipboard>()
            .map_err(|_| fail("navigator.clipboard is not a Clipboard".into()))?;
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| fail(describe(&e)))
    }
}

impl ClipboardWriter for AsyncClipboard {
    fn is_available(&self) -> bool {
        self.support.get()
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardWriteFailure>> {
        Box::pin(Self::write(text))
    }
}

/// Offscreen textarea + `document.execCommand("copy")`.
pub struct LegacyCopy;

impl LegacyCopy {
    fn write(text: &str) -> Result<(), ClipboardWriteFailure> {
        let fail = |cause: String| ClipboardWriteFailure::new(CopyPath::LegacyCommand, cause);
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("no document".into()))?;
        let body = document.body().ok_or_else(|| fail("document has no body".into()))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|e| fail(describe(&e)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| fail("created element is not a textarea".into()))?;
        textarea.set_value(text);
        textarea.set_read_only(true);
        let style = textarea.style();
        for (property, value) in [("position", "absolute"), ("left", "-9999px"), ("opacity", "0")] {
            style.set_property(property, value).map_err(|e| fail(describe(&e)))?;
        }

        body.append_child(&textarea).map_err(|e| fail(describe(&e)))?;
        textarea.select();
        let copied = document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| fail("document does not support execCommand".into()))
            .and_then(|html| html.exec_command("copy").map_err(|e| fail(describe(&e))));
        textarea.remove();

        match copied? {
            true => Ok(()),
            false => Err(fail("copy command was rejected".into())),
        }
    }
}

impl ClipboardWriter for LegacyCopy {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardWriteFailure>> {
        Box::pin(async move { Self::write(text) })
    }
}
