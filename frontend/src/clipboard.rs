use js_sys::{Function, Promise, Reflect};
use log::info;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no browser window")]
    NoWindow,
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("legacy copy failed: {0}")]
    Legacy(String),
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Copies `text`, falling back to a hidden textarea and `execCommand("copy")`
/// when `navigator.clipboard` is missing or refuses.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    match write_with_clipboard_api(text).await {
        Ok(()) => Ok(()),
        Err(err) => {
            info!("Clipboard API failed ({}), using legacy copy", err);
            copy_with_selection(text)
        }
    }
}

async fn write_with_clipboard_api(text: &str) -> Result<(), ClipboardError> {
    let window = window().ok_or(ClipboardError::NoWindow)?;
    let navigator: JsValue = window.navigator().into();

    // Looked up dynamically, older browsers and insecure origins lack it
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| ClipboardError::Unavailable)?
        .dyn_into()
        .map_err(|_| ClipboardError::Unavailable)?;

    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(describe(&e)))?
        .dyn_into()
        .map_err(|_| ClipboardError::Unavailable)?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(describe(&e)))?;
    Ok(())
}

fn copy_with_selection(text: &str) -> Result<(), ClipboardError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::NoWindow)?;
    let body = document
        .body()
        .ok_or_else(|| ClipboardError::Legacy("document has no body".to_string()))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| ClipboardError::Legacy(describe(&e)))?
        .dyn_into()
        .map_err(|_| ClipboardError::Legacy("not a textarea".to_string()))?;
    textarea.set_value(text);
    body.append_child(&textarea)
        .map_err(|e| ClipboardError::Legacy(describe(&e)))?;
    textarea.select();

    let copied = document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| ClipboardError::Legacy("not an HTML document".to_string()))
        .and_then(|doc| {
            doc.exec_command("copy")
                .map_err(|e| ClipboardError::Legacy(describe(&e)))
        });
    let _ = body.remove_child(&textarea);

    match copied? {
        true => Ok(()),
        false => Err(ClipboardError::Legacy("execCommand returned false".to_string())),
    }
}
