//! Thin wrappers over browser-only APIs.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, window};

use folio::dashboard::Prompter;
use folio::log::warn;

/// `window.confirm` / `window.alert`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = window() {
            w.alert_with_message(message).ok();
        }
    }
}

/// Downloads a static file by clicking a temporary `<a download>`.
pub fn download(path: &str, file_name: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    match document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    {
        Some(link) => {
            link.set_href(path);
            link.set_download(file_name);
            link.click();
        }
        None => warn!("Could not create a download link for {path}"),
    }
}
