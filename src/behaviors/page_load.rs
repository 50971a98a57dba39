use web_sys::{Document, HtmlElement, Window};

use crate::dom::Listener;
use crate::error::Result;

pub const LOADED_CLASS: &str = "loaded";

/// Marks `<body>` once every resource has loaded. Returns `None` when the
/// page had already finished loading.
pub fn bind(window: &Window, document: &Document, body: HtmlElement) -> Result<Option<Listener>> {
    if document.ready_state() == "complete" {
        body.class_list().add_1(LOADED_CLASS)?;
        return Ok(None);
    }
    let listener = Listener::new(window, "load", move |_| {
        let _ = body.class_list().add_1(LOADED_CLASS);
    })?;
    Ok(Some(listener))
}
