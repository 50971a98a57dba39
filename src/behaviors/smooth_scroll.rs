use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, Event, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

use crate::config::Motion;
use crate::dom::{self, Listener};
use crate::error::Result;

#[derive(Debug, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// `#` alone; swallowed so the page does not jump to the top.
    Bare,
    /// Element id without the leading `#`.
    Fragment(&'a str),
    Other,
}

pub fn classify(href: &str) -> AnchorHref<'_> {
    match href.strip_prefix('#') {
        Some("") => AnchorHref::Bare,
        Some(id) => AnchorHref::Fragment(id),
        None => AnchorHref::Other,
    }
}

pub fn offset_top(rect_top: f64, scroll_y: f64, offset: f64) -> f64 {
    rect_top + scroll_y - offset
}

pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

impl SmoothScroll {
    pub fn bind(
        window: &Window,
        document: &Document,
        anchors: Vec<Element>,
        motion: Motion,
        offset: f64,
    ) -> Result<Self> {
        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let window = window.clone();
            let document = document.clone();
            let target = anchor.clone();
            listeners.push(Listener::new(&target, "click", move |event: Event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                match classify(&href) {
                    AnchorHref::Bare => event.prevent_default(),
                    AnchorHref::Fragment(id) => {
                        let Some(section) = document.get_element_by_id(id) else {
                            debug!("No element for anchor {}", href);
                            return;
                        };
                        event.prevent_default();
                        scroll_to(&window, &section, motion, offset);
                        if let Ok(history) = window.history() {
                            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href.as_str()));
                        }
                    }
                    AnchorHref::Other => {}
                }
            })?);
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn scroll_to(window: &Window, section: &Element, motion: Motion, offset: f64) {
    if offset == 0.0 {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(motion.scroll_behavior());
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        let top = offset_top(
            section.get_bounding_client_rect().top(),
            dom::scroll_y(window),
            offset,
        );
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(motion.scroll_behavior());
        window.scroll_to_with_scroll_to_options(&options);
    }
}
