use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::dom::Listener;
use crate::error::Result;

pub const KEYBOARD_CLASS: &str = "keyboard-navigation";

pub fn is_navigation_key(key: &str) -> bool {
    key == "Tab"
}

/// Shows focus outlines only while the visitor navigates by keyboard.
pub struct KeyboardFocus {
    _keydown: Listener,
    _mousedown: Listener,
}

impl KeyboardFocus {
    pub fn bind(document: &Document, body: HtmlElement) -> Result<Self> {
        let keydown = Listener::new(document, "keydown", {
            let body = body.clone();
            move |event: Event| {
                let tab = event
                    .dyn_ref::<KeyboardEvent>()
                    .map(|event| is_navigation_key(&event.key()))
                    .unwrap_or(false);
                if tab {
                    let _ = body.class_list().add_1(KEYBOARD_CLASS);
                }
            }
        })?;
        let mousedown = Listener::new(document, "mousedown", move |_| {
            let _ = body.class_list().remove_1(KEYBOARD_CLASS);
        })?;
        Ok(Self {
            _keydown: keydown,
            _mousedown: mousedown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tab_switches_to_keyboard_mode() {
        assert!(is_navigation_key("Tab"));
        assert!(!is_navigation_key("Enter"));
        assert!(!is_navigation_key("tab"));
    }
}
