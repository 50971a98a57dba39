use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

use crate::dom::{self, Listener};
use crate::error::Result;

pub const OPEN_CLASS: &str = "active";
const EXPANDED_ATTR: &str = "aria-expanded";

pub fn flip_expanded(current: Option<&str>) -> &'static str {
    if current == Some("true") {
        "false"
    } else {
        "true"
    }
}

pub struct MobileMenu {
    _listeners: Vec<Listener>,
}

impl MobileMenu {
    pub fn bind(document: &Document, toggle: Element, links: Element) -> Result<Self> {
        let mut listeners = Vec::new();

        listeners.push(Listener::new(&toggle, "click", {
            let toggle = toggle.clone();
            let links = links.clone();
            move |_| {
                let _ = links.class_list().toggle(OPEN_CLASS);
                let _ = toggle.class_list().toggle(OPEN_CLASS);
                let next = flip_expanded(toggle.get_attribute(EXPANDED_ATTR).as_deref());
                let _ = toggle.set_attribute(EXPANDED_ATTR, next);
            }
        })?);

        for link in dom::query_within(&links, "a")? {
            let toggle = toggle.clone();
            let links = links.clone();
            listeners.push(Listener::new(&link, "click", move |_| close(&toggle, &links))?);
        }

        listeners.push(Listener::new(document, "click", {
            let toggle = toggle.clone();
            let links = links.clone();
            move |event: Event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let Some(target) = target else {
                    return;
                };
                if !toggle.contains(Some(&target)) && !links.contains(Some(&target)) {
                    close(&toggle, &links);
                }
            }
        })?);

        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn close(toggle: &Element, links: &Element) {
    let _ = links.class_list().remove_1(OPEN_CLASS);
    let _ = toggle.class_list().remove_1(OPEN_CLASS);
    let _ = toggle.set_attribute(EXPANDED_ATTR, "false");
}
