use wasm_bindgen::JsValue;
use web_sys::{Element, IntersectionObserverInit};

use crate::dom::Observer;
use crate::error::Result;

pub const REVEALED_CLASS: &str = "reveal";

/// Adds [`REVEALED_CLASS`] to each element the first time it scrolls into
/// view.
pub struct Reveal {
    _observer: Observer,
}

impl Reveal {
    pub fn bind(elements: &[Element], threshold: f64, root_margin: &str) -> Result<Self> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);

        let observer = Observer::once(Some(&init), |element| {
            let _ = element.class_list().add_1(REVEALED_CLASS);
        })?;
        for element in elements {
            observer.observe(element);
        }
        Ok(Self {
            _observer: observer,
        })
    }
}
