use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::Listener;
use crate::error::Result;

const COLLAPSED: &str = "0px";

pub fn is_open(max_height: &str) -> bool {
    max_height != COLLAPSED
}

pub fn expanded_height(scroll_height: i32) -> String {
    format!("{}px", scroll_height)
}

#[derive(Clone)]
pub struct FaqParts {
    pub question: Element,
    pub answer: HtmlElement,
}

/// One FAQ entry; answers start expanded and the question toggles them.
pub struct FaqItem {
    _listener: Listener,
}

impl FaqItem {
    pub fn bind(parts: FaqParts) -> Result<Self> {
        let FaqParts { question, answer } = parts;
        let style = answer.style();
        style.set_property("max-height", &expanded_height(answer.scroll_height()))?;
        style.set_property("overflow", "hidden")?;
        style.set_property("transition", "max-height 0.3s ease")?;
        if let Some(question) = question.dyn_ref::<HtmlElement>() {
            question.style().set_property("cursor", "pointer")?;
        }
        question.set_attribute("aria-expanded", "true")?;

        let target = question.clone();
        let listener = Listener::new(&target, "click", move |_| {
            let style = answer.style();
            let current = style.get_property_value("max-height").unwrap_or_default();
            if is_open(&current) {
                let _ = style.set_property("max-height", COLLAPSED);
                let _ = question.set_attribute("aria-expanded", "false");
            } else {
                let _ = style.set_property("max-height", &expanded_height(answer.scroll_height()));
                let _ = question.set_attribute("aria-expanded", "true");
            }
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_height_counts_as_closed() {
        assert!(!is_open("0px"));
        assert!(is_open("240px"));
        // Inline style not set yet.
        assert!(is_open(""));
    }

    #[test]
    fn height_is_written_in_pixels() {
        assert_eq!(expanded_height(0), "0px");
        assert_eq!(expanded_height(312), "312px");
    }
}
