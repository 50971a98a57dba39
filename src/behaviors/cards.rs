use web_sys::HtmlElement;

use crate::dom::Listener;
use crate::error::Result;

const LIFTED: &str = "translateY(-6px)";
const RESTING: &str = "translateY(0)";

pub struct CardHover {
    _enter: Listener,
    _leave: Listener,
}

impl CardHover {
    pub fn bind(card: HtmlElement) -> Result<Self> {
        let enter = Listener::new(&card, "mouseenter", {
            let card = card.clone();
            move |_| set_transform(&card, LIFTED)
        })?;
        let leave = Listener::new(&card, "mouseleave", {
            let card = card.clone();
            move |_| set_transform(&card, RESTING)
        })?;
        Ok(Self {
            _enter: enter,
            _leave: leave,
        })
    }
}

fn set_transform(card: &HtmlElement, value: &str) {
    let _ = card.style().set_property("transform", value);
}
