use web_sys::{Element, ScrollToOptions, Window};

use crate::behaviors::scroll_class::ScrollClass;
use crate::config::Motion;
use crate::dom::Listener;
use crate::error::Result;

pub const VISIBLE_CLASS: &str = "visible";

pub struct BackToTop {
    _scroll: ScrollClass,
    _click: Listener,
}

impl BackToTop {
    pub fn bind(
        window: &Window,
        button: Element,
        threshold: f64,
        debounce_ms: u32,
        motion: Motion,
    ) -> Result<Self> {
        let click = {
            let window = window.clone();
            Listener::new(&button, "click", move |_| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(motion.scroll_behavior());
                window.scroll_to_with_scroll_to_options(&options);
            })?
        };
        let scroll = ScrollClass::bind(window, button, VISIBLE_CLASS, threshold, debounce_ms)?;
        Ok(Self {
            _scroll: scroll,
            _click: click,
        })
    }
}
