use web_sys::{Element, Window};

use crate::debounce::debounce;
use crate::dom::{self, Listener};
use crate::error::Result;

pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Keeps `class` on an element while the page is scrolled past a threshold.
pub struct ScrollClass {
    _listener: Listener,
}

impl ScrollClass {
    pub fn bind(
        window: &Window,
        element: Element,
        class: &'static str,
        threshold: f64,
        debounce_ms: u32,
    ) -> Result<Self> {
        refresh(window, &element, class, threshold);

        let mut handler = {
            let window = window.clone();
            debounce(debounce_ms, move || refresh(&window, &element, class, threshold))
        };
        let listener = Listener::new(window, "scroll", move |_| handler())?;
        Ok(Self {
            _listener: listener,
        })
    }
}

fn refresh(window: &Window, element: &Element, class: &str, threshold: f64) {
    let on = past_threshold(dom::scroll_y(window), threshold);
    let _ = element.class_list().toggle_with_force(class, on);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!past_threshold(0.0, 50.0));
        assert!(!past_threshold(50.0, 50.0));
        assert!(past_threshold(50.5, 50.0));
        assert!(past_threshold(301.0, 300.0));
    }
}
