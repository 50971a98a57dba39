use web_sys::{Element, Window};

use crate::behaviors::scroll_class::ScrollClass;
use crate::error::Result;

pub const SCROLLED_CLASS: &str = "scrolled";

pub struct Navbar {
    _scroll: ScrollClass,
}

impl Navbar {
    pub fn bind(window: &Window, navbar: Element, threshold: f64, debounce_ms: u32) -> Result<Self> {
        Ok(Self {
            _scroll: ScrollClass::bind(window, navbar, SCROLLED_CLASS, threshold, debounce_ms)?,
        })
    }
}
