//! Thin helpers over `web-sys` shared by the behaviors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(SiteError::MissingNode("body"))
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Milliseconds on the page's monotonic clock, for measuring durations.
pub fn now_ms() -> f64 {
    pick_clock(
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now()),
        js_sys::Date::now,
    )
}

/// Wall time only stands in when `performance` is unavailable; it can jump.
pub fn pick_clock(monotonic: Option<f64>, wall: impl FnOnce() -> f64) -> f64 {
    monotonic.unwrap_or_else(wall)
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// An event listener that stays attached until dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` together with its callback; disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    /// `on_enter` runs once per element that starts intersecting; the
    /// element is unobserved right after.
    pub fn once<F>(init: Option<&IntersectionObserverInit>, mut on_enter: F) -> Result<Self>
    where
        F: FnMut(&Element) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        on_enter(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(function, init)?,
            None => IntersectionObserver::new(function)?,
        };
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
