use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::config::DownloadConfig;
use crate::dom::{self, Listener};
use crate::download::probe::probe;
use crate::download::state::{
    Activation, Appearance, DownloadAction, Indicator, Settlement, Target,
};
use crate::error::{Result, SiteError};

const PRELOADED_ATTR: &str = "data-preloaded";
const ORIGINAL_ICON_ATTR: &str = "data-original-icon";
const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

/// The face saved by the first binding wins over whatever the node shows
/// now, which may be a busy or success face.
pub fn original_face(saved: Option<String>, shown: Option<String>) -> String {
    saved.or(shown).unwrap_or_default()
}

/// Keys that activate a focused control like a click would.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Nodes making up one download control, collected once by the registry.
#[derive(Clone)]
pub struct DownloadParts {
    pub button: HtmlElement,
    pub icon: Option<Element>,
    pub text: Option<Element>,
}

impl DownloadParts {
    fn apply(&self, appearance: &Appearance) {
        let classes = self.button.class_list();
        let wanted = appearance.indicator.class();
        for class in [Indicator::BUSY_CLASS, Indicator::SUCCESS_CLASS] {
            if wanted != Some(class) {
                let _ = classes.remove_1(class);
            }
        }
        if let Some(class) = wanted {
            let _ = classes.add_1(class);
        }
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(&appearance.icon));
        }
        if let Some(text) = &self.text {
            text.set_text_content(Some(&appearance.text));
        }
    }
}

pub struct DownloadButton {
    _listeners: Vec<Listener>,
}

impl DownloadButton {
    pub fn bind(document: &Document, parts: DownloadParts, config: &DownloadConfig) -> Result<Self> {
        let target = Target::from_href(parts.button.get_attribute("href").as_deref());
        let original_icon = remember_face(&parts.button, ORIGINAL_ICON_ATTR, parts.icon.as_ref())?;
        let original_text = remember_face(&parts.button, ORIGINAL_TEXT_ATTR, parts.text.as_ref())?;

        let mut action = DownloadAction::new(target, original_icon, original_text, config.clone());
        if parts.button.get_attribute(PRELOADED_ATTR).as_deref() == Some("true") {
            action.mark_prefetched();
        }
        let action = Rc::new(RefCell::new(action));
        let timeout_ms = config.probe_timeout_ms;

        let on_click = {
            let action = action.clone();
            let parts = parts.clone();
            move |_: Event| {
                let activation = action.borrow_mut().activate(dom::now_ms());
                match activation {
                    Activation::Ignored(reason) => {
                        debug!("Download control ignored activation: {:?}", reason);
                    }
                    Activation::Probe { url, appearance } => {
                        parts.apply(&appearance);
                        spawn_local(run_probe(action.clone(), parts.clone(), url, timeout_ms));
                    }
                }
            }
        };

        let on_keydown = {
            let button = parts.button.clone();
            move |event: Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_activation_key(&event.key()) {
                    event.prevent_default();
                    button.click();
                }
            }
        };

        let on_hover = {
            let action = action.clone();
            let document = document.clone();
            let button = parts.button.clone();
            move |_: Event| {
                let url = action.borrow_mut().hover().map(str::to_string);
                if let Some(url) = url {
                    if let Err(err) = inject_prefetch(&document, &button, &url) {
                        warn!("Could not add prefetch hint for {}: {}", url, err);
                    }
                }
            }
        };

        let listeners = vec![
            Listener::new(&parts.button, "click", on_click)?,
            Listener::new(&parts.button, "keydown", on_keydown)?,
            Listener::new(&parts.button, "mouseenter", on_hover)?,
        ];

        Ok(Self {
            _listeners: listeners,
        })
    }
}

async fn run_probe(
    action: Rc<RefCell<DownloadAction>>,
    parts: DownloadParts,
    url: String,
    timeout_ms: u32,
) {
    let outcome = probe(&url, timeout_ms).await;
    if let Err(err) = &outcome {
        warn!("Download check for {} failed, the download continues anyway: {}", url, err);
    }

    let hold = action.borrow().hold_remaining(dom::now_ms());
    if hold > 0 {
        TimeoutFuture::new(hold).await;
    }

    let settlement = action.borrow_mut().settle(&outcome);
    match settlement {
        Some(Settlement::Celebrate {
            appearance,
            revert_after_ms,
        }) => {
            info!("Download target {} is reachable", url);
            parts.apply(&appearance);
            TimeoutFuture::new(revert_after_ms).await;
            let reverted = action.borrow_mut().revert();
            if let Some(original) = reverted {
                parts.apply(&original);
            }
        }
        Some(Settlement::Fallback { appearance }) => parts.apply(&appearance),
        None => {}
    }
}

fn remember_face(button: &HtmlElement, attr: &str, node: Option<&Element>) -> Result<String> {
    let saved = button.get_attribute(attr);
    let first_binding = saved.is_none();
    let face = original_face(saved, node.and_then(|node| node.text_content()));
    if first_binding {
        button.set_attribute(attr, &face)?;
    }
    Ok(face)
}

fn inject_prefetch(document: &Document, button: &HtmlElement, url: &str) -> Result<()> {
    let head = document.head().ok_or(SiteError::MissingNode("head"))?;
    let link = document.create_element("link")?;
    link.set_attribute("rel", "prefetch")?;
    link.set_attribute("href", url)?;
    head.append_child(&link)?;
    button.set_attribute(PRELOADED_ATTR, "true")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Spacebar"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn rebinding_keeps_the_first_face() {
        // Bound again while the busy or success face is showing.
        assert_eq!(original_face(Some("⬇".into()), Some("⏳".into())), "⬇");
        assert_eq!(
            original_face(Some("Download".into()), Some("Downloaded!".into())),
            "Download"
        );
    }

    #[test]
    fn first_binding_reads_the_live_face() {
        assert_eq!(original_face(None, Some("⬇".into())), "⬇");
        assert_eq!(original_face(None, None), "");
    }
}
