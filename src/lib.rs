//! Interactive touches for a static marketing site, compiled to
//! WebAssembly: navbar scroll state, smooth anchors, reveal on scroll,
//! back-to-top, mobile menu, FAQ accordion, card hover, keyboard focus
//! outlines, lazy images and download buttons that check their file first.

use std::cell::RefCell;

use log::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod behaviors;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod download;
pub mod error;
pub mod registry;
pub mod site;
pub mod slot;

pub use config::Config;
pub use error::SiteError;
pub use site::Site;

use slot::Slot;

thread_local! {
    static SITE: RefCell<Slot<Site>> = const { RefCell::new(Slot::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    info!("Starting page interactions");
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| boot(Config::default()));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot(Config::default());
    }
    Ok(())
}

/// Re-initializes every behavior with `config`. The live instance, if
/// any, is detached first, and a start still waiting for
/// `DOMContentLoaded` is cancelled. `config` may be `undefined` or a
/// partial object.
#[wasm_bindgen]
pub fn initialize(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value::<Config>(config).map_err(SiteError::from)?
    };
    SITE.with(|slot| -> Result<(), JsValue> {
        let mut slot = slot.borrow_mut();
        let site = slot.replace_with(|| Site::init(config))?;
        info!(
            "Bound {} download buttons (reduced motion: {})",
            site.download_buttons(),
            site.reduced_motion()
        );
        Ok(())
    })
}

/// Removes every listener attached by this module.
#[wasm_bindgen]
pub fn detach() {
    if SITE.with(|slot| slot.borrow_mut().clear()) {
        info!("Detached page interactions");
    }
}

fn boot(config: Config) {
    SITE.with(|slot| {
        let ran = slot.borrow_mut().install_default(|| match Site::init(config) {
            Ok(site) => Some(site),
            Err(err) => {
                error!("Failed to initialize page interactions: {}", err);
                None
            }
        });
        if !ran {
            debug!("Skipping automatic start, page interactions already initialized");
        }
    });
}
