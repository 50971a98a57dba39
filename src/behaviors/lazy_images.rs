use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom::Observer;
use crate::error::Result;

const DATA_SRC: &str = "data-src";

/// Images the browser defers by itself only need their real source.
pub fn natively_deferred(loading: Option<&str>) -> bool {
    loading == Some("lazy")
}

pub enum LazyImages {
    Native,
    Observed { _observer: Observer },
}

impl LazyImages {
    pub fn bind(document: &Document, images: Vec<Element>) -> Result<Self> {
        if supports_native_loading(document)? {
            for image in images
                .iter()
                .filter(|image| natively_deferred(image.get_attribute("loading").as_deref()))
            {
                if let Some(src) = image.get_attribute(DATA_SRC) {
                    image.set_attribute("src", &src)?;
                }
            }
            return Ok(LazyImages::Native);
        }

        debug!("Native lazy loading unavailable, observing {} images", images.len());
        let observer = Observer::once(None, |image| {
            if let Some(src) = image.get_attribute(DATA_SRC) {
                let _ = image.set_attribute("src", &src);
                let _ = image.remove_attribute(DATA_SRC);
            }
        })?;
        for image in &images {
            observer.observe(image);
        }
        Ok(LazyImages::Observed {
            _observer: observer,
        })
    }
}

fn supports_native_loading(document: &Document) -> Result<bool> {
    let probe = document.create_element("img")?;
    Ok(js_sys::Reflect::has(&probe, &JsValue::from_str("loading"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_lazy_marked_images_are_native() {
        assert!(natively_deferred(Some("lazy")));
        assert!(!natively_deferred(Some("eager")));
        assert!(!natively_deferred(None));
    }
}
