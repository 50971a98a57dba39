//! Collects every element the page behaviors act on, once, at start-up.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::behaviors::accordion::FaqParts;
use crate::config::Selectors;
use crate::dom;
use crate::download::DownloadParts;
use crate::error::Result;

const LAZY_IMAGES: &str = "img[data-src]";

pub struct Registry {
    pub body: HtmlElement,
    pub navbar: Option<Element>,
    pub anchors: Vec<Element>,
    pub reveal: Vec<Element>,
    pub back_to_top: Option<Element>,
    pub menu: Option<(Element, Element)>,
    pub faq: Vec<FaqParts>,
    pub cards: Vec<HtmlElement>,
    pub lazy_images: Vec<Element>,
    pub downloads: Vec<DownloadParts>,
}

impl Registry {
    pub fn collect(document: &Document, selectors: &Selectors) -> Result<Self> {
        let menu = match (
            dom::query_one(document, &selectors.menu_toggle)?,
            dom::query_one(document, &selectors.nav_links)?,
        ) {
            (Some(toggle), Some(links)) => Some((toggle, links)),
            _ => None,
        };

        let mut faq = Vec::new();
        for item in dom::query_all(document, &selectors.faq_item)? {
            let question = item.query_selector(&selectors.faq_question)?;
            let answer = item
                .query_selector(&selectors.faq_answer)?
                .and_then(|answer| answer.dyn_into::<HtmlElement>().ok());
            match (question, answer) {
                (Some(question), Some(answer)) => faq.push(FaqParts { question, answer }),
                _ => debug!("Skipping FAQ item without question or answer"),
            }
        }

        let mut downloads = Vec::new();
        for button in dom::query_all(document, &selectors.download_button)? {
            let Ok(button) = button.dyn_into::<HtmlElement>() else {
                continue;
            };
            let icon = button.query_selector(&selectors.download_icon)?;
            let text = button.query_selector(&selectors.download_text)?;
            downloads.push(DownloadParts { button, icon, text });
        }

        let registry = Self {
            body: dom::body(document)?,
            navbar: dom::query_one(document, &selectors.navbar)?,
            anchors: dom::query_all(document, &selectors.anchors)?,
            reveal: dom::query_all(document, &selectors.reveal)?,
            back_to_top: dom::query_one(document, &selectors.back_to_top)?,
            menu,
            faq,
            cards: html_elements(dom::query_all(document, &selectors.card)?),
            lazy_images: dom::query_all(document, LAZY_IMAGES)?,
            downloads,
        };
        debug!(
            "Collected {} anchors, {} reveal targets, {} FAQ items, {} cards, {} lazy images, {} download buttons",
            registry.anchors.len(),
            registry.reveal.len(),
            registry.faq.len(),
            registry.cards.len(),
            registry.lazy_images.len(),
            registry.downloads.len(),
        );
        Ok(registry)
    }
}

fn html_elements(elements: Vec<Element>) -> Vec<HtmlElement> {
    elements
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}
