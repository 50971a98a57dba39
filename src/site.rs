use log::{info, warn};
use web_sys::{Document, Window};

use crate::behaviors::{
    accordion::FaqItem, back_to_top::BackToTop, cards::CardHover, keyboard_focus::KeyboardFocus,
    lazy_images::LazyImages, mobile_menu::MobileMenu, navbar::Navbar, page_load,
    reveal::Reveal, smooth_scroll::SmoothScroll,
};
use crate::config::{Config, Motion};
use crate::dom::{self, Listener};
use crate::download::DownloadButton;
use crate::error::Result;
use crate::registry::Registry;

/// Every behavior attached to the page. Dropping it detaches them all.
pub struct Site {
    motion: Motion,
    _navbar: Option<Navbar>,
    _smooth_scroll: SmoothScroll,
    _reveal: Option<Reveal>,
    _back_to_top: Option<BackToTop>,
    _menu: Option<MobileMenu>,
    _faq: Vec<FaqItem>,
    _cards: Vec<CardHover>,
    _keyboard: KeyboardFocus,
    _lazy_images: LazyImages,
    _page_load: Option<Listener>,
    downloads: Vec<DownloadButton>,
}

impl Site {
    pub fn init(config: Config) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let motion = config.motion(|| dom::prefers_reduced_motion(&window));
        info!("Initializing page interactions ({:?} motion)", motion);

        let registry = Registry::collect(&document, &config.selectors)?;
        let site = Self::attach(&window, &document, registry, &config, motion)?;

        info!("Page interactions ready");
        Ok(site)
    }

    pub fn attach(
        window: &Window,
        document: &Document,
        registry: Registry,
        config: &Config,
        motion: Motion,
    ) -> Result<Self> {
        let debounce_ms = config.scroll_debounce_ms;

        let navbar = registry
            .navbar
            .map(|navbar| Navbar::bind(window, navbar, config.navbar_threshold, debounce_ms))
            .transpose()?;

        let smooth_scroll =
            SmoothScroll::bind(window, document, registry.anchors, motion, config.anchor_offset)?;

        let reveal = if motion.is_reduced() || registry.reveal.is_empty() {
            None
        } else {
            Some(Reveal::bind(
                &registry.reveal,
                config.reveal_threshold,
                &config.reveal_root_margin,
            )?)
        };

        let back_to_top = registry
            .back_to_top
            .map(|button| {
                BackToTop::bind(window, button, config.back_to_top_threshold, debounce_ms, motion)
            })
            .transpose()?;

        let menu = registry
            .menu
            .map(|(toggle, links)| MobileMenu::bind(document, toggle, links))
            .transpose()?;

        let faq = registry
            .faq
            .into_iter()
            .map(FaqItem::bind)
            .collect::<Result<Vec<_>>>()?;

        let cards = if motion.is_reduced() {
            Vec::new()
        } else {
            registry
                .cards
                .into_iter()
                .map(CardHover::bind)
                .collect::<Result<Vec<_>>>()?
        };

        let keyboard = KeyboardFocus::bind(document, registry.body.clone())?;
        let lazy_images = LazyImages::bind(document, registry.lazy_images)?;

        let page_load = if motion.is_reduced() {
            None
        } else {
            page_load::bind(window, document, registry.body)?
        };

        let mut downloads = Vec::with_capacity(registry.downloads.len());
        for parts in registry.downloads {
            match DownloadButton::bind(document, parts, &config.download) {
                Ok(button) => downloads.push(button),
                Err(err) => warn!("Skipping download button: {}", err),
            }
        }

        Ok(Self {
            motion,
            _navbar: navbar,
            _smooth_scroll: smooth_scroll,
            _reveal: reveal,
            _back_to_top: back_to_top,
            _menu: menu,
            _faq: faq,
            _cards: cards,
            _keyboard: keyboard,
            _lazy_images: lazy_images,
            _page_load: page_load,
            downloads,
        })
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion.is_reduced()
    }

    pub fn download_buttons(&self) -> usize {
        self.downloads.len()
    }
}
