//! Small page behaviors, each owning the listeners it attached.

pub mod accordion;
pub mod back_to_top;
pub mod cards;
pub mod keyboard_focus;
pub mod lazy_images;
pub mod mobile_menu;
pub mod navbar;
pub mod page_load;
pub mod reveal;
pub mod scroll_class;
pub mod smooth_scroll;
