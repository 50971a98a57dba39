//! Download buttons: a reachability probe with busy, success and fallback
//! faces, plus a one-time prefetch hint on hover.

pub mod controller;
pub mod probe;
pub mod state;

pub use controller::{DownloadButton, DownloadParts};
