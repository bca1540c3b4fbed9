//! Feed client: proxy API access plus the session state the UI drives.
//!
//! Rendering stays outside this crate. The UI feeds events in (initial
//! load, scrolled to bottom, card activated, question submitted) and reads
//! view models back out; every request a transition returns is the UI's to
//! fire, with the response handed back to the matching completion method.

pub mod api;
pub mod detail;
pub mod feed;
