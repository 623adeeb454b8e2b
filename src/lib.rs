//! The Soil Watch front-end.
//!
//! Re-exports the navigation header and its page shell from the `app` crate.

pub use app::components::header;
pub use app::types::{NAV_ENTRIES, NavEntry, SITE_TITLE};
pub use app::{component, shell};
