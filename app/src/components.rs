//! Reusable UI pieces for the site.
//!
//! `header` renders the title banner and navigation row; `error_template`
//! renders the page shown when a route cannot be resolved.

pub mod error_template;
pub mod header;
