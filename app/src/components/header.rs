use crate::types::{NAV_ENTRIES, SITE_TITLE};
use leptos::{
    html::{button, h1, header},
    prelude::*,
};
// Plain anchors keep the configured href verbatim; the enclosing Router
// intercepts their clicks for client-side navigation.

pub const BANNER_CLASS: &str = "flex bg-[#152514] w-full h-32 items-center justify-center";
pub const TITLE_CLASS: &str = "title_text";
pub const NAV_CLASS: &str =
    "bg-[#152514] max-w-full h-10 flex items-center justify-center select-none";
pub const LIST_CLASS: &str = "body flex justify-center space-x-11 min-w-full h-full";
pub const BUTTON_CLASS: &str =
    "px-1 py-0.5 hover:bg-[#677066] rounded-xl text-[#f2f1f1] text-2xl font-amiri outline-none";

/// Renders the title banner and the navigation row.
///
/// Each entry of [`NAV_ENTRIES`] becomes a button inside an anchor whose
/// `href` is the entry target exactly as configured, in list order. The
/// browser resolves the relative targets against the current page.
pub fn component() -> impl IntoView {
    view! {
        <div>
            {banner()}
            <nav class=NAV_CLASS>
                <ul class=LIST_CLASS>
                    {NAV_ENTRIES
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li>
                                    <a href={entry.target}>{entry_button(entry.label)}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </div>
    }
}

/// The banner region holding the site title.
pub fn banner() -> impl IntoView {
    header()
        .class(BANNER_CLASS)
        .child(h1().class(TITLE_CLASS).child(SITE_TITLE))
}

/// The clickable control placed inside each navigation link.
pub fn entry_button(label: &'static str) -> impl IntoView {
    button().class(BUTTON_CLASS).child(label)
}
