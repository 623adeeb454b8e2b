//! Fixed configuration for the site navigation.
//!
//! The header renders straight from these values, so the entry list can be
//! checked without going through a renderer.

/// Text shown in the banner above the navigation row.
pub const SITE_TITLE: &str = "The Soil Watch";

/// A single destination in the navigation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavEntry {
    /// Text displayed on the button.
    pub label: &'static str,
    /// Written verbatim into the link `href`.
    pub target: &'static str,
}

impl NavEntry {
    #[must_use]
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }
}

// "Home" is the only absolute target; the browser resolves the others against the current page.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry::new("Soil Statistics", "../soilStats"),
    NavEntry::new("Contact", "../Contact"),
    NavEntry::new("About", "../About"),
    NavEntry::new("Home", "/"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_entries_in_display_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["Soil Statistics", "Contact", "About", "Home"]);

        let targets: Vec<_> = NAV_ENTRIES.iter().map(|entry| entry.target).collect();
        assert_eq!(targets, ["../soilStats", "../Contact", "../About", "/"]);
    }

    #[test]
    fn test_home_is_the_only_absolute_target() {
        assert_matches!(
            NAV_ENTRIES.last(),
            Some(NavEntry {
                label: "Home",
                target: "/"
            })
        );

        let relative = NAV_ENTRIES
            .iter()
            .filter(|entry| entry.target.starts_with("../"))
            .count();
        assert_eq!(relative, 3);
    }

    #[test]
    fn test_labels_are_unique() {
        for (index, entry) in NAV_ENTRIES.iter().enumerate() {
            assert!(
                NAV_ENTRIES[index + 1..]
                    .iter()
                    .all(|other| other.label != entry.label),
                "duplicate label {}",
                entry.label
            );
        }
    }
}
