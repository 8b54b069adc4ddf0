//! Static navigation table.

/// One navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// In-app path handed to the link builder.
    pub destination: &'static str,
    /// Canonical English label (matches the en-US bundle).
    pub label: &'static str,
    /// Fluent message id used for the rendered label.
    pub message_id: &'static str,
    /// Draw the trailing chevron.
    pub has_indicator: bool,
}

impl NavEntry {
    const fn new(
        destination: &'static str,
        label: &'static str,
        message_id: &'static str,
        has_indicator: bool,
    ) -> Self {
        Self {
            destination,
            label,
            message_id,
            has_indicator,
        }
    }
}

pub const NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry::new("/", "Home", "nav-home", false),
    NavEntry::new("/expertise", "Our Expertise", "nav-expertise", true),
    NavEntry::new("/technologies", "Technologies", "nav-technologies", true),
    NavEntry::new(
        "/offshore-developer",
        "Offshore Developer",
        "nav-offshore-developer",
        true,
    ),
    NavEntry::new("/products", "Products", "nav-products", true),
    NavEntry::new("/about", "About", "nav-about", false),
    NavEntry::new("/resources", "Resources", "nav-resources", true),
];

/// Call-to-action shown at the right edge and at the bottom of the mobile panel.
pub const CONTACT_ENTRY: NavEntry = NavEntry::new("/contact", "Contact Us", "nav-contact", false);

/// Look up the entry (or the call-to-action) whose destination is `path`.
pub fn entry_for(path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .chain(std::iter::once(&CONTACT_ENTRY))
        .find(|entry| entry.destination == path)
}
