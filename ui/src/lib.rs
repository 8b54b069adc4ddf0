//! Shared UI crate for the Frontline marketing site. The header component and
//! everything it needs live here; platform crates only launch and route.

use dioxus::prelude::*;

/// Page-level theme shared by the launchers.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod i18n;
pub mod nav;
pub mod views;

pub mod components {
    // Inline SVG glyphs used by the header
    mod icons;

    pub mod navigation_bar;
    pub mod navigation_link;
    pub mod site_link;

    pub use navigation_bar::{NavigationBar, NavigationBarView};
    pub use navigation_link::{LinkVariant, NavigationLink};
    pub use site_link::{register_link_builder, LinkBuilder};
}
