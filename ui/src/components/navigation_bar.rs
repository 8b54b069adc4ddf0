use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::icons::{CloseIcon, MenuIcon};
use super::navigation_link::{LinkVariant, NavigationLink};
use super::site_link::site_link;
use crate::i18n;
use crate::nav::{use_scroll_listener, ViewState, CONTACT_ENTRY, NAV_ENTRIES};
use crate::t;

const LOGO: Asset = asset!("/assets/logo.svg");
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header. Owns the [`ViewState`], follows the page scroll signal for as
/// long as it is mounted and toggles the mobile panel from the menu button.
///
/// The scroll source comes from context (`ScrollSignal`); hosts that do not
/// provide one get the platform default.
#[component]
pub fn NavigationBar() -> Element {
    i18n::init();

    let mut state = use_signal(ViewState::default);

    use_scroll_listener(move |offset| {
        let mut state = state;
        // Scroll events arrive at frame rate; only write when the flag flips.
        if ViewState::is_past_threshold(offset) != state.peek().scrolled {
            state.with_mut(|s| s.apply_scroll(offset));
            debug!(offset, scrolled = state.peek().scrolled, "header scroll state changed");
        }
    });

    rsx! {
        NavigationBarView {
            state: state(),
            on_toggle_menu: move |_| {
                state.with_mut(ViewState::toggle_menu);
                debug!(menu_open = state.peek().menu_open, "mobile menu toggled");
            },
        }
    }
}

/// Markup of the header for a given [`ViewState`].
#[component]
pub fn NavigationBarView(state: ViewState, on_toggle_menu: EventHandler<MouseEvent>) -> Element {
    let contact = t!("nav-contact");
    let menu_label = t!("nav-open-menu");
    let logo_alt = t!("nav-logo-alt");

    rsx! {
        // Include navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { class: state.container_class(),
            div { class: "site-nav__inner",
                div { class: "site-nav__bar",
                    // Logo
                    div { class: "site-nav__brand",
                        {site_link("/", "site-nav__brand-link", rsx! {
                            img { class: "site-nav__logo", src: LOGO, alt: "{logo_alt}" }
                        })}
                    }

                    // Desktop link row
                    div { class: "site-nav__desktop",
                        div { class: "site-nav__links",
                            for entry in NAV_ENTRIES {
                                NavigationLink { key: "{entry.destination}", entry: entry }
                            }
                        }
                    }

                    // Call to action
                    div { class: "site-nav__desktop",
                        {site_link(CONTACT_ENTRY.destination, "site-nav__cta", rsx! { "{contact}" })}
                    }

                    // Mobile menu button
                    div { class: "site-nav__toggle",
                        button {
                            r#type: "button",
                            class: "site-nav__menu-button",
                            aria_controls: "mobile-menu",
                            aria_expanded: "{state.menu_open}",
                            onclick: move |evt| on_toggle_menu.call(evt),
                            span { class: "visually-hidden", "{menu_label}" }
                            if state.menu_open {
                                CloseIcon {}
                            } else {
                                MenuIcon {}
                            }
                        }
                    }
                }
            }

            if state.shows_mobile_panel() {
                div { id: "mobile-menu", class: "site-nav__mobile-panel",
                    div { class: "site-nav__mobile-links",
                        for entry in NAV_ENTRIES {
                            NavigationLink {
                                key: "{entry.destination}",
                                entry: entry,
                                variant: LinkVariant::Mobile,
                            }
                        }
                        {site_link(
                            CONTACT_ENTRY.destination,
                            "site-nav__cta site-nav__cta--mobile",
                            rsx! { "{contact}" },
                        )}
                    }
                }
            }

            if state.shows_divider() {
                div { class: "site-nav__divider", aria_hidden: "true" }
            }
        }
    }
}
