use dioxus::prelude::*;

use super::icons::DownArrow;
use super::site_link::site_link;
use crate::i18n;
use crate::nav::NavEntry;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    #[default]
    Desktop,
    Mobile,
}

impl LinkVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Desktop => "site-nav__link site-nav__link--desktop",
            Self::Mobile => "site-nav__link site-nav__link--mobile",
        }
    }
}

/// One entry of the header. Desktop links get a hover underline; entries that
/// declare an indicator get a trailing chevron in both variants.
#[component]
pub fn NavigationLink(entry: NavEntry, #[props(default)] variant: LinkVariant) -> Element {
    let text = i18n::label(entry.message_id);

    site_link(
        entry.destination,
        variant.class(),
        rsx! {
            span { class: "site-nav__label", "{text}" }
            if entry.has_indicator {
                DownArrow {}
            }
            if variant == LinkVariant::Desktop {
                span { class: "site-nav__underline", aria_hidden: "true" }
            }
        },
    )
}
