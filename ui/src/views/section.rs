use dioxus::prelude::*;

use crate::i18n;
use crate::nav::entry_for;
use crate::t;

/// Landing spot for every header destination until real content arrives.
/// Paths that no entry claims get a "not found" heading.
#[component]
pub fn SectionPage(path: String) -> Element {
    i18n::init();

    let title = match entry_for(&path) {
        Some(entry) => i18n::label(entry.message_id),
        None => t!("page-not-found"),
    };

    rsx! {
        section { class: "page page-section",
            h1 { "{title}" }
            p { {t!("page-placeholder")} }
        }
    }
}
