use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Builds an in-app link. Platforms register one so `ui` never needs to know
/// their `Route` enum; the closure receives the destination path, the CSS
/// class to apply and the already rendered children.
///
/// Example (in a platform crate):
/// ```ignore
/// fn router_link(to: &'static str, class: &'static str, children: Element) -> Element {
///     rsx!(Link { class, to, {children} })
/// }
/// ui::components::register_link_builder(router_link);
/// ```
///
/// Without a registered builder links render as plain anchors, which is what
/// server-side renders and tests see.
pub type LinkBuilder = fn(to: &'static str, class: &'static str, children: Element) -> Element;

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

/// Install the platform link builder. Only the first registration wins.
pub fn register_link_builder(builder: LinkBuilder) {
    let _ = LINK_BUILDER.set(builder);
}

pub(crate) fn site_link(to: &'static str, class: &'static str, children: Element) -> Element {
    match LINK_BUILDER.get() {
        Some(build) => build(to, class, children),
        None => rsx! {
            a { href: to, class: class, {children} }
        },
    }
}
