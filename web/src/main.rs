use dioxus::prelude::*;

use ui::components::{register_link_builder, NavigationBar};
use ui::views::SectionPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Section { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn router_link(to: &'static str, class: &'static str, children: Element) -> Element {
    rsx!(Link { class: class, to: to, {children} })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_link_builder(router_link);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Header above every routed page. The browser window is the scroll source.
#[component]
fn WebLayout() -> Element {
    rsx! {
        NavigationBar {}
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { SectionPage { path: "/" } }
}

#[component]
fn Section(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { SectionPage { path: path } }
}
