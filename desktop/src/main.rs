#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::components::{register_link_builder, NavigationBar};
use ui::nav::{ManualScroll, ScrollSignal};
use ui::views::SectionPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Section { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop /assets needed.

/// Runs inside the webview and reports every `window.scrollY` change.
const SCROLL_BRIDGE_JS: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener("scroll", report, { passive: true });
    report();
"#;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Frontline – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn router_link(to: &'static str, class: &'static str, children: Element) -> Element {
    rsx!(Link { class: class, to: to, {children} })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_link_builder(router_link);

    // The webview owns the page, so its scroll offsets are forwarded into a
    // ManualScroll that the header subscribes to through context.
    let bridge = use_hook(ManualScroll::default);
    use_context_provider({
        let bridge = bridge.clone();
        move || ScrollSignal::new(bridge)
    });
    use_future(move || {
        let bridge = bridge.clone();
        async move {
            let mut eval = document::eval(SCROLL_BRIDGE_JS);
            loop {
                match eval.recv::<f64>().await {
                    Ok(offset) => bridge.emit(offset),
                    Err(err) => {
                        warn!("scroll bridge closed: {err}");
                        break;
                    }
                }
            }
        }
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

/// A desktop-specific layout around the shared header.
#[component]
fn DesktopLayout() -> Element {
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
