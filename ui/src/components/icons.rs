use dioxus::prelude::*;

#[component]
pub fn DownArrow() -> Element {
    rsx! {
        svg {
            class: "site-nav__chevron",
            view_box: "0 0 20 20",
            fill: "currentColor",
            "aria-hidden": "true",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M5.293 7.293a1 1 0 011.414 0L10 10.586l3.293-3.293a1 1 0 111.414 1.414l-4 4a1 1 0 01-1.414 0l-4-4a1 1 0 010-1.414z",
            }
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "site-nav__icon site-nav__icon--menu",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M4 6h16M4 12h16M4 18h16",
            }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "site-nav__icon site-nav__icon--close",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}
