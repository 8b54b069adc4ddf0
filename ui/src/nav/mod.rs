//! Header model: the entry table, the view state and the scroll capability.

mod entries;
pub mod scroll;
mod state;

pub use entries::{entry_for, NavEntry, CONTACT_ENTRY, NAV_ENTRIES};
pub use scroll::{
    use_scroll_listener, ManualScroll, ScrollError, ScrollListener, ScrollSignal, ScrollSource,
    ScrollSubscription,
};
pub use state::{ViewState, SCROLL_THRESHOLD};
