//! Page scroll signal as an injectable capability.
//!
//! Components never touch `window` directly. They ask the context for a
//! [`ScrollSignal`] (falling back to [`ScrollSignal::platform_default`]) and
//! subscribe through [`use_scroll_listener`]. The returned
//! [`ScrollSubscription`] removes the listener when dropped, and the hook drops
//! it when the owning component unmounts.
//!
//! Sources:
//! - `WindowScroll` (wasm32): `scroll` events on the browser window.
//! - [`ManualScroll`]: in-memory fan-out. Used by tests and by hosts that
//!   forward offsets from elsewhere (the desktop webview bridge).

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

/// Callback receiving the current vertical offset.
pub type ScrollListener = Rc<dyn Fn(f64)>;

#[derive(Debug, thiserror::Error)]
pub enum ScrollError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("could not register scroll listener: {0}")]
    Listener(String),
}

pub trait ScrollSource {
    fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollError>;
}

/// Drop guard for one registered listener.
#[must_use = "dropping the subscription removes the listener immediately"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Context handle wrapping whichever source the host provides.
#[derive(Clone)]
pub struct ScrollSignal(Rc<dyn ScrollSource>);

impl ScrollSignal {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self::new(window::WindowScroll)
    }

    /// Outside the browser there is no page to observe; hosts that have one
    /// provide their own signal through context.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        Self::new(ManualScroll::default())
    }

    pub fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollError> {
        self.0.subscribe(listener)
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollSignal")
    }
}

#[derive(Default)]
struct Registry {
    offset: f64,
    next_id: u64,
    listeners: Vec<(u64, ScrollListener)>,
}

/// Scroll source driven by explicit [`ManualScroll::emit`] calls.
#[derive(Clone, Default)]
pub struct ManualScroll {
    registry: Rc<RefCell<Registry>>,
}

impl ManualScroll {
    /// Record `offset` and notify every listener.
    pub fn emit(&self, offset: f64) {
        // Snapshot so listeners may subscribe or drop guards while running.
        let listeners: Vec<ScrollListener> = {
            let mut registry = self.registry.borrow_mut();
            registry.offset = offset;
            registry.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(offset);
        }
    }

    pub fn offset(&self) -> f64 {
        self.registry.borrow().offset
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl ScrollSource for ManualScroll {
    fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollError> {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };
        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        Ok(ScrollSubscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        }))
    }
}

impl PartialEq for ManualScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for ManualScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScroll")
            .field("offset", &self.offset())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(target_arch = "wasm32")]
mod window {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{ScrollError, ScrollListener, ScrollSource, ScrollSubscription};

    /// `scroll` events on the global window.
    pub struct WindowScroll;

    impl ScrollSource for WindowScroll {
        fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollError> {
            let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
            let reader = window.clone();
            let handler = Closure::<dyn FnMut()>::new(move || {
                listener(reader.scroll_y().unwrap_or(0.0));
            });
            window
                .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
                .map_err(|err| ScrollError::Listener(format!("{err:?}")))?;

            Ok(ScrollSubscription::new(move || {
                let _ = window
                    .remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
                drop(handler);
            }))
        }
    }
}

/// Subscribe `on_scroll` for the lifetime of the calling component.
///
/// The source comes from context when a host provided one. Subscription
/// failures are logged and leave the component without scroll updates.
pub fn use_scroll_listener(on_scroll: impl Fn(f64) + 'static) {
    let source = try_use_context::<ScrollSignal>();
    let slot = use_hook(move || {
        let source = source.unwrap_or_else(ScrollSignal::platform_default);
        let subscription = match source.subscribe(Rc::new(on_scroll)) {
            Ok(subscription) => {
                debug!("scroll listener attached");
                subscription
            }
            Err(err) => {
                warn!("scroll listener unavailable: {err}");
                ScrollSubscription::inert()
            }
        };
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        if slot.borrow_mut().take().is_some() {
            debug!("scroll listener released");
        }
    });
}
