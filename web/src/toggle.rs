use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::document;
use landing_theme_core::ThemeStore;

use crate::{BrowserStorage, DocumentSurface};

pub const DEFAULT_TOGGLE_SELECTOR: &str = ".theme-toggle";

pub type PageThemeStore = ThemeStore<BrowserStorage, DocumentSurface>;

/// Wires the first element matching `selector` to [`ThemeStore::toggle`].
///
/// Returns `None` when the page has no such control; the theme applied at
/// startup then simply stays as it is.
pub fn attach(store: Rc<RefCell<PageThemeStore>>, selector: &str) -> Option<EventListener> {
    let control = match document().query_selector(selector) {
        Ok(Some(control)) => control,
        Ok(None) => {
            log::debug!("no theme toggle matches {:?}", selector);
            return None;
        }
        Err(err) => {
            log::error!("invalid theme toggle selector {:?}: {:?}", selector, err);
            return None;
        }
    };

    Some(EventListener::new(&control, "click", move |_| {
        let theme = store.borrow_mut().toggle();
        log::debug!("theme toggled to {}", theme);
    }))
}
