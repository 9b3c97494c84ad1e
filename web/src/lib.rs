use std::cell::RefCell;
use std::rc::Rc;

use clap::Parser;
use landing_theme_core::ThemeStore;
use wasm_bindgen::prelude::*;

pub use storage::*;
pub use surface::*;
pub use toggle::*;

mod storage;
mod surface;
mod toggle;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// CSS selector of the control that switches between light and dark
    #[arg(long, default_value = DEFAULT_TOGGLE_SELECTOR)]
    toggle_selector: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: clap_verbosity_flag::Verbosity::new(0, 0),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_string(),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    // Plain in-page anchors (`#pricing`) are not arguments, the theme must
    // still be applied before paint.
    let (args, parse_error) = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::debug!("ignoring location hash {:?}: {}", location_hash, err);
    }

    let surface = match DocumentSurface::from_document() {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("cannot apply theme: {}", err);
            return;
        }
    };
    let store = ThemeStore::initialize(BrowserStorage::local(), surface);
    log::debug!("theme initialized: {}", store.theme());

    if let Some(listener) = attach(Rc::new(RefCell::new(store)), &args.toggle_selector) {
        // the control lives as long as the page
        listener.forget();
    }
}
