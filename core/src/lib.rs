#![no_std]

//! Light/dark theme preference for a static page: persisted under `theme`,
//! mirrored onto the `data-theme` attribute of the document root.

extern crate alloc;

pub use error::*;
pub use storage::*;
pub use store::*;
pub use surface::*;
pub use theme::*;

mod error;
mod storage;
mod store;
mod surface;
mod theme;
