//! Browser front end
//!
//! One wasm module serves both entry points: `content.js` calls
//! [`start_content_script`] on marble pages and `popup.js` calls
//! [`start_popup`].

mod bindings;
mod logger;
pub mod dom;
pub mod services;
pub mod content;
pub mod popup;

pub use content::start_content_script;
pub use popup::start_popup;

use wasm_bindgen::prelude::*;

/// Panic hook and console logging, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}
