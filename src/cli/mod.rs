//! Native front end: previews and packaging from the command line

pub mod source;
pub mod preview;

pub use source::HttpWorldSource;
pub use preview::{run_preview, Preview};
