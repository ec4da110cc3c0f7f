//! Core data models for the inspector

pub mod world;
pub mod language;
pub mod message;
pub mod manifest;

pub use world::*;
pub use language::*;
pub use message::*;
pub use manifest::*;
