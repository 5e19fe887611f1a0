//! Format capability implementations

pub mod json;
pub mod text;

pub use json::JsonFormat;
pub use text::TextFormat;
