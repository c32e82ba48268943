//! Pipeline module - scanning, loading and converting caption files

pub mod converter;
pub mod filter;
pub mod loader;
pub mod record;
pub mod scanner;
pub mod timecode;

pub use converter::*;
pub use filter::*;
pub use loader::*;
pub use record::*;
pub use scanner::*;
pub use timecode::*;
