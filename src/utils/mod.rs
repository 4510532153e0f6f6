//! Utility modules for the publication page generator.

pub mod date;
pub mod escape;
pub mod link;
pub mod log;
pub mod minify;
pub mod template;
