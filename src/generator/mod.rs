//! Output generators: publication pages, the publication list, sitemap and
//! orphan cleanup.

pub mod cleanup;
pub mod list;
pub mod page;
pub mod sitemap;
