pub mod catalog;
pub mod seed;

pub use catalog::ActivityCatalog;
