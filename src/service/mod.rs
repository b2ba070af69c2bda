mod catalog;
mod report;

pub use catalog::{CatalogService, FavoriteOutcome};
pub use report::{ImportFailure, ImportReport};
