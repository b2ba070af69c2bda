pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod service;
pub mod snapshot;
pub mod source;
pub mod utils;

pub use error::HolocronError;
pub use service::{CatalogService, FavoriteOutcome, ImportReport};
