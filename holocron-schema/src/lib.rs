pub mod swapi;

pub use swapi::{SwapiPage, SwapiPerson};
