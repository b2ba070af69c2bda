mod people;

pub use people::{SwapiPage, SwapiPerson};
