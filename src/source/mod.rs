//! External character source (SWAPI people listing).

mod client;

pub use client::SwapiClient;

pub const HOLOCRON_USER_AGENT: &str = concat!("holocron/", env!("CARGO_PKG_VERSION"));
