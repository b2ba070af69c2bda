pub mod characters;
pub mod home;
