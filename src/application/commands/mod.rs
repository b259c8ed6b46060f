pub mod auth;
pub mod contacts;
pub mod materials;
pub mod slider;
pub mod talents;
