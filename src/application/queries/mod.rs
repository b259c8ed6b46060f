pub mod contacts;
pub mod materials;
pub mod slider;
pub mod stats;
pub mod talents;
