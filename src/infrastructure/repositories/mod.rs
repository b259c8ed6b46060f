// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_contact;
mod postgres_material;
mod postgres_slider;
mod postgres_talent;

pub use error::map_sqlx;
pub use postgres_contact::PostgresContactRepository;
pub use postgres_material::PostgresMaterialRepository;
pub use postgres_slider::PostgresSliderRepository;
pub use postgres_talent::{PostgresTalentReadRepository, PostgresTalentWriteRepository};
