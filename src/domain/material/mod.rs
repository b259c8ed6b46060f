pub mod entity;
pub mod repository;

pub use entity::{ApplicantProfile, MaterialId, MaterialSubmission, NewMaterialSubmission, ADULT_AGE};
pub use repository::MaterialRepository;
