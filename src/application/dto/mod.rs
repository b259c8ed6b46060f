pub mod auth;
pub mod contacts;
pub mod materials;
pub mod slider;
pub mod stats;
pub mod talents;

pub use auth::{AuthSession, SessionUser};
pub use contacts::ContactDto;
pub use materials::MaterialDto;
pub use slider::SliderImageDto;
pub use stats::TalentStatsDto;
pub use talents::TalentDto;
