pub mod entity;
pub mod images;
pub mod kind;
pub mod repository;
pub mod services;

pub use entity::{Block, BlockKind, NewTalent, Talent, TalentId, TalentUpdate, sort_blocks};
pub use images::{CoverSelection, ImageSet, PrincipalImage};
pub use kind::TalentKind;
pub use repository::{TalentReadRepository, TalentWriteRepository};
