pub mod contact;
pub mod errors;
pub mod material;
pub mod ordering;
pub mod slider;
pub mod slug;
pub mod talent;
