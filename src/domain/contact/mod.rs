pub mod entity;
pub mod repository;

pub use entity::{Contact, ContactId, NewContact};
pub use repository::ContactRepository;
