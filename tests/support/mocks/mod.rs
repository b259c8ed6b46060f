// tests/support/mocks/mod.rs
//! In-memory stand-ins for the database, object storage and hosted auth.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod auth;
pub mod repos;
pub mod storage;
pub mod time;

pub use auth::{ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_TOKEN, REFRESH_TOKEN, StubAuth};
pub use repos::{MemoryContactRepo, MemoryMaterialRepo, MemorySliderRepo, MemoryTalentRepo};
pub use storage::{MemoryStorage, StoredObject};
pub use time::{FixedClock, fixed_now};
