// src/application/ports/mod.rs
pub mod auth;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AuthProviderPort = dyn auth::AuthProvider;
pub type ObjectStoragePort = dyn storage::ObjectStorage;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
