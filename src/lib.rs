//! Talent agency back end: talent profiles per category, public lead forms,
//! the home slider and the admin back office, over Postgres and a hosted
//! storage/auth service.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
