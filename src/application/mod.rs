pub mod commands;
pub mod dto;
pub mod error;
pub mod forms;
pub mod ordering;
pub mod ports;
pub mod queries;
pub mod services;
pub mod uploads;

pub use error::ApplicationResult;
