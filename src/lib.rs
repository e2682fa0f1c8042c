pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod types;

pub use error::{AppError, Result};
