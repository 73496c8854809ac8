//! Mood-quiz movie and show recommendations.
//!
//! A fixed catalog of titles is scored against five quiz answers by a
//! deterministic rule set; the best six are returned. The crate also serves
//! the engine over HTTP (see [`api`]).

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use catalog::Catalog;
pub use error::{AppError, AppResult};
