/// Portal Service Library
///
/// Backend for the hackathon management portal. Most endpoints are plain
/// reads over the event's relational data; the heart of the service is the
/// project listing & ranking engine in `services::listing`, which computes
/// which projects a viewer sees and in what order, driven by
/// administrator-curated list configurations.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Domain data structures
/// - `services`: Business logic (the listing engine)
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
