/// Business logic layer.
pub mod listing;
