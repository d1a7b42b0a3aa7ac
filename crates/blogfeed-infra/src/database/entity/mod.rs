//! SeaORM entities for the `blogs` and `articles` tables.

pub mod article;
pub mod blog;
