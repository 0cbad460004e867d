//! IP Gate Infrastructure Layer
pub mod cache;
pub mod database;
pub mod geo;
pub mod repositories;
