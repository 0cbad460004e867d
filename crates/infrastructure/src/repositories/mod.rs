pub mod restriction_repository;

pub use restriction_repository::SqliteRestrictionRepository;
