mod repositories;
mod services;

pub use repositories::Repositories;
pub use services::Services;
