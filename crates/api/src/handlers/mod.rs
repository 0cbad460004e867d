pub mod health;
pub mod restrictions;

pub use health::health_check;
pub use restrictions::evaluate_ip;
