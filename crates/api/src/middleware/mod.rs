pub mod client_ip;
pub mod restriction;

pub use client_ip::extract_client_address;
pub use restriction::enforce_restrictions;
