pub mod decision;

pub use decision::DecisionResponse;
