pub mod evaluate_restriction;

pub use evaluate_restriction::EvaluateRestrictionUseCase;
