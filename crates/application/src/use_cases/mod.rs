pub mod restrictions;

pub use restrictions::EvaluateRestrictionUseCase;
