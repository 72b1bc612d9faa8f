pub mod build_model;
pub mod resolve_roll;

pub use build_model::BuildModel;
pub use resolve_roll::{ResolveRoll, RollState};
