mod engine;

pub use engine::{evaluate, evaluate_at, Phase, PhaseResult};
