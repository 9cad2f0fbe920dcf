pub mod calculator;
pub mod types;

pub use calculator::{compute_aspects, AspectCalculator};
pub use types::{Aspect, AspectCore, AspectKind, AspectSet};
