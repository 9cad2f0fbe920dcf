pub mod matrix;
pub mod scorer;
pub mod tables;

pub use matrix::{compatibility_matrix, lookup, pair_key};
pub use scorer::{base_score, compute_compatibility, day_bonus, CompatibilityEntry, DayBonus};
pub use tables::{
    element_affinity, element_description, quality_interaction, CompatibilityLevel,
    QualityInteraction,
};
