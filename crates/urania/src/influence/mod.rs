pub mod keywords;
pub mod scores;

pub use keywords::{category_keywords, element_keywords, keywords_for_sign, moon_phase_keywords};
pub use scores::{compute_influences, InfluenceCategory, InfluenceScores};
