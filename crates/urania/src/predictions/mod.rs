pub mod methods;
pub mod readings;
pub mod seed;
pub mod selector;
pub mod templates;

pub use methods::{method_index, CalculationMethod, MethodBasis, MethodSummary, CALCULATION_METHODS};
pub use readings::{headline_for, synthesize_daily_readings};
pub use seed::{pick_index, prediction_seed, pseudo_random};
pub use selector::{
    generate_predictions, select_prediction, GenerationOptions, PredictionGenerator,
    PredictionRecord,
};
pub use templates::{render_template, TemplateBank};
