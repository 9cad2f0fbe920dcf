//! Urania: a science-themed daily astrology dataset generator.
//!
//! Positions come from a linear mean-motion model; every downstream value
//! (aspects, influences, readings, compatibility, layout) is a pure function
//! of the date, so a date always reproduces the same dataset.

pub mod aspects;
pub mod compatibility;
pub mod dataset;
pub mod ephemeris;
pub mod error;
pub mod influence;
pub mod layout;
pub mod predictions;
pub mod protocol;
pub mod sky;
pub mod western;

pub use dataset::{assemble_dataset, generate_daily_dataset, DailyDataset, PositionView};
pub use error::UraniaError;
pub use predictions::{GenerationOptions, TemplateBank};
pub use sky::DailySky;
