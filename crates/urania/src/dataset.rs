//! Assembly of one day's dataset.
//!
//! ephemeris -> aspects -> influences -> predictions -> readings ->
//! compatibility -> layout -> protocol. The result is plain data; serializing
//! the same date twice yields identical JSON.

use crate::aspects::Aspect;
use crate::compatibility::{compatibility_matrix, CompatibilityEntry};
use crate::ephemeris::{CelestialBody, MoonPhase, Position};
use crate::influence::InfluenceScores;
use crate::layout::{centroids, project_points, Centroid, LayoutPoint};
use crate::predictions::{
    generate_predictions, synthesize_daily_readings, GenerationOptions, MethodSummary,
    PredictionRecord, TemplateBank, CALCULATION_METHODS,
};
use crate::protocol::{daily_protocol, DailyProtocol};
use crate::sky::DailySky;
use crate::western::ZodiacSign;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Position as written to the dataset, degrees rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionView {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub longitude: f64,
    pub retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<MoonPhase>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl PositionView {
    pub fn from_position(position: &Position, phase: Option<MoonPhase>) -> Self {
        Self {
            sign: position.sign,
            degree: round1(position.degree_in_sign),
            longitude: round1(position.longitude),
            retrograde: position.retrograde,
            phase,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyDataset {
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub julian_day: f64,
    /// Keyed by lowercase body id
    pub planetary_positions: BTreeMap<String, PositionView>,
    pub major_aspects: Vec<Aspect>,
    pub influences: InfluenceScores,
    pub calculation_methods: Vec<MethodSummary>,
    pub centroids: BTreeMap<ZodiacSign, Centroid>,
    pub points: Vec<LayoutPoint>,
    pub readings: BTreeMap<ZodiacSign, String>,
    pub compatibility_matrix: BTreeMap<String, CompatibilityEntry>,
    pub daily_protocol: DailyProtocol,
    /// Full prediction set; the JSON carries the points and readings derived from it.
    #[serde(skip)]
    pub predictions: Vec<PredictionRecord>,
}

impl DailyDataset {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn position_views(sky: &DailySky) -> BTreeMap<String, PositionView> {
    sky.positions()
        .iter()
        .map(|p| {
            let phase = (p.body == CelestialBody::Moon).then(|| sky.moon_phase());
            (p.body.id(), PositionView::from_position(p, phase))
        })
        .collect()
}

/// Build the dataset from an already computed sky.
pub fn assemble_dataset(
    sky: &DailySky,
    options: &GenerationOptions,
    bank: &TemplateBank,
) -> DailyDataset {
    let predictions = generate_predictions(sky, bank, *options);
    let readings = synthesize_daily_readings(&predictions);
    let matrix = compatibility_matrix(sky);
    let points = project_points(&predictions);

    log::debug!(
        "{}: {} aspects, {} predictions, {} readings, {} pairings, {} points",
        sky.date_label(),
        sky.aspects.len(),
        predictions.len(),
        readings.len(),
        matrix.len(),
        points.len()
    );

    DailyDataset {
        last_updated: sky.date_label(),
        julian_day: sky.ephemeris.julian_day,
        planetary_positions: position_views(sky),
        major_aspects: sky.aspects.iter().copied().collect(),
        influences: sky.influences,
        calculation_methods: CALCULATION_METHODS.iter().map(|m| m.summary()).collect(),
        centroids: centroids(),
        points,
        readings,
        compatibility_matrix: matrix,
        daily_protocol: daily_protocol(sky.datetime()),
        predictions,
    }
}

pub fn generate_daily_dataset(
    datetime: DateTime<Utc>,
    options: &GenerationOptions,
    bank: &TemplateBank,
) -> DailyDataset {
    let sky = DailySky::compute(datetime);
    assemble_dataset(&sky, options, bank)
}
