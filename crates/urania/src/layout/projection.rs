//! Circular 2D projection of the predictions.
//!
//! Sign centroids sit on a circle of radius 0.35 around (0.5, 0.5). Each
//! prediction is offset from its centroid by a confidence-scaled radius at an
//! angle set by its method, then clamped into [0.05, 0.95].

use crate::layout::types::{Centroid, LayoutPoint};
use crate::predictions::{method_index, PredictionRecord, CALCULATION_METHODS};
use crate::western::ZodiacSign;
use std::collections::BTreeMap;
use std::f64::consts::TAU;

const CENTER: f64 = 0.5;
const RING_RADIUS: f64 = 0.35;
const BASE_POINT_RADIUS: f64 = 0.05;
const CONFIDENCE_RADIUS: f64 = 0.08;
const MIN_COORD: f64 = 0.05;
const MAX_COORD: f64 = 0.95;
pub const EXCERPT_CHARS: usize = 120;

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn sign_angle(sign: ZodiacSign) -> f64 {
    sign.index() as f64 / 12.0 * TAU
}

fn raw_centroid(sign: ZodiacSign) -> (f64, f64) {
    let angle = sign_angle(sign);
    (
        CENTER + RING_RADIUS * angle.cos(),
        CENTER + RING_RADIUS * angle.sin(),
    )
}

pub fn sign_centroid(sign: ZodiacSign) -> Centroid {
    let (x, y) = raw_centroid(sign);
    Centroid {
        x: round3(x),
        y: round3(y),
    }
}

pub fn centroids() -> BTreeMap<ZodiacSign, Centroid> {
    ZodiacSign::all().map(|s| (s, sign_centroid(s))).collect()
}

/// First `EXCERPT_CHARS` characters followed by "..."
pub fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

pub fn project_point(id: usize, record: &PredictionRecord) -> LayoutPoint {
    let (cx, cy) = raw_centroid(record.sign);
    let method_slot = method_index(record.method).unwrap_or(0);
    let method_angle = method_slot as f64 / CALCULATION_METHODS.len() as f64 * TAU;
    let radius = BASE_POINT_RADIUS + record.confidence * CONFIDENCE_RADIUS;
    let angle = method_angle + sign_angle(record.sign);

    let place = |v: f64| round3(v.clamp(MIN_COORD, MAX_COORD));
    LayoutPoint {
        id,
        x: place(cx + radius * angle.cos()),
        y: place(cy + radius * angle.sin()),
        sign: record.sign,
        method: record.method,
        prediction: excerpt(&record.prediction),
    }
}

/// One point per prediction, ids in input order
pub fn project_points(predictions: &[PredictionRecord]) -> Vec<LayoutPoint> {
    predictions
        .iter()
        .enumerate()
        .map(|(id, record)| project_point(id, record))
        .collect()
}
