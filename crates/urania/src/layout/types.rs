use crate::western::ZodiacSign;
use serde::{Deserialize, Serialize};

/// Sign centre on the unit square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

/// One prediction placed around its sign's centroid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub sign: ZodiacSign,
    pub method: &'static str,
    /// Leading excerpt of the prediction text
    pub prediction: String,
}
