use crate::aspects::{compute_aspects, AspectSet};
use crate::ephemeris::{compute_all, date_seed, CelestialBody, Ephemeris, MoonPhase, Position};
use crate::influence::{compute_influences, InfluenceScores};
use chrono::{DateTime, Utc};

/// Positions, aspects and influences for one date; the input to every scorer.
#[derive(Debug, Clone)]
pub struct DailySky {
    pub ephemeris: Ephemeris,
    pub aspects: AspectSet,
    pub influences: InfluenceScores,
}

impl DailySky {
    pub fn compute(datetime: DateTime<Utc>) -> Self {
        let ephemeris = compute_all(datetime);
        Self::from_ephemeris(ephemeris)
    }

    pub fn from_ephemeris(ephemeris: Ephemeris) -> Self {
        let aspects = compute_aspects(&ephemeris.positions);
        let influences = compute_influences(&ephemeris.positions, &aspects);
        Self {
            ephemeris,
            aspects,
            influences,
        }
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.ephemeris.datetime
    }

    pub fn date_seed(&self) -> i64 {
        date_seed(self.ephemeris.datetime)
    }

    /// ISO calendar date, e.g. `2024-01-01`
    pub fn date_label(&self) -> String {
        self.ephemeris.datetime.format("%Y-%m-%d").to_string()
    }

    pub fn positions(&self) -> &[Position] {
        &self.ephemeris.positions
    }

    pub fn position(&self, body: CelestialBody) -> Option<&Position> {
        self.ephemeris.position(body)
    }

    pub fn moon_phase(&self) -> MoonPhase {
        self.ephemeris.moon_phase
    }
}
