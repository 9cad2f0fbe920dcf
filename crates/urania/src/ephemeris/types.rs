use crate::error::UraniaError;
use crate::western::ZodiacSign;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven classical bodies tracked by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Linear mean-motion elements, referenced to J2000.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalElements {
    /// Sidereal period in days (informational)
    pub period_days: f64,
    /// Mean longitude at the epoch, degrees
    pub base_longitude: f64,
    /// Mean motion, degrees per day
    pub daily_motion: f64,
}

// (body, period, base longitude, daily motion)
const ORBITAL_ELEMENTS: &[(CelestialBody, f64, f64, f64)] = &[
    (CelestialBody::Sun, 365.25, 280.46, 0.9856),
    (CelestialBody::Moon, 27.32, 134.96, 13.1764),
    (CelestialBody::Mercury, 87.97, 174.79, 4.0923),
    (CelestialBody::Venus, 224.70, 50.42, 1.6021),
    (CelestialBody::Mars, 686.98, 355.45, 0.5240),
    (CelestialBody::Jupiter, 4332.59, 34.40, 0.0831),
    (CelestialBody::Saturn, 10759.22, 50.08, 0.0335),
];

impl CelestialBody {
    pub const ALL: [CelestialBody; 7] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
    ];

    pub fn all() -> impl Iterator<Item = CelestialBody> {
        Self::ALL.iter().copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
        }
    }

    /// Lowercase identifier used as the JSON key for positions.
    pub fn id(self) -> String {
        self.name().to_lowercase()
    }

    pub fn elements(self) -> OrbitalElements {
        let (_, period_days, base_longitude, daily_motion) = ORBITAL_ELEMENTS[self.index()];
        OrbitalElements {
            period_days,
            base_longitude,
            daily_motion,
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = UraniaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CelestialBody::all()
            .find(|body| body.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UraniaError::UnknownBody(s.to_string()))
    }
}

/// Position of one body on a given date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub body: CelestialBody,
    pub sign: ZodiacSign,
    /// Degrees into the sign, [0, 30)
    pub degree_in_sign: f64,
    /// Ecliptic longitude, [0, 360)
    pub longitude: f64,
    pub retrograde: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    New,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    Full,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    pub fn label(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }

    pub fn is_waning(self) -> bool {
        matches!(
            self,
            MoonPhase::WaningGibbous | MoonPhase::LastQuarter | MoonPhase::WaningCrescent
        )
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the estimator derives for one date
#[derive(Debug, Clone, Serialize)]
pub struct Ephemeris {
    pub datetime: DateTime<Utc>,
    pub julian_day: f64,
    /// One entry per body, canonical order
    pub positions: Vec<Position>,
    pub moon_phase: MoonPhase,
}

impl Ephemeris {
    /// Looked up by body, so hand-built or partial position lists are fine
    pub fn position(&self, body: CelestialBody) -> Option<&Position> {
        self.positions.iter().find(|p| p.body == body)
    }
}
