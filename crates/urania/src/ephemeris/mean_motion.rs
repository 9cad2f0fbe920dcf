use crate::ephemeris::julian::{days_since_j2000, julian_day};
use crate::ephemeris::lunar::moon_phase;
use crate::ephemeris::types::{CelestialBody, Ephemeris, Position};
use crate::western::{ZodiacSign, SIGN_SPAN_DEGREES};
use chrono::{DateTime, Utc};

/// Heuristic retrograde windows: (body, cycle length in days, window start, window end).
///
/// A body is flagged retrograde while `jd mod cycle` lies strictly inside the
/// window. This is a stand-in for real apparent motion.
const RETROGRADE_WINDOWS: &[(CelestialBody, f64, f64, f64)] = &[
    (CelestialBody::Mercury, 116.0, 88.0, 110.0),
    (CelestialBody::Venus, 584.0, 540.0, 584.0),
    (CelestialBody::Mars, 780.0, 700.0, 780.0),
];

/// Mean longitude of a body, normalized into [0, 360)
pub fn mean_longitude(body: CelestialBody, julian_day: f64) -> f64 {
    let elements = body.elements();
    let raw = elements.base_longitude + elements.daily_motion * days_since_j2000(julian_day);
    let lon = raw.rem_euclid(360.0);
    if lon >= 360.0 {
        0.0
    } else {
        lon
    }
}

pub fn is_retrograde(body: CelestialBody, julian_day: f64) -> bool {
    RETROGRADE_WINDOWS
        .iter()
        .find(|(b, ..)| *b == body)
        .map(|(_, cycle, start, end)| {
            let day_in_cycle = julian_day.rem_euclid(*cycle);
            day_in_cycle > *start && day_in_cycle < *end
        })
        .unwrap_or(false)
}

/// Position of a body for an already-converted Julian Day.
pub fn position_at(body: CelestialBody, julian_day: f64) -> Position {
    let longitude = mean_longitude(body, julian_day);
    let sign = ZodiacSign::from_longitude(longitude);
    let degree_in_sign = (longitude - sign.start_longitude()).clamp(0.0, SIGN_SPAN_DEGREES);
    // guard the open upper bound against float noise
    let degree_in_sign = if degree_in_sign >= SIGN_SPAN_DEGREES {
        0.0
    } else {
        degree_in_sign
    };

    Position {
        body,
        sign,
        degree_in_sign,
        longitude,
        retrograde: is_retrograde(body, julian_day),
    }
}

pub fn compute_position(body: CelestialBody, datetime: DateTime<Utc>) -> Position {
    position_at(body, julian_day(datetime))
}

/// Linear mean-motion estimator for the seven classical bodies.
pub struct MeanMotionEstimator;

impl MeanMotionEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Compute every body's position plus the moon phase for a date
    pub fn calc_positions(&self, datetime: DateTime<Utc>) -> Ephemeris {
        let jd = julian_day(datetime);
        let positions = CelestialBody::all()
            .map(|body| position_at(body, jd))
            .collect();

        Ephemeris {
            datetime,
            julian_day: jd,
            positions,
            moon_phase: moon_phase(jd),
        }
    }
}

impl Default for MeanMotionEstimator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compute_all(datetime: DateTime<Utc>) -> Ephemeris {
    MeanMotionEstimator::new().calc_positions(datetime)
}
