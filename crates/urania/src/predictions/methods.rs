use crate::ephemeris::{CelestialBody, Position};
use crate::influence::InfluenceCategory;
use crate::sky::DailySky;
use crate::western::{Element, SIGN_SPAN_DEGREES};
use serde::Serialize;

/// Distance from a sign boundary that counts as "on the cusp"
const CUSP_ORB_DEGREES: f64 = 3.0;

/// How a method derives its day-specific confidence modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MethodBasis {
    /// Aspect activity and retrograde state of the listed bodies
    Focus(&'static [CelestialBody]),
    /// Share of harmonious aspects among all aspects
    AspectHarmony,
    /// Evenness of the element distribution
    ElementBalance,
    /// Dominance of the most common quality
    QualityDominance,
    /// Share of bodies within a few degrees of a sign boundary
    CuspProximity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationMethod {
    pub name: &'static str,
    pub description: &'static str,
    pub emphasis: InfluenceCategory,
    pub basis: MethodBasis,
    /// Chance that a keyword suffix is appended to the reading
    pub keyword_probability: f64,
}

pub const CALCULATION_METHODS: [CalculationMethod; 10] = [
    CalculationMethod {
        name: "Solar Transit Analysis",
        description: "Sun-based vitality assessment",
        emphasis: InfluenceCategory::Energy,
        basis: MethodBasis::Focus(&[CelestialBody::Sun]),
        keyword_probability: 0.2,
    },
    CalculationMethod {
        name: "Lunar Phase Dynamics",
        description: "Moon phase and emotional rhythms",
        emphasis: InfluenceCategory::Emotion,
        basis: MethodBasis::Focus(&[CelestialBody::Moon]),
        keyword_probability: 0.2,
    },
    CalculationMethod {
        name: "Mercury Communication Matrix",
        description: "Information flow and analysis",
        emphasis: InfluenceCategory::Communication,
        basis: MethodBasis::Focus(&[CelestialBody::Mercury]),
        keyword_probability: 0.2,
    },
    CalculationMethod {
        name: "Venus-Mars Synergy",
        description: "Relationship and action dynamics",
        emphasis: InfluenceCategory::Harmony,
        basis: MethodBasis::Focus(&[CelestialBody::Venus, CelestialBody::Mars]),
        keyword_probability: 0.2,
    },
    CalculationMethod {
        name: "Jupiter Expansion Protocol",
        description: "Growth and opportunity indicators",
        emphasis: InfluenceCategory::Expansion,
        basis: MethodBasis::Focus(&[CelestialBody::Jupiter]),
        keyword_probability: 0.15,
    },
    CalculationMethod {
        name: "Saturn Structure Framework",
        description: "Discipline and limitation analysis",
        emphasis: InfluenceCategory::Structure,
        basis: MethodBasis::Focus(&[CelestialBody::Saturn]),
        keyword_probability: 0.15,
    },
    CalculationMethod {
        name: "Harmonic Resonance",
        description: "Aspects and angular relationships",
        emphasis: InfluenceCategory::Harmony,
        basis: MethodBasis::AspectHarmony,
        keyword_probability: 0.1,
    },
    CalculationMethod {
        name: "Element Balance Assessment",
        description: "Fire/earth/air/water distribution",
        emphasis: InfluenceCategory::Energy,
        basis: MethodBasis::ElementBalance,
        keyword_probability: 0.1,
    },
    CalculationMethod {
        name: "Quality Synthesis",
        description: "Cardinal/fixed/mutable emphasis",
        emphasis: InfluenceCategory::Structure,
        basis: MethodBasis::QualityDominance,
        keyword_probability: 0.1,
    },
    CalculationMethod {
        name: "Planetary Midpoint Activation",
        description: "Sign midpoint calculations",
        emphasis: InfluenceCategory::Communication,
        basis: MethodBasis::CuspProximity,
        keyword_probability: 0.15,
    },
];

/// Public summary written to the dataset
#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub emphasis: InfluenceCategory,
}

impl CalculationMethod {
    pub fn summary(&self) -> MethodSummary {
        MethodSummary {
            name: self.name,
            description: self.description,
            emphasis: self.emphasis,
        }
    }

    /// Day-specific modifier in [0, 1]; a pure function of positions and aspects.
    pub fn modifier(&self, sky: &DailySky) -> f64 {
        let value = match self.basis {
            MethodBasis::Focus(bodies) => focus_modifier(sky, bodies),
            MethodBasis::AspectHarmony => aspect_harmony(sky),
            MethodBasis::ElementBalance => element_balance(sky.positions()),
            MethodBasis::QualityDominance => quality_dominance(sky.positions()),
            MethodBasis::CuspProximity => cusp_proximity(sky.positions()),
        };
        value.clamp(0.0, 1.0)
    }
}

pub fn method_index(name: &str) -> Option<usize> {
    CALCULATION_METHODS.iter().position(|m| m.name == name)
}

fn focus_modifier(sky: &DailySky, bodies: &[CelestialBody]) -> f64 {
    let activity = (0.1 * sky.aspects.count_involving(bodies) as f64).min(0.4);
    let any_retrograde = bodies
        .iter()
        .any(|b| sky.position(*b).map_or(false, |p| p.retrograde));
    let retrograde_penalty = if any_retrograde {
        0.15
    } else {
        0.0
    };
    0.5 + activity - retrograde_penalty
}

fn aspect_harmony(sky: &DailySky) -> f64 {
    if sky.aspects.is_empty() {
        return 0.5;
    }
    sky.aspects.harmonious_count() as f64 / sky.aspects.len() as f64
}

pub fn element_balance(positions: &[Position]) -> f64 {
    if positions.is_empty() {
        return 0.5;
    }
    let mut counts = [0usize; 4];
    for p in positions {
        counts[p.sign.element().index()] += 1;
    }

    let n = positions.len() as f64;
    let buckets = Element::ALL.len() as f64;
    let mean = n / buckets;
    let variance = counts
        .iter()
        .map(|c| (*c as f64 - mean).powi(2))
        .sum::<f64>()
        / buckets;
    // every body in a single element
    let max_variance = ((n - mean).powi(2) + (buckets - 1.0) * mean.powi(2)) / buckets;

    1.0 - variance / max_variance
}

pub fn quality_dominance(positions: &[Position]) -> f64 {
    if positions.is_empty() {
        return 0.5;
    }
    let mut counts = [0usize; 3];
    for p in positions {
        counts[p.sign.quality().index()] += 1;
    }
    let max = counts.iter().copied().max().unwrap_or(0);
    max as f64 / positions.len() as f64
}

pub fn cusp_proximity(positions: &[Position]) -> f64 {
    if positions.is_empty() {
        return 0.0;
    }
    let on_cusp = positions
        .iter()
        .filter(|p| {
            p.degree_in_sign < CUSP_ORB_DEGREES
                || SIGN_SPAN_DEGREES - p.degree_in_sign < CUSP_ORB_DEGREES
        })
        .count();
    on_cusp as f64 / positions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::mean_motion::position_at;
    use crate::western::ZodiacSign;

    fn placed(body: CelestialBody, longitude: f64) -> Position {
        let mut p = position_at(body, 2451545.0);
        p.longitude = longitude;
        p.sign = ZodiacSign::from_longitude(longitude);
        p.degree_in_sign = longitude - p.sign.start_longitude();
        p
    }

    #[test]
    fn test_method_names_unique() {
        for (i, m) in CALCULATION_METHODS.iter().enumerate() {
            assert_eq!(method_index(m.name), Some(i));
            assert!((0.1..=0.2).contains(&m.keyword_probability));
        }
    }

    #[test]
    fn test_element_balance_extremes() {
        // all fire
        let clustered: Vec<_> = CelestialBody::all().map(|b| placed(b, 5.0)).collect();
        assert!(element_balance(&clustered).abs() < 1e-12);

        // 2/2/2/1 spread is close to even
        let lons = [5.0, 35.0, 65.0, 95.0, 125.0, 155.0, 185.0];
        let spread: Vec<_> = CelestialBody::all()
            .zip(lons)
            .map(|(b, lon)| placed(b, lon))
            .collect();
        assert!(element_balance(&spread) > 0.9);
    }

    #[test]
    fn test_quality_and_cusp() {
        let lons = [1.0, 31.0, 61.0, 91.0, 128.0, 160.0, 15.0];
        let positions: Vec<_> = CelestialBody::all()
            .zip(lons)
            .map(|(b, lon)| placed(b, lon))
            .collect();
        // cardinal: aries(1), cancer(91), aries(15) = 3 of 7
        assert!((quality_dominance(&positions) - 3.0 / 7.0).abs() < 1e-12);
        // 1, 31, 61 and 91 sit within 3 degrees of a boundary
        let expected = 4.0 / 7.0;
        assert!((cusp_proximity(&positions) - expected).abs() < 1e-12);
    }
}
