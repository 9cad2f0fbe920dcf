//! Fixed lookup tables for sign pair scoring.

use crate::western::{Element, Quality};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symmetric element affinity, indexed by `Element::index`.
const ELEMENT_AFFINITY: [[f64; 4]; 4] = [
    // fire  earth  air   water
    [80.0, 55.0, 90.0, 45.0],
    [55.0, 75.0, 60.0, 85.0],
    [90.0, 60.0, 75.0, 50.0],
    [45.0, 85.0, 50.0, 80.0],
];

pub fn element_affinity(a: Element, b: Element) -> f64 {
    ELEMENT_AFFINITY[a.index()][b.index()]
}

pub fn element_description(a: Element, b: Element) -> &'static str {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    match (lo, hi) {
        (Element::Fire, Element::Fire) => "Dual combustion reactions create high-energy dynamics",
        (Element::Fire, Element::Earth) => "Heat-substrate interactions show partial activity",
        (Element::Fire, Element::Air) => "Oxygen-rich environment amplifies flame propagation",
        (Element::Fire, Element::Water) => {
            "Phase opposition creates steam, volatile but transformative"
        }
        (Element::Earth, Element::Earth) => "Solid-phase crystallization yields stable structures",
        (Element::Earth, Element::Air) => "Gas-solid interface shows moderate surface activity",
        (Element::Earth, Element::Water) => "Aqueous dissolution optimizes substrate utilization",
        (Element::Air, Element::Air) => "Gaseous diffusion maximizes molecular mobility",
        (Element::Air, Element::Water) => "Surface tension effects create boundary challenges",
        (Element::Water, Element::Water) => "Fluid dynamics enable seamless flow and mixing",
        _ => "Complex interaction patterns",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityInteraction {
    pub modifier: f64,
    pub description: &'static str,
}

/// Keyed by the sorted quality pair.
pub fn quality_interaction(a: Quality, b: Quality) -> QualityInteraction {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let (modifier, description) = match (lo, hi) {
        (Quality::Cardinal, Quality::Cardinal) => {
            (1.1, "High initiative, potential leadership conflicts")
        }
        (Quality::Cardinal, Quality::Fixed) => (1.0, "Balance of initiation and stability"),
        (Quality::Cardinal, Quality::Mutable) => (0.95, "Dynamic yet adaptable partnership"),
        (Quality::Fixed, Quality::Fixed) => (0.9, "Stubborn but deeply stable bond"),
        (Quality::Fixed, Quality::Mutable) => (1.05, "Grounding meets flexibility"),
        (Quality::Mutable, Quality::Mutable) => (0.85, "Highly adaptable, low stability"),
        _ => (1.0, "Balanced interaction"),
    };
    QualityInteraction {
        modifier,
        description,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Exceptional,
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Moderate,
    Challenging,
    Difficult,
}

impl CompatibilityLevel {
    const THRESHOLDS: [(f64, CompatibilityLevel); 6] = [
        (90.0, CompatibilityLevel::Exceptional),
        (80.0, CompatibilityLevel::Excellent),
        (70.0, CompatibilityLevel::VeryGood),
        (60.0, CompatibilityLevel::Good),
        (50.0, CompatibilityLevel::Moderate),
        (40.0, CompatibilityLevel::Challenging),
    ];

    pub fn from_score(score: f64) -> CompatibilityLevel {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(CompatibilityLevel::Difficult)
    }

    pub fn name(self) -> &'static str {
        match self {
            CompatibilityLevel::Exceptional => "Exceptional",
            CompatibilityLevel::Excellent => "Excellent",
            CompatibilityLevel::VeryGood => "Very Good",
            CompatibilityLevel::Good => "Good",
            CompatibilityLevel::Moderate => "Moderate",
            CompatibilityLevel::Challenging => "Challenging",
            CompatibilityLevel::Difficult => "Difficult",
        }
    }

    /// Lab-flavoured descriptor used in the synthesis text
    pub fn lab_descriptor(self) -> &'static str {
        match self {
            CompatibilityLevel::Exceptional => {
                "Near-perfect cooperative binding with minimal energy barriers"
            }
            CompatibilityLevel::Excellent => {
                "Strong synergistic interactions with favorable thermodynamics"
            }
            CompatibilityLevel::VeryGood => {
                "Stable complex formation with manageable activation energy"
            }
            CompatibilityLevel::Good => {
                "Functional protein-protein interactions requiring optimization"
            }
            CompatibilityLevel::Moderate => "Mixed dynamics with competing pathways",
            CompatibilityLevel::Challenging => {
                "High energy barriers requiring catalytic assistance"
            }
            CompatibilityLevel::Difficult => "Unfavorable binding kinetics with repulsive forces",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_table_symmetric() {
        for a in Element::ALL {
            for b in Element::ALL {
                assert_eq!(element_affinity(a, b), element_affinity(b, a));
                assert_eq!(element_description(a, b), element_description(b, a));
            }
        }
        assert_eq!(element_affinity(Element::Fire, Element::Air), 90.0);
        assert_eq!(element_affinity(Element::Water, Element::Fire), 45.0);
    }

    #[test]
    fn test_quality_pairs_order_independent() {
        let qi = quality_interaction(Quality::Mutable, Quality::Fixed);
        assert_eq!(qi.modifier, 1.05);
        assert_eq!(qi, quality_interaction(Quality::Fixed, Quality::Mutable));
        assert_eq!(quality_interaction(Quality::Mutable, Quality::Mutable).modifier, 0.85);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(CompatibilityLevel::from_score(100.0), CompatibilityLevel::Exceptional);
        assert_eq!(CompatibilityLevel::from_score(90.0), CompatibilityLevel::Exceptional);
        assert_eq!(CompatibilityLevel::from_score(89.9), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(70.0), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_score(40.0), CompatibilityLevel::Challenging);
        assert_eq!(CompatibilityLevel::from_score(39.99), CompatibilityLevel::Difficult);
        assert_eq!(CompatibilityLevel::from_score(0.0), CompatibilityLevel::Difficult);
    }
}
