use crate::ephemeris::CelestialBody;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds, declared in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const PRIORITY: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Allowed deviation; a separation matches only when strictly inside it
    pub fn max_orb(self) -> f64 {
        match self {
            AspectKind::Sextile => 6.0,
            _ => 8.0,
        }
    }

    /// Weight used by the influence aggregator
    pub fn base_strength(self) -> f64 {
        match self {
            AspectKind::Conjunction => 1.0,
            AspectKind::Sextile => 0.6,
            AspectKind::Square => 0.8,
            AspectKind::Trine => 0.9,
            AspectKind::Opposition => 0.85,
        }
    }

    pub fn nature(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "intense",
            AspectKind::Sextile => "harmonious",
            AspectKind::Square => "challenging",
            AspectKind::Trine => "flowing",
            AspectKind::Opposition => "polarizing",
        }
    }

    pub fn is_harmonious(self) -> bool {
        matches!(self, AspectKind::Trine | AspectKind::Sextile)
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying one angular separation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Deviation from the exact angle
    pub orb: f64,
}

/// An aspect between two bodies on a given date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    #[serde(rename = "planets")]
    pub bodies: [CelestialBody; 2],
    #[serde(rename = "type")]
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

impl Aspect {
    pub fn involves(&self, body: CelestialBody) -> bool {
        self.bodies.contains(&body)
    }

    pub fn connects(&self, a: CelestialBody, b: CelestialBody) -> bool {
        self.involves(a) && self.involves(b) && a != b
    }

    /// `base_strength * (1 - orb / 8)`, never negative
    pub fn strength(&self) -> f64 {
        (self.kind.base_strength() * (1.0 - self.orb / 8.0)).max(0.0)
    }
}

/// All aspects detected for one date
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AspectSet {
    pub pairs: Vec<Aspect>,
}

impl AspectSet {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aspect> {
        self.pairs.iter()
    }

    /// Aspect between two bodies, in either order
    pub fn find_between(&self, a: CelestialBody, b: CelestialBody) -> Option<&Aspect> {
        self.pairs.iter().find(|aspect| aspect.connects(a, b))
    }

    pub fn count_involving(&self, bodies: &[CelestialBody]) -> usize {
        self.pairs
            .iter()
            .filter(|aspect| bodies.iter().any(|b| aspect.involves(*b)))
            .count()
    }

    pub fn harmonious_count(&self) -> usize {
        self.pairs.iter().filter(|a| a.kind.is_harmonious()).count()
    }
}
